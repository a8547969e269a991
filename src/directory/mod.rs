/// Doctor directory module
///
/// Loads the read-only list of bookable doctors once at startup.
///
/// ## Architecture
///
/// ```text
/// DoctorSource (HTTP endpoint)
///   └── load_directory ──ok──> Directory { origin: Remote }
///                      └─err─> Directory { origin: Fallback } (3 sample doctors)
/// ```

pub mod doctor;
pub mod fallback;
pub mod loader;

pub use doctor::{Doctor, DoctorId};
pub use fallback::fallback_doctors;
pub use loader::{load_directory, spawn_load, DoctorSource, HttpDoctorSource};

/// Where the directory contents came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryOrigin {
    /// Served by the configured endpoint
    Remote { url: String },

    /// Endpoint failed, built-in samples substituted
    Fallback { reason: String },
}

/// Read-only list of doctors
#[derive(Debug, Clone)]
pub struct Directory {
    doctors: Vec<Doctor>,
    origin: DirectoryOrigin,
}

impl Directory {
    pub fn new(doctors: Vec<Doctor>, origin: DirectoryOrigin) -> Self {
        Self { doctors, origin }
    }

    /// Directory made of the built-in sample doctors
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self::new(
            fallback_doctors(),
            DirectoryOrigin::Fallback {
                reason: reason.into(),
            },
        )
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn get(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: DoctorId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn origin(&self) -> &DirectoryOrigin {
        &self.origin
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, DirectoryOrigin::Fallback { .. })
    }
}
