/// Directory loading
///
/// One attempt against the configured source; any failure falls back to the
/// built-in sample set so the wizard stays usable offline.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver};
use tracing::{info, warn};

use super::doctor::Doctor;
use super::fallback::fallback_doctors;
use super::{Directory, DirectoryOrigin};
use crate::error::DirectoryError;

/// Anything that can produce the doctor list
pub trait DoctorSource: Send {
    /// Fetch the full list (single attempt)
    fn fetch(&self) -> Result<Vec<Doctor>, DirectoryError>;

    /// Human-readable location, used for logging and the directory origin
    fn location(&self) -> String;
}

/// Fetches the directory from an HTTP endpoint returning a JSON array
pub struct HttpDoctorSource {
    url: String,
    timeout: Duration,
}

impl HttpDoctorSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl DoctorSource for HttpDoctorSource {
    fn fetch(&self) -> Result<Vec<Doctor>, DirectoryError> {
        let user_agent = format!("DoctorBooking/{}", env!("CARGO_PKG_VERSION"));
        let response = match ureq::get(&self.url)
            .set("User-Agent", &user_agent)
            .set("Accept", "application/json")
            .timeout(self.timeout)
            .call()
        {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, _)) => {
                return Err(DirectoryError::Status { status });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(DirectoryError::Transport {
                    url: self.url.clone(),
                    source: Box::new(transport),
                });
            }
        };

        // ureq only reports >= 400 as errors
        if !(200..300).contains(&response.status()) {
            return Err(DirectoryError::Status {
                status: response.status(),
            });
        }

        response
            .into_json::<Vec<Doctor>>()
            .map_err(|e| DirectoryError::Parse(Box::new(e)))
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Load the directory, substituting the fallback set on any failure.
///
/// The failure is logged and never surfaced to the user.
pub fn load_directory(source: &dyn DoctorSource) -> Directory {
    let location = source.location();
    info!("[directory] Fetching doctors from {}", location);

    match source.fetch() {
        Ok(doctors) => {
            info!("[directory] Loaded {} doctors", doctors.len());
            Directory::new(doctors, DirectoryOrigin::Remote { url: location })
        }
        Err(e) => {
            warn!(
                "[directory] Could not fetch doctors from {}: {}; using fallback sample",
                location, e
            );
            Directory::new(
                fallback_doctors(),
                DirectoryOrigin::Fallback {
                    reason: e.to_string(),
                },
            )
        }
    }
}

/// Run `load_directory` on a background thread.
///
/// The returned receiver yields exactly one directory.
pub fn spawn_load(source: Box<dyn DoctorSource>) -> Receiver<Directory> {
    let (tx, rx) = bounded(1);

    thread::spawn(move || {
        let directory = load_directory(source.as_ref());
        // Receiver gone means the session already quit
        let _ = tx.send(directory);
    });

    rx
}
