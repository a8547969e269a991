/// Booking state
///
/// The single record the wizard mutates in place during a session.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::steps::BookingStep;
use crate::directory::DoctorId;

/// A user-provided file attached to the consultation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRef {
    /// File name shown to the user
    pub name: String,

    /// Full location, kept for whoever submits the booking
    pub path: PathBuf,
}

impl DocumentRef {
    /// Build a reference from a file path. `None` if the path has no file name.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            name,
            path: path.to_path_buf(),
        })
    }
}

/// Booking state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingState {
    step: BookingStep,

    /// Id of a directory member, never a copy of the record
    doctor: Option<DoctorId>,

    concern: String,
    document: Option<DocumentRef>,
    date: String,
    time: String,
}

impl BookingState {
    /// Fresh state: Select step, nothing chosen
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn set_step(&mut self, step: BookingStep) {
        self.step = step;
    }

    pub fn doctor(&self) -> Option<DoctorId> {
        self.doctor
    }

    pub fn set_doctor(&mut self, doctor: Option<DoctorId>) {
        self.doctor = doctor;
    }

    pub fn concern(&self) -> &str {
        &self.concern
    }

    pub fn set_concern(&mut self, concern: impl Into<String>) {
        self.concern = concern.into();
    }

    pub fn document(&self) -> Option<&DocumentRef> {
        self.document.as_ref()
    }

    pub fn set_document(&mut self, document: Option<DocumentRef>) {
        self.document = document;
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// Store both halves of the appointment slot
    pub fn set_schedule(&mut self, date: impl Into<String>, time: impl Into<String>) {
        self.date = date.into();
        self.time = time.into();
    }

    /// Replace everything with a fresh state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
