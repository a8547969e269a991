/// Booking flow management
///
/// Owns the directory and the booking state and enforces the step
/// transitions. Every rejected action leaves the state untouched.

use serde::Serialize;
use tracing::{debug, info};

use super::state::{BookingState, DocumentRef};
use super::steps::BookingStep;
use crate::directory::{Directory, Doctor, DoctorId};
use crate::error::{BookingError, MissingField};

/// Date/time values as entered on the DateTime form, read at Continue time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTimeInput {
    pub date: String,
    pub time: String,
}

impl DateTimeInput {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }

    fn missing(&self) -> Option<MissingField> {
        match (self.date.is_empty(), self.time.is_empty()) {
            (false, false) => None,
            (true, false) => Some(MissingField::Date),
            (false, true) => Some(MissingField::Time),
            (true, true) => Some(MissingField::Both),
        }
    }
}

/// Snapshot handed to whoever submits the booking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmedBooking {
    pub doctor: Doctor,
    pub concern: String,
    pub document: Option<DocumentRef>,
    pub date: String,
    pub time: String,
}

/// Navigation result
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationResult {
    /// Now on the given step
    Moved(BookingStep),

    /// Booking confirmed, state reset to Select
    Confirmed(ConfirmedBooking),
}

/// Booking flow manager
pub struct BookingFlow {
    directory: Directory,
    state: BookingState,
}

impl BookingFlow {
    /// Create a flow over a loaded directory, starting at Select
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            state: BookingState::new(),
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn current_step(&self) -> BookingStep {
        self.state.step()
    }

    /// Selected doctor resolved against the directory
    pub fn selected_doctor(&self) -> Option<&Doctor> {
        self.state.doctor().and_then(|id| self.directory.get(id))
    }

    /// Toggle selection of a doctor card.
    ///
    /// Clicking the selected doctor clears the selection, any other doctor
    /// replaces it. Returns the new selection.
    pub fn toggle_doctor(&mut self, id: DoctorId) -> Result<Option<DoctorId>, BookingError> {
        self.require_step(BookingStep::Select)?;

        if !self.directory.contains(id) {
            return Err(BookingError::UnknownDoctor(id));
        }

        let selection = if self.state.doctor() == Some(id) {
            None
        } else {
            Some(id)
        };
        self.state.set_doctor(selection);

        debug!("[wizard] Doctor selection: {:?}", selection);
        Ok(selection)
    }

    /// Live update of the concern text. Empty is fine.
    pub fn set_concern(&mut self, concern: impl Into<String>) -> Result<(), BookingError> {
        self.require_step(BookingStep::Consult)?;
        self.state.set_concern(concern);
        Ok(())
    }

    /// Store the picked document, or clear it with `None`
    pub fn set_document(&mut self, document: Option<DocumentRef>) -> Result<(), BookingError> {
        self.require_step(BookingStep::Consult)?;
        if let Some(doc) = &document {
            debug!("[wizard] Document attached: {}", doc.name);
        }
        self.state.set_document(document);
        Ok(())
    }

    pub fn can_go_back(&self) -> bool {
        self.current_step().previous().is_some()
    }

    /// Whether the Continue control is enabled.
    ///
    /// DateTime is validated when Continue is clicked, not here.
    pub fn can_continue(&self) -> bool {
        match self.current_step() {
            BookingStep::Select => self.state.doctor().is_some(),
            BookingStep::Consult | BookingStep::DateTime | BookingStep::Review => true,
        }
    }

    /// Navigate to previous step
    pub fn back(&mut self) -> Result<BookingStep, BookingError> {
        let previous = self
            .current_step()
            .previous()
            .ok_or(BookingError::BackDisabled)?;

        self.state.set_step(previous);
        debug!("[wizard] Back to {}", previous.key());
        Ok(previous)
    }

    /// Forward action of the current step.
    ///
    /// `input` is only read on the DateTime step.
    pub fn next(&mut self, input: &DateTimeInput) -> Result<NavigationResult, BookingError> {
        match self.current_step() {
            BookingStep::Select => {
                if self.state.doctor().is_none() {
                    return Err(BookingError::NoDoctorSelected);
                }
                Ok(self.advance_to(BookingStep::Consult))
            }
            BookingStep::Consult => Ok(self.advance_to(BookingStep::DateTime)),
            BookingStep::DateTime => {
                if let Some(missing) = input.missing() {
                    return Err(BookingError::IncompleteDateTime { missing });
                }
                self.state.set_schedule(input.date.clone(), input.time.clone());
                Ok(self.advance_to(BookingStep::Review))
            }
            BookingStep::Review => self.confirm().map(NavigationResult::Confirmed),
        }
    }

    /// Jump to a step without checking preconditions
    pub fn go_to(&mut self, step: BookingStep) -> NavigationResult {
        self.state.set_step(step);
        NavigationResult::Moved(step)
    }

    /// Start over with a fresh state
    pub fn reset(&mut self) {
        self.state.reset();
    }

    fn advance_to(&mut self, step: BookingStep) -> NavigationResult {
        self.state.set_step(step);
        debug!("[wizard] Forward to {}", step.key());
        NavigationResult::Moved(step)
    }

    fn confirm(&mut self) -> Result<ConfirmedBooking, BookingError> {
        let doctor = self
            .selected_doctor()
            .cloned()
            .ok_or(BookingError::NoDoctorSelected)?;

        let booking = ConfirmedBooking {
            doctor,
            concern: self.state.concern().to_string(),
            document: self.state.document().cloned(),
            date: self.state.date().to_string(),
            time: self.state.time().to_string(),
        };

        info!(
            "[wizard] Booking confirmed with {} on {} {}",
            booking.doctor.name, booking.date, booking.time
        );
        self.state.reset();
        Ok(booking)
    }

    fn require_step(&self, step: BookingStep) -> Result<(), BookingError> {
        if self.current_step() == step {
            Ok(())
        } else {
            Err(BookingError::WrongStep(self.current_step().key()))
        }
    }
}
