/// Event types for the booking session
///
/// Events represent things that have happened (past tense).
/// They are broadcast to all subscribers.

use crate::directory::DirectoryOrigin;
use crate::wizard::{BookingStep, ConfirmedBooking, Notification};

/// Session events
#[derive(Debug, Clone)]
pub enum Event {
    /// The directory finished loading (remote or fallback)
    DirectoryLoaded {
        origin: DirectoryOrigin,
        doctor_count: usize,
    },

    /// The wizard moved between steps
    StepChanged { from: BookingStep, to: BookingStep },

    /// A blocking notification was shown to the user
    NotificationRaised { notification: Notification },

    /// The user confirmed a booking; subscribers submit it
    BookingConfirmed { booking: ConfirmedBooking },

    /// Session is ending
    Shutdown,
}

impl Event {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            Event::DirectoryLoaded {
                origin,
                doctor_count,
            } => match origin {
                DirectoryOrigin::Remote { url } => {
                    format!("Loaded {} doctors from {}", doctor_count, url)
                }
                DirectoryOrigin::Fallback { .. } => {
                    format!("Using {} fallback doctors", doctor_count)
                }
            },
            Event::StepChanged { from, to } => {
                format!("Step changed: {} -> {}", from.key(), to.key())
            }
            Event::NotificationRaised { notification } => {
                format!("Notification: {}", notification.message())
            }
            Event::BookingConfirmed { booking } => {
                format!("Booking confirmed: {}", booking.doctor.name)
            }
            Event::Shutdown => "Shutting down".to_string(),
        }
    }
}
