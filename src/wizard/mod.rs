/// Booking wizard module
///
/// Walks the user through choosing a doctor, describing the consultation,
/// picking a slot and confirming.
///
/// ## Architecture
///
/// ```text
/// BookingFlow
///   ├── Directory (read-only doctor list)
///   ├── BookingState (current step, selection, concern, document, date/time)
///   └── update(Message) -> Vec<Effect>
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use doctor_booking::wizard::{update, BookingFlow, Message};
///
/// let mut flow = BookingFlow::new(directory);
/// let effects = update(&mut flow, &bus, Message::DoctorClicked(DoctorId(2)));
/// ```
///
/// ## Steps
///
/// 1. **Select** - Pick a doctor (Continue needs a selection)
/// 2. **Consult** - Describe the concern, attach a document
/// 3. **DateTime** - Both fields required to continue
/// 4. **Review** - Confirm, then start over at Select

pub mod flow;
pub mod state;
pub mod steps;
pub mod update;

pub use flow::{BookingFlow, ConfirmedBooking, DateTimeInput, NavigationResult};
pub use state::{BookingState, DocumentRef};
pub use steps::BookingStep;
pub use update::{update, Effect, Message, Notification, RenderScope};
