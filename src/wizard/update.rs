/// Message handling for the booking wizard
///
/// Every user interaction on the rendering surface becomes a `Message`.
/// `update` applies it to the flow and tells the surface what to do next.

use tracing::{debug, warn};

use super::flow::{BookingFlow, DateTimeInput, NavigationResult};
use super::state::DocumentRef;
use crate::directory::DoctorId;
use crate::error::BookingError;
use crate::messaging::{Event, EventBus};

/// User actions on the wizard
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A doctor card was clicked
    DoctorClicked(DoctorId),

    /// The concern text changed (every keystroke)
    ConcernEdited(String),

    /// The document picker changed; `None` when cleared or nothing chosen
    DocumentChosen(Option<DocumentRef>),

    BackClicked,

    /// Continue clicked, with whatever the date/time fields hold right now
    ContinueClicked { form: DateTimeInput },
}

impl Message {
    pub fn description(&self) -> &'static str {
        match self {
            Message::DoctorClicked(_) => "Doctor clicked",
            Message::ConcernEdited(_) => "Concern edited",
            Message::DocumentChosen(_) => "Document chosen",
            Message::BackClicked => "Back clicked",
            Message::ContinueClicked { .. } => "Continue clicked",
        }
    }
}

/// Blocking notifications shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    MissingDateTime,
    BookingConfirmed,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::MissingDateTime => "Please select both date and time.",
            Notification::BookingConfirmed => "Booking confirmed!",
        }
    }
}

/// How much of the screen needs redrawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderScope {
    /// Only the current view (and its navigation bar)
    Main,

    /// Dispatch on the step again
    Full,
}

/// What the surface should do after a message
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Render(RenderScope),
    Notify(Notification),
}

/// Handle a message and update the flow.
///
/// Returns the effects for the surface, in order.
pub fn update(flow: &mut BookingFlow, bus: &EventBus, message: Message) -> Vec<Effect> {
    debug!("[wizard] Handling message: {}", message.description());
    let from = flow.current_step();

    match message {
        Message::DoctorClicked(id) => match flow.toggle_doctor(id) {
            Ok(_) => vec![Effect::Render(RenderScope::Main)],
            Err(e) => ignored(e),
        },

        Message::ConcernEdited(text) => match flow.set_concern(text) {
            Ok(()) => vec![Effect::Render(RenderScope::Main)],
            Err(e) => ignored(e),
        },

        Message::DocumentChosen(document) => match flow.set_document(document) {
            Ok(()) => vec![Effect::Render(RenderScope::Main)],
            Err(e) => ignored(e),
        },

        Message::BackClicked => match flow.back() {
            Ok(to) => {
                bus.publish(Event::StepChanged { from, to });
                vec![Effect::Render(RenderScope::Full)]
            }
            Err(e) => ignored(e),
        },

        Message::ContinueClicked { form } => match flow.next(&form) {
            Ok(NavigationResult::Moved(to)) => {
                bus.publish(Event::StepChanged { from, to });
                vec![Effect::Render(RenderScope::Full)]
            }
            Ok(NavigationResult::Confirmed(booking)) => {
                bus.publish(Event::BookingConfirmed { booking });
                bus.publish(Event::StepChanged {
                    from,
                    to: flow.current_step(),
                });
                notify(bus, Notification::BookingConfirmed, Some(RenderScope::Full))
            }
            Err(BookingError::IncompleteDateTime { missing }) => {
                debug!("[wizard] Date/time incomplete: {:?}", missing);
                notify(bus, Notification::MissingDateTime, None)
            }
            Err(e) => ignored(e),
        },
    }
}

fn notify(bus: &EventBus, notification: Notification, then: Option<RenderScope>) -> Vec<Effect> {
    bus.publish(Event::NotificationRaised { notification });

    let mut effects = vec![Effect::Notify(notification)];
    effects.extend(then.map(Effect::Render));
    effects
}

// Disabled controls and stale clicks end up here; state is unchanged.
fn ignored(error: BookingError) -> Vec<Effect> {
    warn!("[wizard] Action rejected: {}", error);
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;
    use crate::wizard::{BookingState, BookingStep};

    fn setup() -> (BookingFlow, EventBus) {
        (BookingFlow::new(Directory::fallback("test")), EventBus::new())
    }

    fn cont(date: &str, time: &str) -> Message {
        Message::ContinueClicked {
            form: DateTimeInput::new(date, time),
        }
    }

    #[test]
    fn test_doctor_click_renders_main_only() {
        let (mut flow, bus) = setup();
        let effects = update(&mut flow, &bus, Message::DoctorClicked(DoctorId(1)));
        assert_eq!(effects, vec![Effect::Render(RenderScope::Main)]);
    }

    #[test]
    fn test_concern_edit_renders_main_only() {
        let (mut flow, bus) = setup();
        update(&mut flow, &bus, Message::DoctorClicked(DoctorId(1)));
        update(&mut flow, &bus, cont("", ""));

        let effects = update(
            &mut flow,
            &bus,
            Message::ConcernEdited("cramps\nsince Monday".to_string()),
        );
        assert_eq!(effects, vec![Effect::Render(RenderScope::Main)]);
        assert_eq!(flow.state().concern(), "cramps\nsince Monday");
    }

    #[test]
    fn test_disabled_back_does_nothing() {
        let (mut flow, bus) = setup();
        let effects = update(&mut flow, &bus, Message::BackClicked);
        assert!(effects.is_empty());
        assert_eq!(flow.state(), &BookingState::new());
    }

    #[test]
    fn test_missing_time_notifies_and_stays() {
        let (mut flow, bus) = setup();
        let (rx, _id) = bus.subscribe();

        update(&mut flow, &bus, Message::DoctorClicked(DoctorId(1)));
        update(&mut flow, &bus, cont("", ""));
        update(&mut flow, &bus, cont("", ""));
        assert_eq!(flow.current_step(), BookingStep::DateTime);
        while rx.try_recv().is_ok() {}

        let effects = update(&mut flow, &bus, cont("2024-05-01", ""));
        assert_eq!(effects, vec![Effect::Notify(Notification::MissingDateTime)]);
        assert_eq!(flow.current_step(), BookingStep::DateTime);
        assert!(flow.state().date().is_empty());

        match rx.try_recv() {
            Ok(Event::NotificationRaised { notification }) => {
                assert_eq!(notification, Notification::MissingDateTime)
            }
            other => panic!("Expected notification event, got {:?}", other),
        }
    }

    #[test]
    fn test_confirm_publishes_booking_once() {
        let (mut flow, bus) = setup();
        let (rx, _id) = bus.subscribe();

        update(&mut flow, &bus, Message::DoctorClicked(DoctorId(3)));
        update(&mut flow, &bus, cont("", ""));
        update(&mut flow, &bus, cont("", ""));
        update(&mut flow, &bus, cont("2024-05-01", "09:30"));
        let effects = update(&mut flow, &bus, cont("", ""));

        assert_eq!(
            effects,
            vec![
                Effect::Notify(Notification::BookingConfirmed),
                Effect::Render(RenderScope::Full)
            ]
        );
        assert_eq!(flow.state(), &BookingState::new());

        let confirmations = rx
            .try_iter()
            .filter(|e| matches!(e, Event::BookingConfirmed { .. }))
            .count();
        assert_eq!(confirmations, 1);
    }

    #[test]
    fn test_stale_doctor_click_ignored_off_select() {
        let (mut flow, bus) = setup();
        update(&mut flow, &bus, Message::DoctorClicked(DoctorId(1)));
        update(&mut flow, &bus, cont("", ""));

        let effects = update(&mut flow, &bus, Message::DoctorClicked(DoctorId(2)));
        assert!(effects.is_empty());
        assert_eq!(flow.state().doctor(), Some(DoctorId(1)));
    }
}
