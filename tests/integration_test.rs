// Integration tests for Doctor Booking
// These tests drive the full wizard the way the terminal session does

use std::io::Cursor;
use std::time::Duration;

use crossbeam_channel::bounded;
use doctor_booking::directory::{load_directory, Directory, DoctorId, HttpDoctorSource};
use doctor_booking::messaging::{Event, EventBus};
use doctor_booking::session::Session;
use doctor_booking::ui::{render, MainView, TerminalSurface};
use doctor_booking::wizard::{
    update, BookingFlow, BookingState, BookingStep, DateTimeInput, Effect, Message, Notification,
};

fn cont(date: &str, time: &str) -> Message {
    Message::ContinueClicked {
        form: DateTimeInput::new(date, time),
    }
}

#[test]
fn test_unreachable_directory_uses_fallback() {
    let source = HttpDoctorSource::new("http://127.0.0.1:9/doctors", Duration::from_secs(2));
    let directory = load_directory(&source);

    assert!(directory.is_fallback());
    let summary: Vec<(u32, f64, &str)> = directory
        .doctors()
        .iter()
        .map(|d| (d.id.0, d.fee, d.currency.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![(1, 50.0, "USD"), (2, 40.0, "USD"), (3, 60.0, "USD")]
    );
}

#[test]
fn test_review_summary_scenario() {
    let bus = EventBus::new();
    let mut flow = BookingFlow::new(Directory::fallback("offline"));

    update(&mut flow, &bus, Message::DoctorClicked(DoctorId(2)));
    update(&mut flow, &bus, cont("", ""));
    update(&mut flow, &bus, Message::ConcernEdited("headache".to_string()));
    update(&mut flow, &bus, cont("", ""));
    update(&mut flow, &bus, cont("2024-05-01", "09:30"));
    assert_eq!(flow.current_step(), BookingStep::Review);

    match render(&flow).main {
        MainView::Review(summary) => {
            assert_eq!(summary.doctor_name, "Dr. Sarah Johnson");
            assert_eq!(summary.doctor_title, "Obstetrician");
            assert_eq!(summary.concern, "headache");
            assert_eq!(summary.document, "No file uploaded");
            assert!(summary.charges.contains("40"));
            assert_eq!(summary.date_time, "2024-05-01 09:30");
        }
        other => panic!("Expected review view, got {:?}", other),
    }
}

#[test]
fn test_missing_time_keeps_datetime_step() {
    let bus = EventBus::new();
    let mut flow = BookingFlow::new(Directory::fallback("offline"));

    update(&mut flow, &bus, Message::DoctorClicked(DoctorId(1)));
    update(&mut flow, &bus, cont("", ""));
    update(&mut flow, &bus, cont("", ""));
    let before = flow.state().clone();

    let effects = update(&mut flow, &bus, cont("2024-05-01", ""));
    assert_eq!(effects, vec![Effect::Notify(Notification::MissingDateTime)]);
    assert_eq!(flow.state(), &before);
    assert_eq!(flow.current_step(), BookingStep::DateTime);
}

#[test]
fn test_confirm_resets_everything() {
    let bus = EventBus::new();
    let mut flow = BookingFlow::new(Directory::fallback("offline"));

    update(&mut flow, &bus, Message::DoctorClicked(DoctorId(1)));
    update(&mut flow, &bus, cont("", ""));
    update(&mut flow, &bus, Message::ConcernEdited("back pain".to_string()));
    update(&mut flow, &bus, cont("", ""));
    update(&mut flow, &bus, cont("2024-07-02", "16:45"));
    update(&mut flow, &bus, cont("", ""));

    assert_eq!(flow.state(), &BookingState::new());
    assert!(!render(&flow).nav.continue_enabled);
}

#[test]
fn test_terminal_session_end_to_end() {
    let script = [
        "2",                 // select Dr. Sarah Johnson
        "c",                 // -> consult
        "concern headache",
        "c",                 // -> datetime
        "date 2024-05-01",
        "c",                 // time missing
        "",                  // acknowledge notification
        "time 09:30",
        "c",                 // -> review
        "c",                 // confirm
        "",                  // acknowledge confirmation
        "q",
    ]
    .join("\n");

    let bus = EventBus::new();
    let (events, _id) = bus.subscribe();
    let session = Session::new(bus, Duration::from_secs(1));

    let (tx, rx) = bounded(1);
    tx.send(Directory::fallback("offline")).unwrap();

    let mut surface = TerminalSurface::new(Cursor::new(script.into_bytes()), Vec::<u8>::new(), false);
    session.run(rx, &mut surface).unwrap();

    let output = String::from_utf8(surface.into_output()).unwrap();
    assert!(output.contains("Loading doctors..."));
    assert!(output.contains("Please select both date and time."));
    assert!(output.contains("Date & Time: 2024-05-01 09:30"));
    assert!(output.contains("Booking confirmed!"));

    let confirmed: Vec<_> = events
        .try_iter()
        .filter_map(|event| match event {
            Event::BookingConfirmed { booking } => Some(booking),
            _ => None,
        })
        .collect();
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].doctor.name, "Dr. Sarah Johnson");
    assert_eq!(confirmed[0].concern, "headache");
    assert_eq!(confirmed[0].time, "09:30");
}
