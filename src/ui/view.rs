/// View descriptions
///
/// Pure functions from the booking flow to a `Screen`. The surface decides
/// how to display it; nothing here touches I/O.

use super::text::{escape, escape_multiline};
use crate::directory::DoctorId;
use crate::wizard::{BookingFlow, BookingStep};

/// Everything the surface shows: the main region plus navigation
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub heading: String,
    pub main: MainView,
    pub nav: NavBar,
}

/// Navigation controls, rebuilt on every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub back_enabled: bool,
    pub continue_enabled: bool,
    pub continue_label: String,
}

/// Content of the main region
#[derive(Debug, Clone, PartialEq)]
pub enum MainView {
    /// Directory not loaded yet
    Loading,
    SelectDoctor(DoctorGrid),
    Consultation(ConsultationForm),
    DateTime(DateTimeForm),
    Review(ReviewSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCard {
    pub id: DoctorId,
    pub name: String,
    pub title: String,
    pub experience: String,
    pub price: String,
    pub image: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorGrid {
    pub cards: Vec<DoctorCard>,
}

impl DoctorGrid {
    /// Card behind a 1-based position, as typed by the user
    pub fn card_at(&self, position: usize) -> Option<&DoctorCard> {
        position.checked_sub(1).and_then(|idx| self.cards.get(idx))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationForm {
    pub doctor_name: String,
    pub concern: String,
    pub document_name: Option<String>,
}

/// Date/time fields, pre-filled from state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeForm {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub doctor_name: String,
    pub doctor_title: String,
    pub concern: String,
    pub document: String,
    pub charges: String,
    pub date_time: String,
}

/// Render the current step. Exactly one view per step.
pub fn render(flow: &BookingFlow) -> Screen {
    let step = flow.current_step();
    let main = match step {
        BookingStep::Select => MainView::SelectDoctor(doctor_grid(flow)),
        BookingStep::Consult => MainView::Consultation(consultation_form(flow)),
        BookingStep::DateTime => MainView::DateTime(date_time_form(flow)),
        BookingStep::Review => MainView::Review(review_summary(flow)),
    };

    Screen {
        heading: format!("{}. {}", step.number(), step.title()),
        main,
        nav: nav_bar(flow),
    }
}

/// Placeholder shown while the directory loads
pub fn render_loading() -> Screen {
    Screen {
        heading: "Loading doctors...".to_string(),
        main: MainView::Loading,
        nav: NavBar {
            back_enabled: false,
            continue_enabled: false,
            continue_label: BookingStep::Select.continue_label().to_string(),
        },
    }
}

fn nav_bar(flow: &BookingFlow) -> NavBar {
    NavBar {
        back_enabled: flow.can_go_back(),
        continue_enabled: flow.can_continue(),
        continue_label: flow.current_step().continue_label().to_string(),
    }
}

fn doctor_grid(flow: &BookingFlow) -> DoctorGrid {
    let selected = flow.state().doctor();
    let cards = flow
        .directory()
        .doctors()
        .iter()
        .map(|doctor| DoctorCard {
            id: doctor.id,
            name: escape(&doctor.name),
            title: escape(&doctor.title),
            experience: doctor.experience_label(),
            price: escape(&doctor.price_label()),
            image: escape(&doctor.image),
            selected: selected == Some(doctor.id),
        })
        .collect();

    DoctorGrid { cards }
}

fn consultation_form(flow: &BookingFlow) -> ConsultationForm {
    let state = flow.state();
    ConsultationForm {
        doctor_name: flow
            .selected_doctor()
            .map(|d| escape(&d.name))
            .unwrap_or_else(|| "Not selected".to_string()),
        concern: escape_multiline(state.concern()),
        document_name: state.document().map(|doc| escape(&doc.name)),
    }
}

fn date_time_form(flow: &BookingFlow) -> DateTimeForm {
    DateTimeForm {
        date: escape(flow.state().date()),
        time: escape(flow.state().time()),
    }
}

fn review_summary(flow: &BookingFlow) -> ReviewSummary {
    let state = flow.state();
    let doctor = flow.selected_doctor();

    let date = if state.date().is_empty() {
        "Not set".to_string()
    } else {
        escape(state.date())
    };

    ReviewSummary {
        doctor_name: doctor
            .map(|d| escape(&d.name))
            .unwrap_or_else(|| "Not selected".to_string()),
        doctor_title: doctor.map(|d| escape(&d.title)).unwrap_or_default(),
        concern: non_empty_or(state.concern(), "Not provided"),
        document: state
            .document()
            .map(|doc| escape(&doc.name))
            .unwrap_or_else(|| "No file uploaded".to_string()),
        charges: doctor
            .map(|d| escape(&d.price_label()))
            .unwrap_or_else(|| "Not available".to_string()),
        date_time: format!("{} {}", date, escape(state.time()))
            .trim_end()
            .to_string(),
    }
}

fn non_empty_or(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        escape_multiline(value)
    }
}
