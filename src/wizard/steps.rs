/// Booking step definitions
///
/// Defines the four steps of the booking wizard.

/// Booking step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStep {
    /// Pick a doctor from the directory
    Select,

    /// Describe the concern, optionally attach a document
    Consult,

    /// Choose preferred date and time
    DateTime,

    /// Review and confirm
    Review,
}

impl BookingStep {
    /// Get step title
    pub fn title(&self) -> &'static str {
        match self {
            BookingStep::Select => "Select a Doctor",
            BookingStep::Consult => "Consultation Details",
            BookingStep::DateTime => "Select Date & Time",
            BookingStep::Review => "Review Your Booking",
        }
    }

    /// Short lowercase name, used in logs
    pub fn key(&self) -> &'static str {
        match self {
            BookingStep::Select => "select",
            BookingStep::Consult => "consult",
            BookingStep::DateTime => "datetime",
            BookingStep::Review => "review",
        }
    }

    /// Get step number (1-indexed)
    pub fn number(&self) -> usize {
        match self {
            BookingStep::Select => 1,
            BookingStep::Consult => 2,
            BookingStep::DateTime => 3,
            BookingStep::Review => 4,
        }
    }

    /// Get total number of steps
    pub fn total_steps() -> usize {
        4
    }

    pub fn is_first(&self) -> bool {
        matches!(self, BookingStep::Select)
    }

    pub fn is_last(&self) -> bool {
        matches!(self, BookingStep::Review)
    }

    /// Get next step. Review has none: its forward action confirms instead.
    pub fn next(&self) -> Option<BookingStep> {
        match self {
            BookingStep::Select => Some(BookingStep::Consult),
            BookingStep::Consult => Some(BookingStep::DateTime),
            BookingStep::DateTime => Some(BookingStep::Review),
            BookingStep::Review => None,
        }
    }

    /// Get previous step
    pub fn previous(&self) -> Option<BookingStep> {
        match self {
            BookingStep::Select => None,
            BookingStep::Consult => Some(BookingStep::Select),
            BookingStep::DateTime => Some(BookingStep::Consult),
            BookingStep::Review => Some(BookingStep::DateTime),
        }
    }

    /// Label of the forward button on this step
    pub fn continue_label(&self) -> &'static str {
        match self {
            BookingStep::Select | BookingStep::Consult => "Continue",
            BookingStep::DateTime => "Review Booking",
            BookingStep::Review => "Confirm Booking",
        }
    }

    /// Get all steps in order
    pub fn all_steps() -> Vec<BookingStep> {
        vec![
            BookingStep::Select,
            BookingStep::Consult,
            BookingStep::DateTime,
            BookingStep::Review,
        ]
    }
}

impl Default for BookingStep {
    fn default() -> Self {
        BookingStep::Select
    }
}

impl std::fmt::Display for BookingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        let step = BookingStep::Select;
        assert!(step.is_first());
        assert!(!step.is_last());
        assert_eq!(step.next(), Some(BookingStep::Consult));

        let review = BookingStep::Review;
        assert!(review.is_last());
        assert!(review.next().is_none());
    }

    #[test]
    fn test_previous_navigation() {
        assert_eq!(BookingStep::Review.previous(), Some(BookingStep::DateTime));
        assert_eq!(BookingStep::Consult.previous(), Some(BookingStep::Select));
        assert_eq!(BookingStep::Select.previous(), None);
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(BookingStep::Select.number(), 1);
        assert_eq!(BookingStep::Review.number(), 4);
        assert_eq!(BookingStep::total_steps(), BookingStep::all_steps().len());
    }

    #[test]
    fn test_continue_labels() {
        assert_eq!(BookingStep::Select.continue_label(), "Continue");
        assert_eq!(BookingStep::DateTime.continue_label(), "Review Booking");
        assert_eq!(BookingStep::Review.continue_label(), "Confirm Booking");
    }
}
