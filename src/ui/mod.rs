/// Presentation layer
///
/// `view` turns the booking flow into a `Screen`; `terminal` displays it and
/// reads commands back.

pub mod terminal;
pub mod text;
pub mod view;

pub use terminal::{parse_input, FormDraft, Input, TerminalSurface};
pub use view::{render, render_loading, MainView, NavBar, Screen};
