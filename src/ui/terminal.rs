/// Terminal rendering surface
///
/// Draws a `Screen` as text, turns typed commands into wizard messages and
/// shows blocking notifications. The whole screen is redrawn from scratch on
/// every render, so no controls outlive the render that created them.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::Path;

use tracing::debug;

use super::view::{MainView, NavBar, Screen};
use crate::wizard::{DateTimeInput, DocumentRef, Message, Notification, RenderScope};

const RULE: &str = "============================================";
const THIN_RULE: &str = "--------------------------------------------";

/// Trailing marker that continues a command on the next line
const CONTINUATION: char = '\\';

/// Parsed line of user input
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Forward to the wizard
    Message(Message),

    /// Open the native file dialog
    PickDocument,

    /// A date/time field changed on the surface only
    DraftChanged,

    Help,
    Quit,

    /// Not understood or not allowed right now
    Invalid(String),
}

/// Date/time fields as currently typed. Only read when Continue is clicked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub date: String,
    pub time: String,
}

impl FormDraft {
    fn to_input(&self) -> DateTimeInput {
        DateTimeInput::new(self.date.trim(), self.time.trim())
    }
}

/// Interpret one line against the screen currently shown
pub fn parse_input(line: &str, screen: &Screen, draft: &mut FormDraft) -> Input {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match (command.to_ascii_lowercase().as_str(), &screen.main) {
        ("q" | "quit" | "exit", _) => Input::Quit,
        ("h" | "help" | "?", _) => Input::Help,

        ("b" | "back", _) => {
            if screen.nav.back_enabled {
                Input::Message(Message::BackClicked)
            } else {
                Input::Invalid("Back is disabled on this step".to_string())
            }
        }

        ("c" | "continue" | "next", _) => {
            if screen.nav.continue_enabled {
                Input::Message(Message::ContinueClicked {
                    form: draft.to_input(),
                })
            } else {
                Input::Invalid(format!("{} is disabled", screen.nav.continue_label))
            }
        }

        (number, MainView::SelectDoctor(grid))
            if !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) && rest.is_empty() =>
        {
            match number.parse::<usize>().ok().and_then(|n| grid.card_at(n)) {
                Some(card) => Input::Message(Message::DoctorClicked(card.id)),
                None => Input::Invalid(format!("No doctor numbered {}", number)),
            }
        }

        ("concern", MainView::Consultation(_)) => {
            Input::Message(Message::ConcernEdited(rest.to_string()))
        }
        ("attach", MainView::Consultation(_)) => {
            if rest.is_empty() {
                Input::PickDocument
            } else {
                attach_path(Path::new(rest))
            }
        }
        ("detach", MainView::Consultation(_)) => Input::Message(Message::DocumentChosen(None)),

        ("date", MainView::DateTime(_)) => {
            draft.date = rest.to_string();
            Input::DraftChanged
        }
        ("time", MainView::DateTime(_)) => {
            draft.time = rest.to_string();
            Input::DraftChanged
        }

        ("", _) => Input::Invalid("Type `help` for the available commands".to_string()),
        (other, _) => Input::Invalid(format!("Unknown command: {}", other)),
    }
}

fn attach_path(path: &Path) -> Input {
    if !path.is_file() {
        return Input::Invalid(format!("No such file: {}", path.display()));
    }
    match DocumentRef::from_path(path) {
        Some(doc) => Input::Message(Message::DocumentChosen(Some(doc))),
        None => Input::Invalid(format!("Not a file: {}", path.display())),
    }
}

/// Text surface over any reader/writer pair
pub struct TerminalSurface<R, W> {
    input: R,
    output: W,
    draft: FormDraft,
    show_images: bool,
}

impl TerminalSurface<StdinLock<'static>, Stdout> {
    /// Surface bound to the process stdin/stdout
    pub fn stdio(show_images: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), show_images)
    }
}

impl<R: BufRead, W: Write> TerminalSurface<R, W> {
    pub fn new(input: R, output: W, show_images: bool) -> Self {
        Self {
            input,
            output,
            draft: FormDraft::default(),
            show_images,
        }
    }

    /// Give back the writer, mostly for inspecting output in tests
    pub fn into_output(self) -> W {
        self.output
    }

    /// Redraw both regions.
    ///
    /// A full render onto the DateTime step re-fills the fields from state.
    pub fn draw(&mut self, screen: &Screen, scope: RenderScope) -> io::Result<()> {
        if let (MainView::DateTime(form), RenderScope::Full) = (&screen.main, scope) {
            self.draft = FormDraft {
                date: form.date.clone(),
                time: form.time.clone(),
            };
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "  {}", screen.heading)?;
        writeln!(self.output, "{}", RULE)?;
        self.draw_main(&screen.main)?;
        writeln!(self.output, "{}", THIN_RULE)?;
        self.draw_nav(&screen.nav)?;
        self.output.flush()
    }

    fn draw_main(&mut self, main: &MainView) -> io::Result<()> {
        let out = &mut self.output;
        match main {
            MainView::Loading => writeln!(out, "  Please wait...")?,

            MainView::SelectDoctor(grid) => {
                for (idx, card) in grid.cards.iter().enumerate() {
                    let marker = if card.selected { " [selected]" } else { "" };
                    writeln!(out, "  [{}] {}{}", idx + 1, card.name, marker)?;
                    writeln!(out, "      {} | {} | {}", card.title, card.experience, card.price)?;
                    if self.show_images {
                        writeln!(out, "      image: {}", card.image)?;
                    }
                }
                writeln!(out)?;
                writeln!(out, "  Type a number to select or deselect a doctor.")?;
            }

            MainView::Consultation(form) => {
                writeln!(out, "  Doctor: {}", form.doctor_name)?;
                writeln!(out)?;
                writeln!(out, "  Describe your health concern:")?;
                if form.concern.is_empty() {
                    writeln!(out, "    ")?;
                }
                for line in form.concern.lines() {
                    writeln!(out, "    {}", line)?;
                }
                writeln!(out, "  Medical document (optional):")?;
                match &form.document_name {
                    Some(name) => writeln!(out, "    {}", name)?,
                    None => writeln!(out, "    (none)")?,
                }
                writeln!(out)?;
                writeln!(out, "  concern <text> | attach [path] | detach")?;
                writeln!(out, "  End a line with \\ to continue the concern on the next one.")?;
            }

            MainView::DateTime(_) => {
                writeln!(out, "  Preferred Date: {}", self.draft.date)?;
                writeln!(out, "  Preferred Time: {}", self.draft.time)?;
                writeln!(out)?;
                writeln!(out, "  date <YYYY-MM-DD> | time <HH:MM>")?;
            }

            MainView::Review(summary) => {
                writeln!(out, "  Doctor:      {}", summary.doctor_name)?;
                if !summary.doctor_title.is_empty() {
                    writeln!(out, "               {}", summary.doctor_title)?;
                }
                let mut concern = summary.concern.lines();
                writeln!(out, "  Concern:     {}", concern.next().unwrap_or_default())?;
                for line in concern {
                    writeln!(out, "               {}", line)?;
                }
                writeln!(out, "  File:        {}", summary.document)?;
                writeln!(out, "  Charges:     {}", summary.charges)?;
                writeln!(out, "  Date & Time: {}", summary.date_time)?;
            }
        }
        Ok(())
    }

    fn draw_nav(&mut self, nav: &NavBar) -> io::Result<()> {
        let back = if nav.back_enabled { "[b] Back" } else { "    (Back)" };
        let forward = if nav.continue_enabled {
            format!("[c] {}", nav.continue_label)
        } else {
            format!("({})", nav.continue_label)
        };
        writeln!(self.output, "  {:<20}{:>22}", back, forward)
    }

    /// Show a notification and block until the user acknowledges it
    pub fn notify(&mut self, notification: Notification) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "  >>> {}", notification.message())?;
        write!(self.output, "  Press Enter to continue...")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    pub fn show_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "  ! {}", message)?;
        self.output.flush()
    }

    pub fn show_help(&mut self, screen: &Screen) -> io::Result<()> {
        let step_help = match &screen.main {
            MainView::Loading => "",
            MainView::SelectDoctor(_) => "<number> toggle a doctor",
            MainView::Consultation(_) => "concern <text> (end a line with \\ to add another), attach [path], detach",
            MainView::DateTime(_) => "date <value>, time <value>",
            MainView::Review(_) => "c confirms the booking",
        };
        writeln!(self.output, "  Commands: b/back, c/continue, q/quit")?;
        if !step_help.is_empty() {
            writeln!(self.output, "  This step: {}", step_help)?;
        }
        self.output.flush()
    }

    /// Prompt and read the next command. `None` once input is exhausted.
    ///
    /// A line ending in `\` is joined with the following one by a line break.
    pub fn read_input(&mut self, screen: &Screen) -> io::Result<Option<Input>> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let mut command = String::new();
        loop {
            let trimmed = line.trim_end_matches(['\r', '\n']);
            match trimmed.strip_suffix(CONTINUATION) {
                Some(head) => {
                    command.push_str(head);
                    command.push('\n');
                }
                None => {
                    command.push_str(trimmed);
                    break;
                }
            }

            write!(self.output, ". ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
        }

        let input = parse_input(&command, screen, &mut self.draft);
        debug!("[terminal] Input: {:?}", input);
        Ok(Some(input))
    }

    /// Open the native file dialog. Cancelling yields `None`.
    pub fn pick_document(&mut self) -> Option<DocumentRef> {
        rfd::FileDialog::new()
            .set_title("Upload medical documents (optional)")
            .pick_file()
            .and_then(DocumentRef::from_path)
    }
}
