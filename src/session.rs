/// Booking session
///
/// Ties the pieces together: waits for the directory (showing a loading
/// screen meanwhile), then feeds user input through the wizard until the
/// user quits or input ends.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use tracing::{info, warn};

use crate::directory::Directory;
use crate::error::AppResult;
use crate::messaging::{Event, EventBus};
use crate::ui::{render, render_loading, Input, TerminalSurface};
use crate::wizard::{update, BookingFlow, Effect, Message, RenderScope};

/// Slack on top of the HTTP timeout before the session stops waiting
const LOAD_GRACE: Duration = Duration::from_secs(2);

pub struct Session {
    bus: EventBus,
    load_timeout: Duration,
}

impl Session {
    /// `request_timeout` is the loader's own HTTP timeout
    pub fn new(bus: EventBus, request_timeout: Duration) -> Self {
        Self {
            bus,
            load_timeout: request_timeout.saturating_add(LOAD_GRACE),
        }
    }

    /// Block until the loader delivers, falling back if it never does
    pub fn wait_for_directory(&self, rx: &Receiver<Directory>) -> Directory {
        let directory = match rx.recv_timeout(self.load_timeout) {
            Ok(directory) => directory,
            Err(RecvTimeoutError::Timeout) => {
                warn!(
                    "[session] Directory load exceeded {:?}; using fallback sample",
                    self.load_timeout
                );
                Directory::fallback("directory load timed out")
            }
            Err(RecvTimeoutError::Disconnected) => {
                warn!("[session] Directory loader stopped without a result; using fallback sample");
                Directory::fallback("directory loader stopped")
            }
        };

        self.bus.publish(Event::DirectoryLoaded {
            origin: directory.origin().clone(),
            doctor_count: directory.len(),
        });
        directory
    }

    /// Run the wizard on the given surface until quit or end of input
    pub fn run<R: BufRead, W: Write>(
        &self,
        rx: Receiver<Directory>,
        surface: &mut TerminalSurface<R, W>,
    ) -> AppResult<()> {
        surface
            .draw(&render_loading(), RenderScope::Full)
            .context("Failed to draw loading screen")?;

        let mut flow = BookingFlow::new(self.wait_for_directory(&rx));
        let mut screen = render(&flow);
        surface.draw(&screen, RenderScope::Full)?;

        while let Some(input) = surface.read_input(&screen)? {
            let message = match input {
                Input::Message(message) => message,
                Input::PickDocument => Message::DocumentChosen(surface.pick_document()),
                Input::DraftChanged => {
                    surface.draw(&screen, RenderScope::Main)?;
                    continue;
                }
                Input::Help => {
                    surface.show_help(&screen)?;
                    continue;
                }
                Input::Invalid(reason) => {
                    surface.show_error(&reason)?;
                    continue;
                }
                Input::Quit => break,
            };

            let effects = update(&mut flow, &self.bus, message);
            screen = render(&flow);

            for effect in effects {
                match effect {
                    Effect::Notify(notification) => surface.notify(notification)?,
                    Effect::Render(scope) => surface.draw(&screen, scope)?,
                }
            }
        }

        info!("[session] Session ended");
        self.bus.publish(Event::Shutdown);
        Ok(())
    }
}
