use std::thread;

use anyhow::Context;
use doctor_booking::config::Config;
use doctor_booking::directory::{spawn_load, HttpDoctorSource};
use doctor_booking::error::AppResult;
use doctor_booking::messaging::{Event, EventBus};
use doctor_booking::session::Session;
use doctor_booking::ui::TerminalSurface;

const LOG_TARGET_STARTUP: &str = "doctor_booking::startup";

/// Initialize tracing with file rotation
///
/// Logs are written to `<config dir>/DoctorBooking/logs/`, one file per day
/// (doctor-booking.log.YYYY-MM-DD).
///
/// Debug builds also log to stderr; stdout is reserved for the wizard.
fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("DoctorBooking").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "doctor-booking.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Log directory: {}", log_dir.display());
}

fn log_runtime_environment(config: &Config) {
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting Doctor Booking v{} on {} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Directory endpoint: {} (timeout {}s)",
        config.directory_url,
        config.request_timeout_secs
    );
}

/// Stand-in for the booking backend: receives confirmed bookings off the bus.
fn spawn_booking_submitter(bus: &EventBus) -> thread::JoinHandle<()> {
    let (rx, _id) = bus.subscribe();

    thread::spawn(move || {
        while let Ok(event) = rx.recv() {
            match event {
                Event::BookingConfirmed { booking } => match serde_json::to_string(&booking) {
                    Ok(json) => tracing::info!("[submit] Booking ready for submission: {}", json),
                    Err(e) => tracing::error!("[submit] Could not serialize booking: {}", e),
                },
                Event::Shutdown => break,
                other => tracing::debug!("[submit] {}", other.description()),
            }
        }
    })
}

fn main() -> AppResult<()> {
    initialize_tracing();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config ({}), using defaults", e);
        Config::default()
    });
    log_runtime_environment(&config);

    let bus = EventBus::new();
    let submitter = spawn_booking_submitter(&bus);

    let source = HttpDoctorSource::new(config.directory_url.clone(), config.request_timeout());
    let directory_rx = spawn_load(Box::new(source));

    let session = Session::new(bus, config.request_timeout());
    let mut surface = TerminalSurface::stdio(config.show_images);
    session
        .run(directory_rx, &mut surface)
        .context("Booking session failed")?;

    if submitter.join().is_err() {
        tracing::error!("Booking submitter thread panicked");
    }
    Ok(())
}
