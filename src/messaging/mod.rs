/// Messaging module
///
/// Broadcasts session events (directory loaded, step changes, notifications,
/// confirmed bookings) to any number of subscribers.
///
/// ```text
/// ┌──────────┐   publish    ┌───────────┐   Event    ┌────────────────┐
/// │  Wizard  │ ───────────> │ Event Bus │ ─────────> │  Subscribers   │
/// │ (update) │              │           │            │ (submit, logs) │
/// └──────────┘              └───────────┘            └────────────────┘
/// ```

pub mod bus;
pub mod events;

pub use bus::{EventBus, SubscriberId};
pub use events::Event;
