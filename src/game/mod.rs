//! The game orchestrator and its transport-facing surface.
//!
//! ## Key Types
//!
//! - `Game`: Phase state machine dispatching commands to the components
//! - `Command`: Inbound player command
//! - `GameEvent`, `Outbound`, `Recipient`: What the engine emits and to whom
//! - `InactivityWatchdog`: External lobby timeout

pub mod command;
pub mod event;
pub mod orchestrator;
pub mod watchdog;

pub use command::Command;
pub use event::{GameEvent, Outbound, Recipient};
pub use orchestrator::{Game, REASON_NOT_ENOUGH_PLAYERS};
pub use watchdog::{InactivityWatchdog, DEFAULT_LOBBY_TIMEOUT, REASON_INACTIVITY};
