//! Per-game state, event log, and subscriber fan-out.
//!
//! ## Architecture
//!
//! - [`Game`]: Aggregate behind one lock: roster plus broadcaster
//! - [`Roster`]: Membership, validated transitions via [`Action`]
//! - [`Broadcaster`]: Appends to the [`EventLog`] then fans out through the [`Registry`]
//! - [`Subscriber`]: Handle to one subscription's ordered delivery worker
//! - [`Sink`]: Transport-agnostic destination a worker writes to
//!
//! ## Events
//!
//! - [`GameEvent`]: Sequenced, timestamped [`Message`] plus the resulting [`GameState`]
mod action;
mod broadcast;
mod event;
mod eventlog;
mod game;
mod player;
mod registry;
mod roster;
mod sink;
mod subscriber;

pub use action::*;
pub use broadcast::*;
pub use event::*;
pub use eventlog::*;
pub use game::*;
pub use player::*;
pub use registry::*;
pub use roster::*;
pub use sink::*;
pub use subscriber::*;
