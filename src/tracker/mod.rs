//! The page tracker state machine.
//!
//! A recycling list attaches and detaches surfaces asynchronously and
//! sometimes redundantly. The tracker reconciles that stream into page
//! changes:
//!
//! | State | Event | Guard | Next state | Notification |
//! |---|---|---|---|---|
//! | Empty | attach(p) | | Active(p) | first page attached |
//! | Active(c) | attach(p) | p.item == c.item | Active(c) | |
//! | Active(c) | attach(p) | p.item != c.item | ActivePending(c, p) | |
//! | Active(c) | detach(d) | d.item == c.item | Drained | page changed (c, none) |
//! | ActivePending(c, p) | attach(q) | q.item == c.item | ActivePending(c, p) | |
//! | ActivePending(c, p) | detach(d) | d.surface is p.surface | Active(c) | |
//! | ActivePending(c, p) | detach(d) | d.item == c.item | Active(p) | page changed (c, p) |
//! | Drained | attach(p) | | Active(p) | first page attached |
//! | any | detach(d) | matches neither | unchanged | warning |

mod callback;
mod config;
mod error;
mod event;
mod machine;
mod snapshot;

pub use callback::PageChangeCallback;
pub use config::{ConfigError, TrackerConfig, UnmatchedDetachPolicy, DEFAULT_HISTORY_LIMIT};
pub use error::{ListenerError, TrackerError};
pub use event::PageEvent;
pub use machine::PageTracker;
pub use snapshot::TrackerSnapshot;
