//! The schedule resolver.
//!
//! Answers "when is the next bus at this stop?": calendar selection,
//! timeline synthesis, disambiguation, next-arrival search with offset
//! wraparound, and the single midnight rollover retry.

mod search;
mod timeline;

pub use search::{NextBus, Resolution, ResolveError, Resolver};
pub use timeline::{ArrivalEvent, synthesize};
