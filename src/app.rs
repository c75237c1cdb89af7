//! Demo comment composer built on [`MentionsInput`](crate::MentionsInput)

mod app_events;
mod app_render;
mod app_state;
mod roster_delegate;

pub use app_state::App;
pub use roster_delegate::{RosterDelegate, RosterMatcher};
