//! Mentions input widget
//!
//! A multi-line text field that opens an animated suggestions panel while
//! the user is typing a mention. The caller supplies suggestions and row
//! rendering through a [`MentionsDelegate`].

mod delegate;
mod mentions_events;
mod mentions_render;
mod mentions_state;

pub use delegate::{DEFAULT_SECTION_TITLE, MentionsDelegate};
pub use mentions_render::MentionsLayout;
pub use mentions_state::{MentionsInput, MentionsView, splice_keyword};
