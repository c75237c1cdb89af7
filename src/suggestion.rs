//! Suggestion data model
//!
//! Suggestion items, titled sections, and the cached projection from a flat
//! list into sections.

mod item;
mod roster;
mod sections;

pub use item::{Mentionable, Suggestion};
pub use roster::{default_roster, load_roster, parse_roster_json};
pub use sections::{Section, SectionProjection, SuggestionsData};
