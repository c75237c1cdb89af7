use serde::{Deserialize, Serialize};

/// Anything that can be offered as a mention suggestion
pub trait Mentionable {
    /// Display name, also used by the trailing-window heuristic
    fn name(&self) -> &str;
}

impl Mentionable for String {
    fn name(&self) -> &str {
        self
    }
}

/// A ready-made suggestion record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl Mentionable for Suggestion {
    fn name(&self) -> &str {
        &self.name
    }
}
