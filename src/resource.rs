use serde::Serialize;

/// What `terraform plan` announces it will do with a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Destroy,
    /// Data sources refreshed during apply; nothing to move.
    Ignored,
}

impl Action {
    /// Maps the phrase following `will be` to an action, `None` when unknown.
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        match phrase {
            "created" => Some(Self::Create),
            "destroyed" => Some(Self::Destroy),
            "read during apply" => Some(Self::Ignored),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ActionRecord {
    pub address: String,
    pub action: Action,
}
