use core::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a piece of content, unique within an engine run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct ContentId(pub Uuid);

impl ContentId {
    /// Mints a fresh random identifier.
    pub fn new() -> Self {
        ContentId(Uuid::new_v4())
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ContentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(ContentId(Uuid::from_str(s)?))
    }
}

impl Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a user account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Mints a fresh random identifier.
    pub fn new() -> Self {
        UserId(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(UserId(Uuid::from_str(s)?))
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_id_should_survive_display_parse_round_trip() {
        let id = ContentId::new();
        let parsed: ContentId = id
            .to_string()
            .parse()
            .expect("Failed to parse displayed identifier");
        assert_eq!(id, parsed);
    }

    #[test]
    fn user_id_should_survive_display_parse_round_trip() {
        let id = UserId::new();
        let parsed: UserId = id
            .to_string()
            .parse()
            .expect("Failed to parse displayed identifier");
        assert_eq!(id, parsed);
    }

    #[test]
    fn minted_ids_should_be_distinct() {
        assert_ne!(ContentId::new(), ContentId::new());
        assert_ne!(UserId::new(), UserId::new());
    }
}
