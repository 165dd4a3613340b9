use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a user account.
///
/// Adding a state means adding a variant here and updating the
/// exhaustive matches the compiler then points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountState {
    Active,
    Blocked,
}

impl AccountState {
    /// What an action performed under this state reports back.
    pub fn report(&self) -> &'static str {
        match self {
            AccountState::Active => {
                "account is active, all functions are available"
            }
            AccountState::Blocked => "account is blocked, access is limited",
        }
    }
}

impl fmt::Display for AccountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountState::Active => write!(f, "active"),
            AccountState::Blocked => write!(f, "blocked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(AccountState::Active, "all functions are available")]
    #[case(AccountState::Blocked, "access is limited")]
    fn report_should_describe_granted_access(
        #[case] state: AccountState,
        #[case] expected: &str,
    ) {
        assert!(state.report().contains(expected));
    }
}
