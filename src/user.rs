use serde::{Deserialize, Serialize};

use crate::errors::{ContentError, Result};
use crate::events::{EngineEvent, EventSink};
use crate::id::UserId;
use crate::memento::ContactsSnapshot;
use crate::state::AccountState;

/// A user account.
///
/// Identity and profile fields are fixed at construction time through
/// [`UserBuilder`]. Only the contact fields and the account state can
/// change afterwards, which is what the contacts history relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    mobile_phone: String,
    email: String,
    name: Option<String>,
    age: Option<u32>,
    country: Option<String>,
    city: Option<String>,
    address: Option<String>,
    state: Option<AccountState>,
}

impl User {
    /// Starts building a user from the required fields.
    pub fn builder(
        id: UserId,
        mobile_phone: impl Into<String>,
        email: impl Into<String>,
    ) -> UserBuilder {
        UserBuilder::new(id, mobile_phone, email)
    }

    /// Returns the identifier of the user.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the mobile phone number of the user.
    pub fn mobile_phone(&self) -> &str {
        &self.mobile_phone
    }

    /// Returns the email address of the user.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the name of the user, if one was provided.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the age of the user, if one was provided.
    pub fn age(&self) -> Option<u32> {
        self.age
    }

    /// Returns the country of the user, if one was provided.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Returns the city of the user, if one was provided.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Returns the street address of the user, if one was provided.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the current account state, if one was assigned.
    pub fn state(&self) -> Option<AccountState> {
        self.state
    }

    /// Replaces the account state.
    pub fn set_state(&mut self, state: AccountState) {
        log::debug!("User {}: switching account state to {}", self.id, state);
        self.state = Some(state);
    }

    /// Replaces the mobile phone number.
    pub fn set_mobile_phone(&mut self, mobile_phone: impl Into<String>) {
        self.mobile_phone = mobile_phone.into();
    }

    /// Replaces the email address.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Performs a user action under the current account state.
    ///
    /// What the action is allowed to do depends on the state, so a user
    /// without an assigned state cannot act at all and the call fails
    /// with [`ContentError::StateUnset`].
    pub fn perform_action(&self, events: &mut dyn EventSink) -> Result<()> {
        match self.state {
            Some(state) => {
                events.record(EngineEvent::StateReport {
                    user: self.id,
                    state,
                });
                Ok(())
            }
            None => Err(ContentError::StateUnset(self.id)),
        }
    }

    /// Captures the current contact fields for the contacts history.
    pub fn contacts_snapshot(&self) -> ContactsSnapshot {
        ContactsSnapshot::new(self.mobile_phone.clone(), self.email.clone())
    }

    /// Rolls the contact fields back to a previously captured snapshot.
    pub fn restore_contacts(&mut self, snapshot: &ContactsSnapshot) {
        self.mobile_phone = snapshot.mobile_phone().to_string();
        self.email = snapshot.email().to_string();
    }
}

/// Step-by-step construction of a [`User`].
///
/// The identifier and both contact fields are required up front, the
/// rest of the profile is optional. A user always starts without an
/// account state.
#[derive(Debug)]
pub struct UserBuilder {
    id: UserId,
    mobile_phone: String,
    email: String,
    name: Option<String>,
    age: Option<u32>,
    country: Option<String>,
    city: Option<String>,
    address: Option<String>,
}

impl UserBuilder {
    pub fn new(
        id: UserId,
        mobile_phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            mobile_phone: mobile_phone.into(),
            email: email.into(),
            name: None,
            age: None,
            country: None,
            city: None,
            address: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn build(self) -> User {
        User {
            id: self.id,
            mobile_phone: self.mobile_phone,
            email: self.email,
            name: self.name,
            age: self.age,
            country: self.country,
            city: self.city,
            address: self.address,
            state: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::events::EventLog;

    use super::*;

    fn sample_user() -> User {
        User::builder(UserId::new(), "+31650020620", "lena@soderberg.se")
            .name("Lena")
            .age(23)
            .country("Sweden")
            .build()
    }

    #[test]
    fn builder_should_assemble_required_and_optional_fields() {
        let user = sample_user();

        assert_eq!(user.mobile_phone(), "+31650020620");
        assert_eq!(user.email(), "lena@soderberg.se");
        assert_eq!(user.name(), Some("Lena"));
        assert_eq!(user.age(), Some(23));
        assert_eq!(user.country(), Some("Sweden"));
        assert_eq!(user.city(), None);
        assert_eq!(user.address(), None);
    }

    #[test]
    fn fresh_user_should_have_no_account_state() {
        assert_eq!(sample_user().state(), None);
    }

    #[test]
    fn perform_action_should_fail_without_state() {
        let user = sample_user();
        let mut events = EventLog::new();

        let result = user.perform_action(&mut events);

        assert!(matches!(result, Err(ContentError::StateUnset(id)) if id == user.id()));
        assert!(events.is_empty());
    }

    #[test]
    fn perform_action_should_report_current_state() {
        let mut user = sample_user();
        let mut events = EventLog::new();

        user.set_state(AccountState::Active);
        user.perform_action(&mut events)
            .expect("Failed to act in active state");
        user.set_state(AccountState::Blocked);
        user.perform_action(&mut events)
            .expect("Failed to act in blocked state");

        assert_eq!(
            events.events(),
            [
                EngineEvent::StateReport {
                    user: user.id(),
                    state: AccountState::Active,
                },
                EngineEvent::StateReport {
                    user: user.id(),
                    state: AccountState::Blocked,
                },
            ]
        );
    }
}
