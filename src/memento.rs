use crate::user::User;

/// Captured contact fields of a user.
///
/// Snapshots come out of [`User::contacts_snapshot`] and go back in
/// through [`User::restore_contacts`]. A snapshot carries no identity
/// beyond its values and is consumed only by the history that holds it.
#[derive(Debug, PartialEq, Eq)]
pub struct ContactsSnapshot {
    mobile_phone: String,
    email: String,
}

impl ContactsSnapshot {
    pub(crate) fn new(mobile_phone: String, email: String) -> Self {
        Self {
            mobile_phone,
            email,
        }
    }

    /// Captured mobile phone number.
    pub fn mobile_phone(&self) -> &str {
        &self.mobile_phone
    }

    /// Captured email address.
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Undo log of contact changes.
///
/// Snapshots stack up in save order and undo pops the latest first.
/// The history owns its snapshots exclusively.
#[derive(Debug, Default)]
pub struct ContactsHistory {
    snapshots: Vec<ContactsSnapshot>,
}

impl ContactsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the current contacts of `user` onto the log.
    pub fn save(&mut self, user: &User) {
        log::debug!("Saving contacts of user {}", user.id());
        self.snapshots.push(user.contacts_snapshot());
    }

    /// Pops the latest snapshot back into `user`.
    ///
    /// Returns `false` when the log is empty, leaving `user` untouched.
    pub fn undo(&mut self, user: &mut User) -> bool {
        match self.snapshots.pop() {
            Some(snapshot) => {
                log::debug!("Restoring contacts of user {}", user.id());
                user.restore_contacts(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Amount of snapshots still on the log.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if there is nothing left to undo.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
