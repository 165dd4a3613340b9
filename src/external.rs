use crate::user::User;

/// Flat user representation consumed by external systems.
///
/// Plain strings only. Whatever richer structure a user has is folded
/// in by [`adapt`] before it crosses the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalUser {
    pub id: String,
    pub contact_info: String,
    pub personal_info: String,
}

/// Folds a user into the flat external shape.
///
/// Profile fields the user never provided are rendered as `-`.
pub fn adapt(user: &User) -> ExternalUser {
    let contact_info = format!(
        "Mobile: {}, Email: {}",
        user.mobile_phone(),
        user.email()
    );
    let personal_info = format!(
        "Name: {}, Age: {}, Country: {}",
        user.name().unwrap_or("-"),
        user.age().map_or("-".to_string(), |age| age.to_string()),
        user.country().unwrap_or("-")
    );

    ExternalUser {
        id: user.id().to_string(),
        contact_info,
        personal_info,
    }
}

/// Boundary accepting adapted users.
pub trait ExternalUserSystem {
    fn process_user(&mut self, user: ExternalUser);
}

/// External system that logs every user it receives.
#[derive(Debug, Default)]
pub struct LoggingUserSystem;

impl ExternalUserSystem for LoggingUserSystem {
    fn process_user(&mut self, user: ExternalUser) {
        log::info!(
            "Processing external user: {}. Contact Info: {}. Personal Info: {}",
            user.id,
            user.contact_info,
            user.personal_info
        );
    }
}
