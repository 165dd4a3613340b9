use std::collections::HashMap;
use std::rc::Rc;

use crate::errors::{ContentError, Result};
use crate::events::{EngineEvent, EventSink};
use crate::id::UserId;
use crate::user::User;

/// Mediated message exchange between registered users.
///
/// Senders and receivers address each other by identifier and never
/// hold each other directly, the room is the only coupling point.
#[derive(Default)]
pub struct ChatRoom {
    members: HashMap<UserId, Rc<User>>,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user for exchanging messages.
    ///
    /// Registering the same identifier again replaces the stored user.
    pub fn register(&mut self, user: Rc<User>) {
        log::debug!("User {} registered in the chat", user.id());
        self.members.insert(user.id(), user);
    }

    /// Returns `true` when `id` belongs to a registered user.
    pub fn is_registered(&self, id: UserId) -> bool {
        self.members.contains_key(&id)
    }

    /// Looks up a registered user.
    pub fn member(&self, id: UserId) -> Option<&User> {
        self.members.get(&id).map(Rc::as_ref)
    }

    /// Delivers `message` from `sender` to `receiver`.
    ///
    /// Both parties must be registered. The first missing one is named
    /// in the error and nothing is delivered.
    pub fn send(
        &self,
        sender: UserId,
        receiver: UserId,
        message: &str,
        events: &mut dyn EventSink,
    ) -> Result<()> {
        for id in [sender, receiver] {
            if !self.members.contains_key(&id) {
                return Err(ContentError::NotRegistered(id));
            }
        }

        events.record(EngineEvent::ChatDelivered {
            from: sender,
            to: receiver,
            message: message.to_string(),
        });
        Ok(())
    }

    /// Amount of registered users.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when nobody is registered.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::events::EventLog;

    use super::*;

    fn sample_user(email: &str) -> Rc<User> {
        Rc::new(User::builder(UserId::new(), "+31650020620", email).build())
    }

    #[test]
    fn send_between_registered_users_should_deliver() {
        let sender = sample_user("sender@chat.se");
        let receiver = sample_user("receiver@chat.se");

        let mut room = ChatRoom::new();
        room.register(sender.clone());
        room.register(receiver.clone());

        let mut events = EventLog::new();
        room.send(sender.id(), receiver.id(), "hi there", &mut events)
            .expect("Failed to deliver between registered users");

        assert_eq!(
            events.events(),
            [EngineEvent::ChatDelivered {
                from: sender.id(),
                to: receiver.id(),
                message: "hi there".to_string(),
            }]
        );
    }

    #[test]
    fn send_should_name_an_unregistered_sender() {
        let outsider = sample_user("outsider@chat.se");
        let receiver = sample_user("receiver@chat.se");

        let mut room = ChatRoom::new();
        room.register(receiver.clone());

        let mut events = EventLog::new();
        let result =
            room.send(outsider.id(), receiver.id(), "hello?", &mut events);

        assert!(matches!(
            result,
            Err(ContentError::NotRegistered(id)) if id == outsider.id()
        ));
        assert!(events.is_empty());
    }

    #[test]
    fn send_should_name_an_unregistered_receiver() {
        let sender = sample_user("sender@chat.se");
        let outsider = sample_user("outsider@chat.se");

        let mut room = ChatRoom::new();
        room.register(sender.clone());

        let mut events = EventLog::new();
        let result =
            room.send(sender.id(), outsider.id(), "anyone?", &mut events);

        assert!(matches!(
            result,
            Err(ContentError::NotRegistered(id)) if id == outsider.id()
        ));
        assert!(events.is_empty());
    }

    #[test]
    fn register_should_replace_per_identifier() {
        let user = sample_user("original@chat.se");

        let mut room = ChatRoom::new();
        room.register(user.clone());
        room.register(user.clone());

        assert_eq!(room.len(), 1);
        assert!(room.is_registered(user.id()));
        assert_eq!(
            room.member(user.id()).map(|member| member.email()),
            Some("original@chat.se")
        );
    }
}
