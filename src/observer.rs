use std::rc::Rc;

use crate::events::{EngineEvent, EventSink};
use crate::user::User;
use crate::util::same_allocation;

/// Receiver of published news.
pub trait Subscriber {
    fn notify(&self, message: &str, events: &mut dyn EventSink);
}

impl Subscriber for User {
    fn notify(&self, message: &str, events: &mut dyn EventSink) {
        events.record(EngineEvent::NewsDelivered {
            user: self.id(),
            message: message.to_string(),
        });
    }
}

/// Registry delivering every published message to its subscribers.
///
/// Subscribers are shared handles compared by allocation identity, so
/// one subscriber registered twice is notified twice. Publishing
/// borrows the feed immutably. The subscriber set therefore cannot
/// change in the middle of a delivery round, and everyone subscribed
/// when the round starts is notified exactly once per registration.
#[derive(Default)]
pub struct NewsFeed {
    subscribers: Vec<Rc<dyn Subscriber>>,
}

impl NewsFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber for future publications.
    pub fn subscribe(&mut self, subscriber: Rc<dyn Subscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Drops the first matching registration of `subscriber`, if any.
    pub fn unsubscribe(&mut self, subscriber: &Rc<dyn Subscriber>) {
        if let Some(position) = self
            .subscribers
            .iter()
            .position(|present| same_allocation(present, subscriber))
        {
            self.subscribers.remove(position);
        }
    }

    /// Delivers `message` to every subscriber in subscription order.
    pub fn publish(&self, message: &str, events: &mut dyn EventSink) {
        log::debug!(
            "Publishing news to {} subscribers",
            self.subscribers.len()
        );
        for subscriber in &self.subscribers {
            subscriber.notify(message, events);
        }
    }

    /// Amount of registrations.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
