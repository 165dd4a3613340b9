//! Observable effects of the engine.
//!
//! Every operation that the original pipeline would report as a side
//! effect is recorded as an [`EngineEvent`] through an [`EventSink`]
//! passed in by the caller. Tests capture events with [`EventLog`],
//! applications forward them to the `log` facade with [`LogSink`].

use std::fmt;

use crate::content::ContentKind;
use crate::id::{ContentId, UserId};
use crate::state::AccountState;

/// A single observable step performed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Content was rendered through its `Displayable` capability.
    Displayed {
        kind: ContentKind,
        content: ContentId,
        owner: UserId,
    },
    /// An encryption wrapper ran before delegating the display call.
    EncryptionApplied,
    /// An audit wrapper is about to delegate the display call.
    AuditStarted { label: String },
    /// An audit wrapper finished delegating the display call.
    AuditFinished { label: String },
    /// A suppression wrapper swallowed the display call.
    DisplaySuppressed,
    /// The text handler claimed content and upper-cased its body.
    TextUppercased { content: ContentId },
    /// The image handler claimed content and resized it.
    ImageResized {
        content: ContentId,
        width: u32,
        height: u32,
    },
    /// An interchangeable processing algorithm ran over content.
    StrategyRan {
        kind: ContentKind,
        content: ContentId,
    },
    /// The modify step of the processing skeleton ran.
    ContentModified {
        kind: ContentKind,
        content: ContentId,
    },
    /// The shared save step of the processing skeleton ran.
    ContentSaved { content: ContentId },
    /// A user performed an action under its current account state.
    StateReport { user: UserId, state: AccountState },
    /// A news message reached a subscribed user.
    NewsDelivered { user: UserId, message: String },
    /// A chat message was delivered between registered users.
    ChatDelivered {
        from: UserId,
        to: UserId,
        message: String,
    },
}

impl fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineEvent::Displayed {
                kind,
                content,
                owner,
            } => {
                write!(f, "Displaying {kind} content {content} of user {owner}")
            }
            EngineEvent::EncryptionApplied => {
                write!(f, "Encrypting content before display")
            }
            EngineEvent::AuditStarted { label } => {
                write!(f, "Audit {label}: display starting")
            }
            EngineEvent::AuditFinished { label } => {
                write!(f, "Audit {label}: display finished")
            }
            EngineEvent::DisplaySuppressed => write!(f, "Display suppressed"),
            EngineEvent::TextUppercased { content } => {
                write!(f, "Text content {content} converted to upper case")
            }
            EngineEvent::ImageResized {
                content,
                width,
                height,
            } => {
                write!(f, "Image content {content} resized to {width}x{height}")
            }
            EngineEvent::StrategyRan { kind, content } => {
                write!(f, "Processing {kind} content {content}")
            }
            EngineEvent::ContentModified { kind, content } => {
                write!(f, "Modifying {kind} content {content}")
            }
            EngineEvent::ContentSaved { content } => {
                write!(f, "Saving content {content}")
            }
            EngineEvent::StateReport { user, state } => {
                write!(f, "User {user}: {}", state.report())
            }
            EngineEvent::NewsDelivered { user, message } => {
                write!(f, "User {user} received a news message: {message}")
            }
            EngineEvent::ChatDelivered { from, to, message } => {
                write!(f, "User {from} sent '{message}' to user {to}")
            }
        }
    }
}

/// Receiver of engine events.
///
/// The engine never logs on its own. Callers decide where events go by
/// passing a sink into every effectful operation.
pub trait EventSink {
    fn record(&mut self, event: EngineEvent);
}

/// In-memory sink preserving events in the order they were recorded.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<EngineEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// Amount of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn record(&mut self, event: EngineEvent) {
        self.events.push(event);
    }
}

/// Sink forwarding every event to the `log` facade at info level.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: EngineEvent) {
        log::info!("{event}");
    }
}
