//! Polymorphic content processing engine.
//!
//! User content (text and images) is a closed sum type with shared
//! read-only owners. Display composition, visitor dispatch, a chain of
//! claim-based handlers, pluggable processing strategies and a fixed
//! validate/modify/save skeleton all attach to it without reopening the
//! type. Users carry an account state, an undo log for their contact
//! fields and news subscriptions.
//!
//! The engine never logs behind the caller's back. Every observable
//! effect is recorded as an [`EngineEvent`] through the [`EventSink`]
//! passed into the operation, see [`events`] for the sinks shipped with
//! the crate.

pub mod chat;
pub mod content;
pub mod display;
pub mod editor;
pub mod errors;
pub mod events;
pub mod external;
pub mod factory;
pub mod id;
pub mod images;
pub mod memento;
pub mod observer;
pub mod pipeline;
pub mod process;
pub mod state;
pub mod storage;
pub mod user;
mod util;
pub mod visitor;

pub use content::{
    Content, ContentKind, ImageContent, ImageData, ImageFormat, TextContent,
};
pub use errors::{ContentError, Result};
pub use events::{EngineEvent, EventLog, EventSink, LogSink};
pub use id::{ContentId, UserId};
pub use state::AccountState;
pub use user::{User, UserBuilder};
