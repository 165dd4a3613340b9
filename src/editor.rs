use crate::content::{Content, ContentKind};
use crate::errors::{ContentError, Result};
use crate::id::ContentId;
use crate::storage::EntityStore;

/// An edit applied to a content store.
///
/// Commands carry everything their edit needs and can be applied to
/// any store, which is what makes queueing and replaying them cheap.
pub trait EditCommand {
    fn apply(&self, store: &mut dyn EntityStore<Content>) -> Result<()>;
}

/// Puts a new piece of content into the store.
pub struct AddContent {
    content: Content,
}

impl AddContent {
    pub fn new(content: Content) -> Self {
        Self { content }
    }
}

impl EditCommand for AddContent {
    fn apply(&self, store: &mut dyn EntityStore<Content>) -> Result<()> {
        log::debug!("Adding content {}", self.content.id());
        store.create(self.content.clone())?;
        Ok(())
    }
}

/// Replaces the body of stored text content.
pub struct ReviseText {
    id: ContentId,
    body: String,
}

impl ReviseText {
    pub fn new(id: ContentId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}

impl EditCommand for ReviseText {
    fn apply(&self, store: &mut dyn EntityStore<Content>) -> Result<()> {
        let stored = store.read(&self.id).ok_or_else(|| {
            ContentError::InvalidInput(format!(
                "No content stored under {}",
                self.id
            ))
        })?;
        match stored {
            Content::Text(mut text) => {
                log::debug!("Editing content {}", self.id);
                text.set_body(self.body.clone());
                store.update(Content::Text(text))?;
                Ok(())
            }
            other => Err(ContentError::VariantMismatch {
                expected: ContentKind::Text,
                actual: other.kind(),
            }),
        }
    }
}

/// Removes content from the store.
///
/// Deleting an identifier nothing is stored under is a quiet no-op.
pub struct DeleteContent {
    id: ContentId,
}

impl DeleteContent {
    pub fn new(id: ContentId) -> Self {
        Self { id }
    }
}

impl EditCommand for DeleteContent {
    fn apply(&self, store: &mut dyn EntityStore<Content>) -> Result<()> {
        if store.delete(&self.id) {
            log::debug!("Deleted content {}", self.id);
        } else {
            log::debug!("Nothing stored under {}", self.id);
        }
        Ok(())
    }
}

/// Applies edit commands to the content store it owns.
pub struct ContentEditor<S>
where
    S: EntityStore<Content>,
{
    store: S,
}

impl<S> ContentEditor<S>
where
    S: EntityStore<Content>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Applies one command to the owned store.
    pub fn execute(&mut self, command: &dyn EditCommand) -> Result<()> {
        command.apply(&mut self.store)
    }

    /// The store being edited.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Releases the store.
    pub fn into_store(self) -> S {
        self.store
    }
}
