use std::rc::Rc;

use crate::content::Content;
use crate::events::{EngineEvent, EventSink};
use crate::util::same_allocation;

/// Capability of rendering itself to the outside world.
///
/// Displaying never mutates the displayed item. Everything a display
/// run does is recorded in the sink passed by the caller.
pub trait Displayable {
    fn display(&self, events: &mut dyn EventSink);
}

impl Displayable for Content {
    fn display(&self, events: &mut dyn EventSink) {
        events.record(EngineEvent::Displayed {
            kind: self.kind(),
            content: self.id(),
            owner: self.owner().id(),
        });
    }
}

impl<T: Displayable + ?Sized> Displayable for Rc<T> {
    fn display(&self, events: &mut dyn EventSink) {
        (**self).display(events)
    }
}

/// Ordered collection of displayable items, itself displayable.
///
/// Children are shared handles, so one item may appear in several
/// groups or several times in one group. Removal drops a single
/// occurrence and matches children by allocation identity, never by
/// value. A group joins a parent by moving into an `Rc`, after which
/// no `&mut` to it remains, so a group cannot end up inside itself.
#[derive(Default)]
pub struct ContentGroup {
    children: Vec<Rc<dyn Displayable>>,
}

impl ContentGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child at the end of the display order.
    pub fn add_child(&mut self, child: Rc<dyn Displayable>) {
        self.children.push(child);
    }

    /// Removes the first occurrence of `child`, if present.
    pub fn remove_child(&mut self, child: &Rc<dyn Displayable>) {
        if let Some(position) = self
            .children
            .iter()
            .position(|present| same_allocation(present, child))
        {
            self.children.remove(position);
        }
    }

    /// Children in display order.
    pub fn children(&self) -> &[Rc<dyn Displayable>] {
        &self.children
    }

    /// Amount of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Displayable for ContentGroup {
    fn display(&self, events: &mut dyn EventSink) {
        for child in &self.children {
            child.display(events);
        }
    }
}

impl<'a> IntoIterator for &'a ContentGroup {
    type Item = &'a Rc<dyn Displayable>;
    type IntoIter = std::slice::Iter<'a, Rc<dyn Displayable>>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// Wrapper that encrypts the wrapped item before every display.
pub struct Encrypted<D> {
    inner: D,
}

impl<D> Encrypted<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Unwraps the decorated item.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: Displayable> Displayable for Encrypted<D> {
    fn display(&self, events: &mut dyn EventSink) {
        events.record(EngineEvent::EncryptionApplied);
        self.inner.display(events);
    }
}

/// Wrapper that brackets every display of the wrapped item with audit
/// records carrying the given label.
pub struct Audited<D> {
    label: String,
    inner: D,
}

impl<D> Audited<D> {
    pub fn new(label: String, inner: D) -> Self {
        Self { label, inner }
    }

    /// Unwraps the decorated item.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: Displayable> Displayable for Audited<D> {
    fn display(&self, events: &mut dyn EventSink) {
        events.record(EngineEvent::AuditStarted {
            label: self.label.clone(),
        });
        self.inner.display(events);
        events.record(EngineEvent::AuditFinished {
            label: self.label.clone(),
        });
    }
}

/// Wrapper that swallows every display of the wrapped item.
///
/// The wrapped item is never delegated to. The suppression itself is
/// the only thing a display run records.
pub struct Suppressed<D> {
    inner: D,
}

impl<D> Suppressed<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Unwraps the decorated item.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: Displayable> Displayable for Suppressed<D> {
    fn display(&self, events: &mut dyn EventSink) {
        events.record(EngineEvent::DisplaySuppressed);
    }
}
