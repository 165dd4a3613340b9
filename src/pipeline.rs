use crate::content::{Content, ContentKind};
use crate::events::{EngineEvent, EventSink};

/// Target size of the simulated resize applied by [`ImageHandler`].
const RESIZE_WIDTH: u32 = 800;
const RESIZE_HEIGHT: u32 = 600;

/// A step in the content processing chain.
///
/// [`handle`](ContentHandler::handle) is the chain protocol: the first
/// handler to claim the content processes it and the walk stops there.
/// Content no handler claims falls off the end untouched.
pub trait ContentHandler {
    /// Returns `true` when this handler processes `content` itself.
    fn claims(&self, content: &Content) -> bool;

    /// Applies the processing of this handler.
    ///
    /// Only ever called for content this handler claims.
    fn process(&self, content: &mut Content, events: &mut dyn EventSink);

    /// Next handler in the chain, if any.
    fn next(&self) -> Option<&dyn ContentHandler>;

    /// Walks the chain from this handler until one claims `content`.
    fn handle(&self, content: &mut Content, events: &mut dyn EventSink) {
        if self.claims(content) {
            self.process(content, events);
        } else if let Some(next) = self.next() {
            next.handle(content, events);
        }
    }
}

/// Handler claiming text content and upper-casing its body.
#[derive(Default)]
pub struct TextHandler {
    next: Option<Box<dyn ContentHandler>>,
}

impl TextHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the handler consulted when this one does not claim.
    pub fn set_next(&mut self, next: Box<dyn ContentHandler>) {
        self.next = Some(next);
    }
}

impl ContentHandler for TextHandler {
    fn claims(&self, content: &Content) -> bool {
        content.kind() == ContentKind::Text
    }

    fn process(&self, content: &mut Content, events: &mut dyn EventSink) {
        if let Content::Text(text) = content {
            let upper = text.body().to_uppercase();
            text.set_body(upper);
            events.record(EngineEvent::TextUppercased { content: text.id() });
        }
    }

    fn next(&self) -> Option<&dyn ContentHandler> {
        self.next.as_deref()
    }
}

/// Handler claiming image content and resizing it to a fixed target.
///
/// The resize itself is simulated. What the pipeline guarantees is the
/// recorded event with the target dimensions.
#[derive(Default)]
pub struct ImageHandler {
    next: Option<Box<dyn ContentHandler>>,
}

impl ImageHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the handler consulted when this one does not claim.
    pub fn set_next(&mut self, next: Box<dyn ContentHandler>) {
        self.next = Some(next);
    }
}

impl ContentHandler for ImageHandler {
    fn claims(&self, content: &Content) -> bool {
        content.kind() == ContentKind::Image
    }

    fn process(&self, content: &mut Content, events: &mut dyn EventSink) {
        if let Content::Image(image) = content {
            events.record(EngineEvent::ImageResized {
                content: image.id(),
                width: RESIZE_WIDTH,
                height: RESIZE_HEIGHT,
            });
        }
    }

    fn next(&self) -> Option<&dyn ContentHandler> {
        self.next.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::content::{ImageData, ImageFormat};
    use crate::events::EventLog;
    use crate::id::UserId;
    use crate::user::User;

    use super::*;

    fn sample_owner() -> Rc<User> {
        Rc::new(
            User::builder(UserId::new(), "+31650020620", "lena@soderberg.se")
                .build(),
        )
    }

    fn sample_text(body: &str) -> Content {
        Content::new_text(body, sample_owner())
    }

    fn sample_image() -> Content {
        Content::new_image(
            ImageData::new(ImageFormat::Jpeg, vec![0xff, 0xd8], "tests/lena.jpg"),
            sample_owner(),
        )
    }

    fn full_chain() -> TextHandler {
        let mut head = TextHandler::new();
        head.set_next(Box::new(ImageHandler::new()));
        head
    }

    #[test]
    fn text_handler_should_uppercase_claimed_content() {
        let mut content = sample_text("hello world");
        let id = content.id();
        let owner_id = content.owner().id();
        let mut events = EventLog::new();

        full_chain().handle(&mut content, &mut events);

        match &content {
            Content::Text(text) => assert_eq!(text.body(), "HELLO WORLD"),
            other => panic!("Expected text content, got {other:?}"),
        }
        assert_eq!(content.id(), id);
        assert_eq!(content.owner().id(), owner_id);
        assert_eq!(
            events.events(),
            [EngineEvent::TextUppercased { content: id }]
        );
    }

    #[test]
    fn chain_should_forward_content_to_the_claiming_handler() {
        let mut content = sample_image();
        let mut events = EventLog::new();

        full_chain().handle(&mut content, &mut events);

        assert_eq!(
            events.events(),
            [EngineEvent::ImageResized {
                content: content.id(),
                width: 800,
                height: 600,
            }]
        );
    }

    #[test]
    fn forwarded_content_should_stay_untouched_by_earlier_handlers() {
        let mut content = sample_image();
        let before = content.clone();
        let mut events = EventLog::new();

        full_chain().handle(&mut content, &mut events);

        assert_eq!(content, before);
    }

    #[test]
    fn unclaimed_content_should_fall_off_the_chain() {
        let mut content = sample_image();
        let before = content.clone();
        let mut events = EventLog::new();

        TextHandler::new().handle(&mut content, &mut events);

        assert!(events.is_empty());
        assert_eq!(content, before);
    }

    #[test]
    fn only_the_first_claiming_handler_should_run() {
        let mut head = TextHandler::new();
        let mut second = TextHandler::new();
        second.set_next(Box::new(ImageHandler::new()));
        head.set_next(Box::new(second));

        let mut content = sample_text("once");
        let mut events = EventLog::new();

        head.handle(&mut content, &mut events);

        assert_eq!(events.len(), 1);
        match &content {
            Content::Text(text) => assert_eq!(text.body(), "ONCE"),
            other => panic!("Expected text content, got {other:?}"),
        }
    }
}
