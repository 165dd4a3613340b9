use crate::content::{Content, ContentKind};
use crate::errors::{ContentError, Result};
use crate::events::{EngineEvent, EventSink};

/// An interchangeable content processing algorithm.
///
/// Strategies are picked at runtime and handed to
/// [`Content::process`](crate::content::Content::process). An algorithm
/// covers one variant and fails on the others instead of guessing.
pub trait ProcessingStrategy {
    fn process_content(
        &self,
        content: &mut Content,
        events: &mut dyn EventSink,
    ) -> Result<()>;
}

/// Algorithm covering text content.
#[derive(Debug, Default)]
pub struct TextStrategy;

impl ProcessingStrategy for TextStrategy {
    fn process_content(
        &self,
        content: &mut Content,
        events: &mut dyn EventSink,
    ) -> Result<()> {
        match content {
            Content::Text(text) => {
                events.record(EngineEvent::StrategyRan {
                    kind: ContentKind::Text,
                    content: text.id(),
                });
                Ok(())
            }
            other => Err(ContentError::VariantMismatch {
                expected: ContentKind::Text,
                actual: other.kind(),
            }),
        }
    }
}

/// Algorithm covering image content.
#[derive(Debug, Default)]
pub struct ImageStrategy;

impl ProcessingStrategy for ImageStrategy {
    fn process_content(
        &self,
        content: &mut Content,
        events: &mut dyn EventSink,
    ) -> Result<()> {
        match content {
            Content::Image(image) => {
                events.record(EngineEvent::StrategyRan {
                    kind: ContentKind::Image,
                    content: image.id(),
                });
                Ok(())
            }
            other => Err(ContentError::VariantMismatch {
                expected: ContentKind::Image,
                actual: other.kind(),
            }),
        }
    }
}

/// Fixed processing skeleton: validate, modify, then the shared save.
///
/// [`run`](ContentProcessor::run) owns the order of the steps and stops
/// before any modification when validation fails. Implementations
/// supply the per-variant steps. The save step is shared by every
/// processor and cannot be replaced.
pub trait ContentProcessor {
    /// The single variant this processor accepts.
    fn expected_kind(&self) -> ContentKind;

    /// Checks `content` before any modification.
    ///
    /// The default implementation rejects every variant except
    /// [`expected_kind`](ContentProcessor::expected_kind).
    fn validate(&self, content: &Content) -> Result<()> {
        let actual = content.kind();
        if actual == self.expected_kind() {
            Ok(())
        } else {
            log::error!(
                "Content validation failed: expected {} content, got {}",
                self.expected_kind(),
                actual
            );
            Err(ContentError::VariantMismatch {
                expected: self.expected_kind(),
                actual,
            })
        }
    }

    /// Adjusts validated content in place.
    fn modify(&self, content: &mut Content, events: &mut dyn EventSink);

    /// Runs the skeleton over `content`.
    fn run(
        &self,
        content: &mut Content,
        events: &mut dyn EventSink,
    ) -> Result<()> {
        self.validate(content)?;
        self.modify(content, events);
        save_content(content, events);
        Ok(())
    }
}

/// Shared save step, identical for every processor.
fn save_content(content: &Content, events: &mut dyn EventSink) {
    log::debug!("Saving content {}", content.id());
    events.record(EngineEvent::ContentSaved {
        content: content.id(),
    });
}

/// Processor accepting text content and trimming trailing whitespace.
#[derive(Debug, Default)]
pub struct TextProcessor;

impl ContentProcessor for TextProcessor {
    fn expected_kind(&self) -> ContentKind {
        ContentKind::Text
    }

    fn modify(&self, content: &mut Content, events: &mut dyn EventSink) {
        if let Content::Text(text) = content {
            let trimmed = text.body().trim_end().to_string();
            text.set_body(trimmed);
            events.record(EngineEvent::ContentModified {
                kind: ContentKind::Text,
                content: text.id(),
            });
        }
    }
}

/// Processor accepting image content.
///
/// The optimization pass is simulated, the recorded modification event
/// is what it leaves behind.
#[derive(Debug, Default)]
pub struct ImageProcessor;

impl ContentProcessor for ImageProcessor {
    fn expected_kind(&self) -> ContentKind {
        ContentKind::Image
    }

    fn modify(&self, content: &mut Content, events: &mut dyn EventSink) {
        if let Content::Image(image) = content {
            events.record(EngineEvent::ContentModified {
                kind: ContentKind::Image,
                content: image.id(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use rstest::rstest;

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

    #[test]
    fn strategy_should_process_the_covered_variant() {
        let mut content = sample_text("hello");
        let mut events = EventLog::new();

        content
            .process(&TextStrategy, &mut events)
            .expect("Failed to process text content");

        assert_eq!(
            events.events(),
            [EngineEvent::StrategyRan {
                kind: ContentKind::Text,
                content: content.id(),
            }]
        );
    }

    #[rstest]
    #[case(Box::new(TextStrategy), sample_image(), ContentKind::Text)]
    #[case(Box::new(ImageStrategy), sample_text("hello"), ContentKind::Image)]
    fn strategy_should_reject_the_other_variant(
        #[case] strategy: Box<dyn ProcessingStrategy>,
        #[case] mut content: Content,
        #[case] expected: ContentKind,
    ) {
        let mut events = EventLog::new();
        let actual = content.kind();

        let result = content.process(strategy.as_ref(), &mut events);

        assert!(matches!(
            result,
            Err(ContentError::VariantMismatch {
                expected: e,
                actual: a,
            }) if e == expected && a == actual
        ));
        assert!(events.is_empty());
    }

    #[test]
    fn run_should_modify_then_save() {
        let mut content = sample_text("draft  ");
        let mut events = EventLog::new();

        TextProcessor
            .run(&mut content, &mut events)
            .expect("Failed to run text processor");

        match &content {
            Content::Text(text) => assert_eq!(text.body(), "draft"),
            other => panic!("Expected text content, got {other:?}"),
        }
        assert_eq!(
            events.events(),
            [
                EngineEvent::ContentModified {
                    kind: ContentKind::Text,
                    content: content.id(),
                },
                EngineEvent::ContentSaved {
                    content: content.id(),
                },
            ]
        );
    }

    #[test]
    fn image_processor_should_accept_image_content() {
        let mut content = sample_image();
        let mut events = EventLog::new();

        ImageProcessor
            .run(&mut content, &mut events)
            .expect("Failed to run image processor");

        assert_eq!(
            events.events(),
            [
                EngineEvent::ContentModified {
                    kind: ContentKind::Image,
                    content: content.id(),
                },
                EngineEvent::ContentSaved {
                    content: content.id(),
                },
            ]
        );
    }

    #[rstest]
    #[case(Box::new(TextProcessor), sample_image())]
    #[case(Box::new(ImageProcessor), sample_text("hello"))]
    fn failed_validation_should_skip_modify_and_save(
        #[case] processor: Box<dyn ContentProcessor>,
        #[case] mut content: Content,
    ) {
        let before = content.clone();
        let mut events = EventLog::new();

        let result = processor.run(&mut content, &mut events);

        assert!(matches!(
            result,
            Err(ContentError::VariantMismatch { .. })
        ));
        assert!(events.is_empty());
        assert_eq!(content, before);
    }
}
