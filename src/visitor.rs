use crate::content::{ImageContent, TextContent};
use crate::id::ContentId;

/// One operation per content variant.
///
/// A new behavior over content is a new implementation of this trait.
/// [`Content::accept`](crate::content::Content::accept) dispatches to
/// the operation matching the variant, so the content types stay
/// untouched when behaviors are added.
pub trait ContentVisitor {
    fn visit_text(&mut self, text: &TextContent);
    fn visit_image(&mut self, image: &ImageContent);
}

/// Visitor collecting human-readable summaries of visited content.
#[derive(Debug, Default)]
pub struct InfoPrinter {
    entries: Vec<String>,
}

impl InfoPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected summaries, one per visited content.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl ContentVisitor for InfoPrinter {
    fn visit_text(&mut self, text: &TextContent) {
        let owner = text.owner();
        self.entries.push(format!(
            "TEXT content id: {}.\nUser id: {}.\nUser contacts: {} {}",
            text.id(),
            owner.id(),
            owner.mobile_phone(),
            owner.email()
        ));
    }

    fn visit_image(&mut self, image: &ImageContent) {
        let owner = image.owner();
        self.entries.push(format!(
            "IMAGE content id: {}.\nUser id: {}.\nUser contacts: {} {}",
            image.id(),
            owner.id(),
            owner.mobile_phone(),
            owner.email()
        ));
    }
}

/// Visitor queueing visited content for archival, one queue per kind.
#[derive(Debug, Default)]
pub struct Archiver {
    texts: Vec<ContentId>,
    images: Vec<ContentId>,
}

impl Archiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers of archived text content, in visit order.
    pub fn texts(&self) -> &[ContentId] {
        &self.texts
    }

    /// Identifiers of archived image content, in visit order.
    pub fn images(&self) -> &[ContentId] {
        &self.images
    }
}

impl ContentVisitor for Archiver {
    fn visit_text(&mut self, text: &TextContent) {
        log::debug!("Archiving text content {}", text.id());
        self.texts.push(text.id());
    }

    fn visit_image(&mut self, image: &ImageContent) {
        log::debug!("Archiving image content {}", image.id());
        self.images.push(image.id());
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::content::{Content, ImageData, ImageFormat};
    use crate::id::UserId;
    use crate::user::User;

    use super::*;

    fn sample_owner() -> Rc<User> {
        Rc::new(
            User::builder(UserId::new(), "+31650020620", "lena@soderberg.se")
                .build(),
        )
    }

    fn sample_image(owner: Rc<User>) -> Content {
        Content::new_image(
            ImageData::new(ImageFormat::Png, vec![0x89, 0x50], "tests/pic.png"),
            owner,
        )
    }

    #[test]
    fn accept_should_dispatch_to_matching_operation() {
        let owner = sample_owner();
        let text = Content::new_text("hello", owner.clone());
        let image = sample_image(owner);

        let mut archiver = Archiver::new();
        text.accept(&mut archiver);
        image.accept(&mut archiver);

        assert_eq!(archiver.texts(), [text.id()]);
        assert_eq!(archiver.images(), [image.id()]);
    }

    #[test]
    fn info_printer_should_summarize_text_content() {
        let owner = sample_owner();
        let text = Content::new_text("hello", owner.clone());

        let mut printer = InfoPrinter::new();
        text.accept(&mut printer);

        let expected = format!(
            "TEXT content id: {}.\nUser id: {}.\nUser contacts: {} {}",
            text.id(),
            owner.id(),
            "+31650020620",
            "lena@soderberg.se"
        );
        assert_eq!(printer.entries(), [expected]);
    }

    #[test]
    fn info_printer_should_summarize_image_content() {
        let owner = sample_owner();
        let image = sample_image(owner.clone());

        let mut printer = InfoPrinter::new();
        image.accept(&mut printer);

        assert_eq!(printer.entries().len(), 1);
        let entry = &printer.entries()[0];
        assert!(entry.starts_with(&format!("IMAGE content id: {}.", image.id())));
        assert!(entry.contains(&owner.id().to_string()));
    }

    #[test]
    fn archiver_should_keep_kinds_apart() {
        let owner = sample_owner();
        let first = Content::new_text("a", owner.clone());
        let second = Content::new_text("b", owner.clone());
        let image = sample_image(owner);

        let mut archiver = Archiver::new();
        first.accept(&mut archiver);
        image.accept(&mut archiver);
        second.accept(&mut archiver);

        assert_eq!(archiver.texts(), [first.id(), second.id()]);
        assert_eq!(archiver.images(), [image.id()]);
    }
}
