use std::path::PathBuf;
use std::rc::Rc;

use crate::content::{Content, ContentKind, ImageData, ImageFormat};
use crate::errors::{ContentError, Result};
use crate::user::User;

/// Raw material for constructing one piece of content.
///
/// A seed carries everything the matching creator needs. Handing a
/// creator a seed of the wrong kind is an input error, never a silent
/// miss.
#[derive(Debug, Clone)]
pub enum ContentSeed {
    Text {
        body: String,
        owner: Rc<User>,
    },
    Image {
        format: ImageFormat,
        bytes: Vec<u8>,
        path: PathBuf,
        owner: Rc<User>,
    },
}

impl ContentSeed {
    /// The kind of content this seed produces.
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentSeed::Text { .. } => ContentKind::Text,
            ContentSeed::Image { .. } => ContentKind::Image,
        }
    }
}

/// Constructor of one content variant.
pub trait ContentCreator {
    /// Builds content from a seed of the matching kind.
    fn create(&self, seed: ContentSeed) -> Result<Content>;
}

/// Creator producing text content.
#[derive(Debug, Default)]
pub struct TextCreator;

impl ContentCreator for TextCreator {
    fn create(&self, seed: ContentSeed) -> Result<Content> {
        match seed {
            ContentSeed::Text { body, owner } => {
                Ok(Content::new_text(body, owner))
            }
            other => Err(ContentError::InvalidInput(format!(
                "{} seed handed to the text creator",
                other.kind()
            ))),
        }
    }
}

/// Creator producing image content.
#[derive(Debug, Default)]
pub struct ImageCreator;

impl ContentCreator for ImageCreator {
    fn create(&self, seed: ContentSeed) -> Result<Content> {
        match seed {
            ContentSeed::Image {
                format,
                bytes,
                path,
                owner,
            } => Ok(Content::new_image(
                ImageData::new(format, bytes, path),
                owner,
            )),
            other => Err(ContentError::InvalidInput(format!(
                "{} seed handed to the image creator",
                other.kind()
            ))),
        }
    }
}

/// Picks the creator producing `kind`.
pub fn creator_for(kind: ContentKind) -> Box<dyn ContentCreator> {
    match kind {
        ContentKind::Text => Box::new(TextCreator),
        ContentKind::Image => Box::new(ImageCreator),
    }
}

/// Builds content of `kind` in one step.
///
/// Fails with [`ContentError::InvalidInput`] when the seed does not
/// match the requested kind.
pub fn build_content(kind: ContentKind, seed: ContentSeed) -> Result<Content> {
    creator_for(kind).create(seed)
}
