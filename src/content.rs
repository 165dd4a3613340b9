use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::events::EventSink;
use crate::id::ContentId;
use crate::process::ProcessingStrategy;
use crate::user::User;
use crate::visitor::ContentVisitor;

/// Tag distinguishing the supported content variants.
///
/// The tag is derived from the variant and can never disagree with the
/// payload. Code that needs one behavior per variant matches on
/// [`Content`] itself and gets checked for exhaustiveness, code that
/// only routes or reports uses this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Text,
    Image,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Encoding of stored image bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
}

impl ImageFormat {
    /// Infers the format from the extension of `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<ImageFormat> {
        let extension = path.as_ref().extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            _ => None,
        }
    }
}

/// Raw image payload together with its origin path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    format: ImageFormat,
    bytes: Vec<u8>,
    path: PathBuf,
}

impl ImageData {
    pub fn new(
        format: ImageFormat,
        bytes: Vec<u8>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            format,
            bytes,
            path: path.into(),
        }
    }

    /// Returns the encoding of the payload.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Returns the raw payload bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the path the payload was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Textual content owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    id: ContentId,
    owner: Rc<User>,
    body: String,
}

impl TextContent {
    pub fn new(body: impl Into<String>, owner: Rc<User>) -> Self {
        Self {
            id: ContentId::new(),
            owner,
            body: body.into(),
        }
    }

    /// Returns the identifier of the content.
    pub fn id(&self) -> ContentId {
        self.id
    }

    /// Returns the owning user.
    pub fn owner(&self) -> &User {
        &self.owner
    }

    /// Returns the text body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replaces the text body.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }
}

/// Image content owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContent {
    id: ContentId,
    owner: Rc<User>,
    image: ImageData,
}

impl ImageContent {
    pub fn new(image: ImageData, owner: Rc<User>) -> Self {
        Self {
            id: ContentId::new(),
            owner,
            image,
        }
    }

    /// Returns the identifier of the content.
    pub fn id(&self) -> ContentId {
        self.id
    }

    /// Returns the owning user.
    pub fn owner(&self) -> &User {
        &self.owner
    }

    /// Returns the image payload.
    pub fn image(&self) -> &ImageData {
        &self.image
    }
}

/// A piece of user content, either text or an image.
///
/// The set of variants is closed. Every routine with per-variant
/// behavior matches on this enum, so adding a variant starts at this
/// type and the compiler walks the codebase from here.
///
/// Owners are shared read-only references. Serialization embeds the
/// owner, so deserialized content holds a private copy of its user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    Text(TextContent),
    Image(ImageContent),
}

impl Content {
    /// Creates text content with a fresh identifier.
    pub fn new_text(body: impl Into<String>, owner: Rc<User>) -> Self {
        Content::Text(TextContent::new(body, owner))
    }

    /// Creates image content with a fresh identifier.
    pub fn new_image(image: ImageData, owner: Rc<User>) -> Self {
        Content::Image(ImageContent::new(image, owner))
    }

    /// Returns the identifier of the content.
    pub fn id(&self) -> ContentId {
        match self {
            Content::Text(text) => text.id(),
            Content::Image(image) => image.id(),
        }
    }

    /// Returns the owning user.
    pub fn owner(&self) -> &User {
        match self {
            Content::Text(text) => text.owner(),
            Content::Image(image) => image.owner(),
        }
    }

    /// Returns the tag of the variant.
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Text(_) => ContentKind::Text,
            Content::Image(_) => ContentKind::Image,
        }
    }

    /// Dispatches the visitor operation matching this variant.
    pub fn accept(&self, visitor: &mut dyn ContentVisitor) {
        match self {
            Content::Text(text) => visitor.visit_text(text),
            Content::Image(image) => visitor.visit_image(image),
        }
    }

    /// Runs an interchangeable processing algorithm over this content.
    pub fn process(
        &mut self,
        strategy: &dyn ProcessingStrategy,
        events: &mut dyn EventSink,
    ) -> Result<()> {
        strategy.process_content(self, events)
    }
}
