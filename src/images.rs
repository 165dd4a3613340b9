use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::content::{ImageData, ImageFormat};
use crate::errors::Result;

/// Cache of image payloads keyed by source path.
///
/// Each file is read at most once. Later loads of the same path hand
/// out the cached payload instead of touching the filesystem again, so
/// every holder shares one allocation per path.
#[derive(Default)]
pub struct ImageCache {
    images: HashMap<PathBuf, Rc<ImageData>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the payload of `path`, reading the file on the first call only.
    ///
    /// The format is inferred from the file extension, falling back to
    /// JPEG when the extension is missing or unknown.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<Rc<ImageData>> {
        let path = path.as_ref();
        if let Some(image) = self.images.get(path) {
            log::debug!("Image cache hit for {}", path.display());
            return Ok(image.clone());
        }

        log::debug!("Reading image bytes from {}", path.display());
        let bytes = fs::read(path)?;
        let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Jpeg);
        let image = Rc::new(ImageData::new(format, bytes, path));
        self.images.insert(path.to_path_buf(), image.clone());

        Ok(image)
    }

    /// Amount of cached payloads.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
