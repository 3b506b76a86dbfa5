use std::path::Path;

use image::{DynamicImage, RgbImage};

use crate::VioError;

/// One input image plus the metadata the pipeline carries along with it.
#[derive(Debug, Clone, Default)]
pub struct VioImage {
    pub image: RgbImage,
    pub img_width: u32,
    pub img_height: u32,
    /// Original file name, used to name the evidence copy.
    pub source_name: Option<String>,
}

impl std::ops::Deref for VioImage {
    type Target = RgbImage;

    fn deref(&self) -> &Self::Target {
        &self.image
    }
}

impl From<DynamicImage> for VioImage {
    fn from(image: DynamicImage) -> Self {
        Self::new(image.to_rgb8())
    }
}

impl From<RgbImage> for VioImage {
    fn from(image: RgbImage) -> Self {
        Self::new(image)
    }
}

impl VioImage {
    pub fn new(image: RgbImage) -> Self {
        let (img_width, img_height) = image.dimensions();
        Self {
            image,
            img_width,
            img_height,
            source_name: None,
        }
    }

    /// Decodes an image file. An unreadable file is reported as
    /// [`VioError::InputUnreadable`], distinct from an image with nothing in it.
    pub fn from_path(path: &Path) -> Result<Self, VioError> {
        let image = image::open(path).map_err(|source| VioError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let mut vio_image = Self::new(image.to_rgb8());
        vio_image.source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(vio_image)
    }

    pub fn with_source_name(mut self, name: &str) -> Self {
        self.source_name = Some(name.to_string());
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.img_width, self.img_height)
    }
}
