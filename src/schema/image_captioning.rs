//! Image captioning task variant. No categories in this one.

use serde::{Deserialize, Serialize};

use super::common::{Image, Info, License};
use super::ids::{AnnotationId, ImageId};
use super::Annotation;
use crate::json::CocoDataset;
use crate::validation::{Validate, ValidationReport};

/// A textual caption describing one image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageCaptioningAnnotation {
    pub id: AnnotationId,
    pub image_id: ImageId,

    /// The caption text. May be empty.
    pub caption: String,
}

impl ImageCaptioningAnnotation {
    /// Creates a caption annotation.
    pub fn new(
        id: impl Into<AnnotationId>,
        image_id: impl Into<ImageId>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            image_id: image_id.into(),
            caption: caption.into(),
        }
    }
}

impl Annotation for ImageCaptioningAnnotation {}

impl Validate for ImageCaptioningAnnotation {
    fn collect_issues(&self, _strict: bool, _report: &mut ValidationReport) {
        // No constraints beyond field types; an empty caption is valid.
    }
}

/// A complete image captioning dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageCaptioningDataset {
    #[serde(default)]
    pub info: Info,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub licenses: Vec<License>,

    pub annotations: Vec<ImageCaptioningAnnotation>,
}

impl Validate for ImageCaptioningDataset {
    fn collect_issues(&self, strict: bool, report: &mut ValidationReport) {
        self.images.collect_issues(strict, report);
        self.annotations.collect_issues(strict, report);
    }
}

impl CocoDataset for ImageCaptioningDataset {}
