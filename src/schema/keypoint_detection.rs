//! Keypoint detection task variant.
//!
//! Keypoint annotations and categories extend their object detection
//! counterparts. The extension is modeled as composition: the detection
//! fields are embedded and `#[serde(flatten)]`ed so the JSON stays flat,
//! exactly as COCO writes it.

use serde::{Deserialize, Serialize};

use super::common::{Image, Info, License};
use super::object_detection::{ObjectDetectionAnnotation, ObjectDetectionCategory};
use super::{Annotation, Category};
use crate::json::CocoDataset;
use crate::validation::{check_keypoints, IssueContext, Validate, ValidationReport};

/// An object instance with pose keypoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeypointDetectionAnnotation {
    /// The embedded object detection fields (id, image_id, category_id,
    /// segmentation, area, bbox, iscrowd).
    #[serde(flatten)]
    pub detection: ObjectDetectionAnnotation,

    /// Flat list of (x, y, visibility) triples. Visibility: 0 = not
    /// labeled, 1 = labeled but not visible, 2 = labeled and visible.
    pub keypoints: Vec<f64>,

    /// Number of labeled keypoints (visibility > 0). Caller-supplied; never
    /// recomputed from `keypoints`.
    pub num_keypoints: u32,
}

impl KeypointDetectionAnnotation {
    /// Wraps a detection annotation with keypoint data.
    pub fn new(
        detection: ObjectDetectionAnnotation,
        keypoints: Vec<f64>,
        num_keypoints: u32,
    ) -> Self {
        Self {
            detection,
            keypoints,
            num_keypoints,
        }
    }
}

impl Annotation for KeypointDetectionAnnotation {}

impl Validate for KeypointDetectionAnnotation {
    fn collect_issues(&self, strict: bool, report: &mut ValidationReport) {
        self.detection.collect_issues(strict, report);
        if strict {
            check_keypoints(
                &self.keypoints,
                IssueContext::Annotation {
                    id: self.detection.id.as_u64(),
                },
                report,
            );
        }
    }
}

/// An object class with named keypoints and a skeletal edge list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeypointDetectionCategory {
    /// The embedded object detection fields (id, name, supercategory).
    #[serde(flatten)]
    pub detection: ObjectDetectionCategory,

    /// Keypoint names, in keypoint order.
    pub keypoints: Vec<String>,

    /// Skeletal edges as pairs of 1-based indices into `keypoints`. Kept
    /// 1-based end to end; no zero-based conversion anywhere.
    pub skeleton: Vec<[u32; 2]>,
}

impl KeypointDetectionCategory {
    /// Wraps a detection category with keypoint definitions.
    pub fn new(
        detection: ObjectDetectionCategory,
        keypoints: Vec<String>,
        skeleton: Vec<[u32; 2]>,
    ) -> Self {
        Self {
            detection,
            keypoints,
            skeleton,
        }
    }
}

impl Category for KeypointDetectionCategory {}

impl Validate for KeypointDetectionCategory {
    fn collect_issues(&self, strict: bool, report: &mut ValidationReport) {
        self.detection.collect_issues(strict, report);
    }
}

/// A complete keypoint detection dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeypointDetectionDataset {
    #[serde(default)]
    pub info: Info,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub licenses: Vec<License>,

    pub annotations: Vec<KeypointDetectionAnnotation>,
    pub categories: Vec<KeypointDetectionCategory>,
}

impl Validate for KeypointDetectionDataset {
    fn collect_issues(&self, strict: bool, report: &mut ValidationReport) {
        self.images.collect_issues(strict, report);
        self.annotations.collect_issues(strict, report);
        self.categories.collect_issues(strict, report);
    }
}

impl CocoDataset for KeypointDetectionDataset {}
