//! Object detection task variant.

use serde::{Deserialize, Serialize};

use super::bbox::Bbox;
use super::common::{Image, Info, License};
use super::ids::{AnnotationId, CategoryId, ImageId};
use super::{Annotation, Category};
use crate::json::CocoDataset;
use crate::validation::{
    check_area, check_bbox, check_iscrowd, IssueCode, IssueContext, Validate, ValidationIssue,
    ValidationReport,
};

/// One detected object instance: bounding box, polygon segmentation, and
/// crowd flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectDetectionAnnotation {
    pub id: AnnotationId,
    pub image_id: ImageId,
    pub category_id: CategoryId,

    /// Polygon segmentation: each polygon is a flat list of
    /// x, y coordinate pairs.
    pub segmentation: Vec<Vec<f64>>,

    /// Area of the segmentation mask in pixels. Non-negative.
    pub area: f64,

    /// Bounding box in (x, y, width, height) order.
    pub bbox: Bbox,

    /// 1 if the annotation marks a group/crowd region, 0 for a single
    /// instance.
    pub iscrowd: u8,
}

impl ObjectDetectionAnnotation {
    /// Creates an annotation with an empty segmentation; area and bbox are
    /// caller-supplied, never derived from each other.
    pub fn new(
        id: impl Into<AnnotationId>,
        image_id: impl Into<ImageId>,
        category_id: impl Into<CategoryId>,
        bbox: impl Into<Bbox>,
        area: f64,
        iscrowd: u8,
    ) -> Self {
        Self {
            id: id.into(),
            image_id: image_id.into(),
            category_id: category_id.into(),
            segmentation: Vec::new(),
            area,
            bbox: bbox.into(),
            iscrowd,
        }
    }

    /// Sets the polygon segmentation.
    pub fn with_segmentation(mut self, segmentation: Vec<Vec<f64>>) -> Self {
        self.segmentation = segmentation;
        self
    }
}

impl Annotation for ObjectDetectionAnnotation {}

impl Validate for ObjectDetectionAnnotation {
    fn collect_issues(&self, _strict: bool, report: &mut ValidationReport) {
        let context = IssueContext::Annotation {
            id: self.id.as_u64(),
        };
        check_iscrowd(self.iscrowd, context.clone(), report);
        check_area(self.area, context.clone(), report);
        check_bbox(&self.bbox, context, report);
    }
}

/// An object class with its place in the category hierarchy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectDetectionCategory {
    pub id: CategoryId,
    pub name: String,
    pub supercategory: String,
}

impl ObjectDetectionCategory {
    /// Creates a category.
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        supercategory: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            supercategory: supercategory.into(),
        }
    }
}

impl Category for ObjectDetectionCategory {}

impl Validate for ObjectDetectionCategory {
    fn collect_issues(&self, _strict: bool, report: &mut ValidationReport) {
        if self.name.is_empty() {
            report.add(ValidationIssue::warning(
                IssueCode::EmptyCategoryName,
                "empty category name",
                IssueContext::Category {
                    id: self.id.as_u64(),
                },
            ));
        }
    }
}

/// A complete object detection dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectDetectionDataset {
    #[serde(default)]
    pub info: Info,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub licenses: Vec<License>,

    pub annotations: Vec<ObjectDetectionAnnotation>,
    pub categories: Vec<ObjectDetectionCategory>,
}

impl Validate for ObjectDetectionDataset {
    fn collect_issues(&self, strict: bool, report: &mut ValidationReport) {
        self.images.collect_issues(strict, report);
        self.annotations.collect_issues(strict, report);
        self.categories.collect_issues(strict, report);
    }
}

impl CocoDataset for ObjectDetectionDataset {}
