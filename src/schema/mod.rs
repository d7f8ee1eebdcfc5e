//! Typed COCO entities for the four task variants.
//!
//! The common entities (`Info`, `Image`, `License`) are shared by every
//! variant; each task module defines its own annotation, category (where the
//! task has one), and dataset types.
//!
//! # Design Principles
//!
//! 1. **Permissive construction**: entities can represent "invalid" data
//!    (negative areas, out-of-range flags); validation reports issues at
//!    deserialization time rather than panicking in constructors.
//!
//! 2. **Caller-owned IDs and order**: IDs are never generated or
//!    deduplicated, lists keep their order, and cross-references between
//!    entities are not checked.
//!
//! 3. **Composition over inheritance**: the keypoint types embed their
//!    object detection counterparts behind `#[serde(flatten)]` instead of
//!    relying on subtype polymorphism.

mod bbox;
mod common;
mod datetime;
mod ids;

pub mod image_captioning;
pub mod keypoint_detection;
pub mod object_detection;
pub mod panoptic_segmentation;

pub use bbox::Bbox;
pub use common::{Image, Info, License};
pub use datetime::{
    parse_datetime, parse_datetime_str, DateParseWarning, DateParseWarningKind,
    DATE_CAPTURED_FORMAT, DATE_CREATED_FORMAT,
};
pub use ids::{AnnotationId, CategoryId, ImageId, LicenseId, SegmentId};

pub use image_captioning::{ImageCaptioningAnnotation, ImageCaptioningDataset};
pub use keypoint_detection::{
    KeypointDetectionAnnotation, KeypointDetectionCategory, KeypointDetectionDataset,
};
pub use object_detection::{
    ObjectDetectionAnnotation, ObjectDetectionCategory, ObjectDetectionDataset,
};
pub use panoptic_segmentation::{
    PanopticSegmentationAnnotation, PanopticSegmentationCategory, PanopticSegmentationDataset,
    SegmentInfo,
};

/// Marker for annotation types, one per task variant.
///
/// Carries no behavior; exists so generic code can bound over "some COCO
/// annotation" while each variant keeps its own field set.
pub trait Annotation {}

/// Marker for category types. See [`Annotation`].
pub trait Category {}
