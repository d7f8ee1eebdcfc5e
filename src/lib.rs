//! Cocoset: typed COCO dataset schemas with validated JSON round-trips.
//!
//! Cocoset models the COCO (Common Objects in Context) annotation format
//! family as plain Rust structs and converts them to and from JSON text.
//! Four task variants are covered: object detection, image captioning,
//! keypoint detection, and panoptic segmentation.
//!
//! # Modules
//!
//! - [`schema`]: entity types for the common sections and the four variants
//! - [`json`]: the [`CocoJson`](json::CocoJson) round-trip trait,
//!   [`JsonOptions`](json::JsonOptions), and dataset save/load
//! - [`validation`]: constraint checks and structured issue reporting
//! - [`error`]: error types for cocoset operations
//!
//! # Example
//!
//! ```
//! use cocoset::json::{CocoDataset, CocoJson};
//! use cocoset::schema::{
//!     Image, Info, License, ObjectDetectionAnnotation, ObjectDetectionCategory,
//!     ObjectDetectionDataset,
//! };
//!
//! let dataset = ObjectDetectionDataset {
//!     info: Info { year: Some(2023), ..Default::default() },
//!     images: vec![Image::new(1u64, 640, 480, "test.jpg")],
//!     licenses: vec![License::new(1u64, "CC BY 4.0")],
//!     annotations: vec![ObjectDetectionAnnotation::new(
//!         1u64, 1u64, 1u64, (0.0, 0.0, 10.0, 10.0), 100.0, 0,
//!     )],
//!     categories: vec![ObjectDetectionCategory::new(1u64, "person", "human")],
//! };
//!
//! let json = dataset.to_json()?;
//! let restored = ObjectDetectionDataset::from_json(&json)?;
//! assert_eq!(restored, dataset);
//! # Ok::<(), cocoset::CocoError>(())
//! ```

pub mod error;
pub mod json;
pub mod schema;
pub mod validation;

pub use error::CocoError;
pub use json::{CocoDataset, CocoJson, JsonOptions};
pub use schema::{DateParseWarning, DateParseWarningKind};
pub use validation::{Validate, ValidationReport};
