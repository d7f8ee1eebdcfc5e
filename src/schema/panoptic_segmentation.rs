//! Panoptic segmentation task variant.
//!
//! Panoptic annotations reference an external PNG mask per image and carry
//! per-segment metadata. Categories distinguish countable "things" from
//! uncountable "stuff" regions.

use serde::{Deserialize, Serialize};

use super::bbox::Bbox;
use super::common::{Image, Info, License};
use super::ids::{CategoryId, ImageId, SegmentId};
use super::{Annotation, Category};
use crate::json::CocoDataset;
use crate::validation::{
    check_area, check_bbox, check_iscrowd, check_isthing, IssueCode, IssueContext, Validate,
    ValidationIssue, ValidationReport,
};

/// Metadata for one segmented region inside a panoptic mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentInfo {
    /// Segment identifier within the mask.
    pub id: SegmentId,

    pub category_id: CategoryId,

    /// Segment area in pixels. Non-negative when present.
    #[serde(default)]
    pub area: Option<f64>,

    /// Bounding box in (x, y, width, height) order.
    pub bbox: Bbox,

    /// Crowd flag, {0, 1} when present.
    #[serde(default)]
    pub iscrowd: Option<u8>,
}

impl SegmentInfo {
    /// Creates a segment with the required fields; area and iscrowd start
    /// absent.
    pub fn new(
        id: impl Into<SegmentId>,
        category_id: impl Into<CategoryId>,
        bbox: impl Into<Bbox>,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            area: None,
            bbox: bbox.into(),
            iscrowd: None,
        }
    }

    /// Sets the segment area.
    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    /// Sets the crowd flag.
    pub fn with_iscrowd(mut self, iscrowd: u8) -> Self {
        self.iscrowd = Some(iscrowd);
        self
    }
}

impl Validate for SegmentInfo {
    fn collect_issues(&self, _strict: bool, report: &mut ValidationReport) {
        let context = IssueContext::Segment {
            id: self.id.as_u64(),
        };
        if let Some(iscrowd) = self.iscrowd {
            check_iscrowd(iscrowd, context.clone(), report);
        }
        if let Some(area) = self.area {
            check_area(area, context.clone(), report);
        }
        check_bbox(&self.bbox, context, report);
    }
}

/// One image's panoptic annotation: an external mask file plus segment
/// metadata. Keyed by `image_id`; there is no annotation id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanopticSegmentationAnnotation {
    pub image_id: ImageId,

    /// Filename of the PNG segmentation mask.
    pub file_name: String,

    #[serde(default)]
    pub segments_info: Vec<SegmentInfo>,
}

impl PanopticSegmentationAnnotation {
    /// Creates an annotation with no segments.
    pub fn new(image_id: impl Into<ImageId>, file_name: impl Into<String>) -> Self {
        Self {
            image_id: image_id.into(),
            file_name: file_name.into(),
            segments_info: Vec::new(),
        }
    }

    /// Sets the segment list.
    pub fn with_segments(mut self, segments_info: Vec<SegmentInfo>) -> Self {
        self.segments_info = segments_info;
        self
    }
}

impl Annotation for PanopticSegmentationAnnotation {}

impl Validate for PanopticSegmentationAnnotation {
    fn collect_issues(&self, strict: bool, report: &mut ValidationReport) {
        if self.file_name.is_empty() {
            report.add(ValidationIssue::warning(
                IssueCode::EmptyFileName,
                "empty mask file_name",
                IssueContext::MaskAnnotation {
                    image_id: self.image_id.as_u64(),
                },
            ));
        }
        self.segments_info.collect_issues(strict, report);
    }
}

/// A category with the thing/stuff distinction and a visualization color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanopticSegmentationCategory {
    pub id: CategoryId,
    pub name: String,

    #[serde(default)]
    pub supercategory: Option<String>,

    /// 1 for things (countable instances), 0 for stuff (uncountable
    /// regions such as sky or grass).
    pub isthing: u8,

    /// RGB visualization color.
    pub color: [u8; 3],
}

impl PanopticSegmentationCategory {
    /// Creates a category without a supercategory.
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        isthing: u8,
        color: [u8; 3],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            supercategory: None,
            isthing,
            color,
        }
    }

    /// Sets the supercategory.
    pub fn with_supercategory(mut self, supercategory: impl Into<String>) -> Self {
        self.supercategory = Some(supercategory.into());
        self
    }
}

impl Category for PanopticSegmentationCategory {}

impl Validate for PanopticSegmentationCategory {
    fn collect_issues(&self, _strict: bool, report: &mut ValidationReport) {
        let context = IssueContext::Category {
            id: self.id.as_u64(),
        };
        check_isthing(self.isthing, context.clone(), report);
        if self.name.is_empty() {
            report.add(ValidationIssue::warning(
                IssueCode::EmptyCategoryName,
                "empty category name",
                context,
            ));
        }
    }
}

/// A complete panoptic segmentation dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PanopticSegmentationDataset {
    #[serde(default)]
    pub info: Info,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub licenses: Vec<License>,

    pub annotations: Vec<PanopticSegmentationAnnotation>,
    pub categories: Vec<PanopticSegmentationCategory>,
}

impl Validate for PanopticSegmentationDataset {
    fn collect_issues(&self, strict: bool, report: &mut ValidationReport) {
        self.images.collect_issues(strict, report);
        self.annotations.collect_issues(strict, report);
        self.categories.collect_issues(strict, report);
    }
}

impl CocoDataset for PanopticSegmentationDataset {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::CocoJson;

    fn sample_annotation() -> PanopticSegmentationAnnotation {
        PanopticSegmentationAnnotation::new(1u64, "mask_001.png").with_segments(vec![
            SegmentInfo::new(1u64, 1u64, (50.0, 50.0, 100.0, 50.0))
                .with_area(5000.0)
                .with_iscrowd(0),
            SegmentInfo::new(2u64, 2u64, (200.0, 200.0, 50.0, 60.0)),
        ])
    }

    #[test]
    fn test_annotation_roundtrip() {
        let annotation = sample_annotation();
        let json = annotation.to_json().unwrap();
        let back = PanopticSegmentationAnnotation::from_json(&json).unwrap();
        assert_eq!(back, annotation);
    }

    #[test]
    fn test_segments_info_defaults_to_empty() {
        let annotation = PanopticSegmentationAnnotation::from_json(
            r#"{"image_id": 1, "file_name": "mask.png"}"#,
        )
        .unwrap();
        assert!(annotation.segments_info.is_empty());
    }

    #[test]
    fn test_optional_segment_fields_are_omitted() {
        let segment = SegmentInfo::new(1u64, 1u64, (0.0, 0.0, 10.0, 10.0));
        let json = segment.to_json().unwrap();
        assert!(!json.contains("area"));
        assert!(!json.contains("iscrowd"));
    }

    #[test]
    fn test_isthing_out_of_range_fails_deserialization() {
        let json = r#"{"id": 1, "name": "person", "isthing": 2, "color": [220, 20, 60]}"#;
        let err = PanopticSegmentationCategory::from_json(json).unwrap_err();
        assert!(err.to_string().contains("1 error"), "error: {err}");
    }

    #[test]
    fn test_category_color_roundtrip() {
        let category =
            PanopticSegmentationCategory::new(1u64, "person", 1, [220, 20, 60])
                .with_supercategory("human");
        let json = category.to_json().unwrap();
        assert!(json.contains("[220,20,60]"), "json: {json}");

        let back = PanopticSegmentationCategory::from_json(&json).unwrap();
        assert_eq!(back, category);
    }

    #[test]
    fn test_segment_iscrowd_constraint() {
        let segment = SegmentInfo::new(1u64, 1u64, (0.0, 0.0, 1.0, 1.0)).with_iscrowd(2);
        let report = segment.validate(false);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_dataset_roundtrip() {
        let dataset = PanopticSegmentationDataset {
            images: vec![Image::new(1u64, 640, 480, "test.jpg")],
            annotations: vec![sample_annotation()],
            categories: vec![
                PanopticSegmentationCategory::new(1u64, "person", 1, [220, 20, 60]),
                PanopticSegmentationCategory::new(2u64, "sky", 0, [70, 130, 180]),
            ],
            ..Default::default()
        };

        let json = dataset.to_json().unwrap();
        let back = PanopticSegmentationDataset::from_json(&json).unwrap();
        assert_eq!(back, dataset);
    }
}
