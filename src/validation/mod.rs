//! Constraint validation for COCO entities.
//!
//! Every entity validates its own required numeric constraints (e.g.
//! `iscrowd` in {0, 1}) eagerly at deserialization time, not lazily.
//! Dataset variants delegate to every contained annotation and category and
//! collect all issues before returning.
//!
//! Cross-references between entities (an annotation's `image_id` matching an
//! existing image, license IDs resolving, and so on) are out of scope here.

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use crate::schema::Bbox;

/// Per-entity constraint validation.
///
/// `strict` additionally enables the keypoint-shape checks: triple grouping
/// of (x, y, visibility) and visibility flags limited to {0, 1, 2}.
pub trait Validate {
    /// Appends this entity's issues to an existing report.
    fn collect_issues(&self, strict: bool, report: &mut ValidationReport);

    /// Validates this entity into a fresh report.
    fn validate(&self, strict: bool) -> ValidationReport {
        let mut report = ValidationReport::new();
        self.collect_issues(strict, &mut report);
        report
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn collect_issues(&self, strict: bool, report: &mut ValidationReport) {
        for item in self {
            item.collect_issues(strict, report);
        }
    }
}

pub(crate) fn check_iscrowd(iscrowd: u8, context: IssueContext, report: &mut ValidationReport) {
    if iscrowd > 1 {
        report.add(ValidationIssue::error(
            IssueCode::IsCrowdOutOfRange,
            format!("iscrowd must be 0 or 1, got {}", iscrowd),
            context,
        ));
    }
}

pub(crate) fn check_isthing(isthing: u8, context: IssueContext, report: &mut ValidationReport) {
    if isthing > 1 {
        report.add(ValidationIssue::error(
            IssueCode::IsThingOutOfRange,
            format!("isthing must be 0 or 1, got {}", isthing),
            context,
        ));
    }
}

pub(crate) fn check_area(area: f64, context: IssueContext, report: &mut ValidationReport) {
    if area < 0.0 {
        report.add(ValidationIssue::error(
            IssueCode::NegativeArea,
            format!("area must be non-negative, got {}", area),
            context,
        ));
    }
}

pub(crate) fn check_bbox(bbox: &Bbox, context: IssueContext, report: &mut ValidationReport) {
    if !bbox.is_finite() {
        report.add(ValidationIssue::warning(
            IssueCode::BboxNotFinite,
            format!(
                "non-finite bbox components ({}, {}, {}, {})",
                bbox.x(),
                bbox.y(),
                bbox.width(),
                bbox.height()
            ),
            context,
        ));
    }
}

/// Strict-mode keypoint shape checks: length must be a multiple of three and
/// every third element (the visibility flag) must be 0, 1, or 2.
pub(crate) fn check_keypoints(
    keypoints: &[f64],
    context: IssueContext,
    report: &mut ValidationReport,
) {
    if keypoints.len() % 3 != 0 {
        report.add(ValidationIssue::error(
            IssueCode::KeypointsNotTriples,
            format!(
                "keypoints must be (x, y, visibility) triples, got {} values",
                keypoints.len()
            ),
            context.clone(),
        ));
    }

    for (index, triple) in keypoints.chunks_exact(3).enumerate() {
        let visibility = triple[2];
        if visibility != 0.0 && visibility != 1.0 && visibility != 2.0 {
            report.add(ValidationIssue::error(
                IssueCode::KeypointVisibilityOutOfRange,
                format!(
                    "keypoint {} visibility must be 0, 1, or 2, got {}",
                    index, visibility
                ),
                context.clone(),
            ));
        }
    }
}
