//! Structured validation results.
//!
//! Validation failures are batch-reported: every field-level issue found in
//! an entity (or in a whole dataset) lands in one report, so a single bad
//! field never hides the others. COCO files are large; seeing all problems
//! at once speeds debugging considerably.

use std::fmt;

/// The result of validating an entity or dataset.
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    /// All issues found, in discovery order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of errors in the report.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Returns the number of warnings in the report.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Returns true if there are no errors (warnings are allowed).
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "Validation passed: no issues found");
        }

        writeln!(
            f,
            "Validation completed with {} error(s) and {} warning(s):",
            self.error_count(),
            self.warning_count()
        )?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single validation issue (error or warning).
#[derive(Clone, Debug)]
pub struct ValidationIssue {
    /// The severity of the issue.
    pub severity: Severity,

    /// A stable code for the issue type.
    pub code: IssueCode,

    /// A human-readable description of the issue.
    pub message: String,

    /// Which entity the issue occurred in.
    pub context: IssueContext,
}

impl ValidationIssue {
    /// Creates a new error.
    pub fn error(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            context,
        }
    }

    /// Creates a new warning.
    pub fn warning(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            context,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        write!(
            f,
            "[{}] {:?} in {}: {}",
            severity, self.code, self.context, self.message
        )
    }
}

/// The severity of a validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Informational quality issue; never fails deserialization.
    Warning,
    /// A constraint violation; deserialization fails.
    Error,
}

/// A stable code identifying the type of validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// An `iscrowd` flag outside {0, 1}.
    IsCrowdOutOfRange,
    /// An `isthing` flag outside {0, 1}.
    IsThingOutOfRange,
    /// A negative segmentation/annotation area.
    NegativeArea,
    /// A bounding box with NaN or infinite components.
    BboxNotFinite,
    /// A keypoint list whose length is not a multiple of three (strict mode).
    KeypointsNotTriples,
    /// A keypoint visibility flag outside {0, 1, 2} (strict mode).
    KeypointVisibilityOutOfRange,
    /// An image with an empty `file_name`.
    EmptyFileName,
    /// A category with an empty `name`.
    EmptyCategoryName,
}

/// Which entity a validation issue occurred in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IssueContext {
    /// Issue with the dataset as a whole.
    Dataset,
    /// Issue with a specific image.
    Image { id: u64 },
    /// Issue with a specific annotation.
    Annotation { id: u64 },
    /// Issue with a panoptic mask annotation, which is keyed by image.
    MaskAnnotation { image_id: u64 },
    /// Issue with a specific segment inside a panoptic mask.
    Segment { id: u64 },
    /// Issue with a specific category.
    Category { id: u64 },
}

impl fmt::Display for IssueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueContext::Dataset => write!(f, "dataset"),
            IssueContext::Image { id } => write!(f, "image {}", id),
            IssueContext::Annotation { id } => write!(f, "annotation {}", id),
            IssueContext::MaskAnnotation { image_id } => {
                write!(f, "annotation for image {}", image_id)
            }
            IssueContext::Segment { id } => write!(f, "segment {}", id),
            IssueContext::Category { id } => write!(f, "category {}", id),
        }
    }
}
