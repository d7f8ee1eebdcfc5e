//! Entities shared by every COCO task variant: `Info`, `Image`, `License`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::datetime;
use super::ids::{ImageId, LicenseId};
use crate::validation::{IssueCode, IssueContext, Validate, ValidationIssue, ValidationReport};

/// Dataset-wide metadata. Every field is optional; an empty `Info` is valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub contributor: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    /// Creation date. Parses permissively, serializes as `YYYY/MM/DD`.
    #[serde(
        default,
        deserialize_with = "datetime::deserialize_flexible",
        serialize_with = "datetime::serialize_date"
    )]
    pub date_created: Option<NaiveDateTime>,
}

impl Info {
    /// Creates an empty `Info`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validate for Info {
    fn collect_issues(&self, _strict: bool, _report: &mut ValidationReport) {
        // No constraints beyond field types.
    }
}

/// Metadata for one image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Unique within the dataset's image list; caller-assigned.
    pub id: ImageId,

    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Image filename.
    pub file_name: String,

    /// ID of the license this image is distributed under.
    #[serde(default)]
    pub license: Option<LicenseId>,

    #[serde(default)]
    pub flickr_url: Option<String>,

    #[serde(default)]
    pub coco_url: Option<String>,

    /// Capture time. Parses permissively, serializes as
    /// `YYYY-MM-DD HH:MM:SS`.
    #[serde(
        default,
        deserialize_with = "datetime::deserialize_flexible",
        serialize_with = "datetime::serialize_datetime"
    )]
    pub date_captured: Option<NaiveDateTime>,
}

impl Image {
    /// Creates a new image with the required fields; optional fields start
    /// absent.
    pub fn new(id: impl Into<ImageId>, width: u32, height: u32, file_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            file_name: file_name.into(),
            license: None,
            flickr_url: None,
            coco_url: None,
            date_captured: None,
        }
    }

    /// Sets the license ID.
    pub fn with_license(mut self, license: impl Into<LicenseId>) -> Self {
        self.license = Some(license.into());
        self
    }

    /// Sets the capture time.
    pub fn with_date_captured(mut self, date_captured: NaiveDateTime) -> Self {
        self.date_captured = Some(date_captured);
        self
    }
}

impl Validate for Image {
    fn collect_issues(&self, _strict: bool, report: &mut ValidationReport) {
        if self.file_name.is_empty() {
            report.add(ValidationIssue::warning(
                IssueCode::EmptyFileName,
                "empty file_name",
                IssueContext::Image {
                    id: self.id.as_u64(),
                },
            ));
        }
    }
}

/// A license images can be distributed under.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// Unique within the dataset's license list; caller-assigned.
    pub id: LicenseId,

    /// License name, e.g. "CC BY 4.0".
    pub name: String,

    /// URL with the full license text.
    #[serde(default)]
    pub url: Option<String>,
}

impl License {
    /// Creates a new license without a URL.
    pub fn new(id: impl Into<LicenseId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: None,
        }
    }

    /// Sets the license URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl Validate for License {
    fn collect_issues(&self, _strict: bool, _report: &mut ValidationReport) {
        // No constraints beyond field types.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::CocoJson;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_info_is_valid() {
        let info: Info = serde_json::from_str("{}").unwrap();
        assert_eq!(info, Info::default());
        assert!(info.validate(false).is_clean());
    }

    #[test]
    fn test_info_date_created_canonical_output() {
        let info = Info {
            date_created: NaiveDate::from_ymd_opt(2023, 1, 15)
                .map(|d| d.and_hms_opt(0, 0, 0).unwrap()),
            ..Default::default()
        };
        let json = info.to_json().unwrap();
        assert!(json.contains("2023/01/15"), "json: {json}");
    }

    #[test]
    fn test_image_date_captured_canonical_output() {
        let image = Image::new(1u64, 640, 480, "test.jpg").with_date_captured(
            NaiveDate::from_ymd_opt(2023, 6, 15)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        );
        let json = image.to_json().unwrap();
        assert!(json.contains("2023-06-15 14:30:00"), "json: {json}");
    }

    #[test]
    fn test_image_missing_required_field_names_it() {
        let err = Image::from_json(r#"{"width": 640, "height": 480, "file_name": "a.jpg"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("id"), "error: {err}");
    }

    #[test]
    fn test_image_unknown_fields_are_ignored() {
        let image = Image::from_json(
            r#"{"id": 1, "width": 640, "height": 480, "file_name": "a.jpg", "extra": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(image.id, ImageId(1));
    }

    #[test]
    fn test_malformed_date_resolves_to_absent() {
        let info = Info::from_json(r#"{"date_created": "not a valid date"}"#).unwrap();
        assert_eq!(info.date_created, None);

        let image = Image::from_json(
            r#"{"id": 1, "width": 640, "height": 480, "file_name": "a.jpg", "date_captured": true}"#,
        )
        .unwrap();
        assert_eq!(image.date_captured, None);
    }

    #[test]
    fn test_license_optional_url_roundtrip() {
        let license = License::new(1u64, "CC BY 4.0");
        let json = license.to_json().unwrap();
        assert!(!json.contains("url"));

        let back = License::from_json(&json).unwrap();
        assert_eq!(back, license);
    }
}
