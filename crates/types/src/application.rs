use crate::ids::ApplicationId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The membership category an applicant selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MembershipCategory {
    Life,
    Annual,
    Associate,
    Student,
    /// Absent or unrecognized; rendered as an empty cell.
    #[default]
    Unspecified,
}

impl MembershipCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipCategory::Life => "Life",
            MembershipCategory::Annual => "Annual",
            MembershipCategory::Associate => "Associate",
            MembershipCategory::Student => "Student",
            MembershipCategory::Unspecified => "",
        }
    }
}

impl From<String> for MembershipCategory {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "life" => MembershipCategory::Life,
            "annual" => MembershipCategory::Annual,
            "associate" => MembershipCategory::Associate,
            "student" => MembershipCategory::Student,
            _ => MembershipCategory::Unspecified,
        }
    }
}

impl From<MembershipCategory> for String {
    fn from(value: MembershipCategory) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for MembershipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted membership application.
///
/// Every scalar defaults to an empty string when the upstream payload omits
/// it; field validation belongs to the form layer, not to document rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationRecord {
    #[serde(rename = "name", alias = "fullName")]
    pub full_name: String,
    pub date_of_birth: String,
    pub qualification: String,
    pub membership_type: MembershipCategory,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub district: String,
    pub state: String,
    pub pin_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_transaction_id: Option<String>,
    pub identifier: ApplicationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<NaiveDate>,
    /// Content identifier assigned by the document store after upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

/// Raster encodings accepted for the signature upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// `image/png` selects PNG; every other declared type is treated as JPEG.
    pub fn from_mime(mime: &str) -> Self {
        if mime.trim().eq_ignore_ascii_case("image/png") {
            ImageFormat::Png
        } else {
            ImageFormat::Jpeg
        }
    }
}

/// The applicant's uploaded signature: raw bytes plus the declared MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl SignatureImage {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn format(&self) -> ImageFormat {
        ImageFormat::from_mime(&self.mime_type)
    }
}
