use shared_types::{ClassId, ObjectId, UserId};
use time::OffsetDateTime;
use url::Url;

/// The single pass class of a deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassClassRef {
    pub issuer_id: String,
    pub class_suffix: String,
}

impl PassClassRef {
    pub fn class_id(&self) -> ClassId {
        format!("{}.{}", self.issuer_id, self.class_suffix).into()
    }

    /// `{issuer_id}.{sanitized user id}-{unix millis}`
    pub fn object_id(&self, user_id: &UserId, issued_at: OffsetDateTime) -> ObjectId {
        let timestamp_ms = issued_at.unix_timestamp_nanos() / 1_000_000;

        format!(
            "{}.{}-{timestamp_ms}",
            self.issuer_id,
            sanitize_id_segment(user_id.as_ref())
        )
        .into()
    }
}

/// Keeps ASCII alphanumerics, `.`, `_` and `-`, everything else becomes `_`
pub fn sanitize_id_segment(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassObjectRequest {
    pub id: ObjectId,
    pub class_id: ClassId,
    pub card_title: String,
    pub header: String,
    pub subheader: Option<String>,
    pub text_modules: Vec<TextModule>,
    pub logo: Option<ImageRef>,
    pub hero_image: Option<ImageRef>,
    pub hex_background_color: String,
    pub links: Vec<PassLink>,
    pub barcode: Barcode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextModule {
    pub id: String,
    pub header: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub uri: Url,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassLink {
    pub id: Option<String>,
    pub uri: Url,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    pub value: String,
    pub alternate_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassRecord {
    pub id: ObjectId,
    pub class_id: ClassId,
    pub state: Option<PassState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
    Active,
    Completed,
    Expired,
    Inactive,
    Unknown,
}
