use one_dto_mapper::From;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use shared_types::{ClassId, ObjectId};
use url::Url;

use crate::model::pass::{
    Barcode, ImageRef, PassLink, PassObjectRequest, PassRecord, PassState, TextModule,
};

const DEFAULT_LANGUAGE: &str = "en-US";

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenericObjectRequestRestDTO {
    pub id: ObjectId,
    pub class_id: ClassId,
    pub state: PassStateRestEnum,
    pub card_title: LocalizedStringRestDTO,
    pub header: LocalizedStringRestDTO,
    pub subheader: Option<LocalizedStringRestDTO>,
    pub text_modules_data: Vec<TextModuleDataRestDTO>,
    pub logo: Option<ImageRestDTO>,
    pub hero_image: Option<ImageRestDTO>,
    pub hex_background_color: String,
    pub links_module_data: Option<LinksModuleDataRestDTO>,
    pub barcode: BarcodeRestDTO,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenericObjectResponseRestDTO {
    pub id: ObjectId,
    pub class_id: ClassId,
    pub state: Option<PassStateRestEnum>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(super) enum PassStateRestEnum {
    Active,
    Completed,
    Expired,
    Inactive,
    #[serde(other)]
    StateUnspecified,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LocalizedStringRestDTO {
    pub default_value: TranslatedStringRestDTO,
}

#[derive(Clone, Debug, Serialize)]
pub(super) struct TranslatedStringRestDTO {
    pub language: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(TextModule)]
pub(super) struct TextModuleDataRestDTO {
    pub id: String,
    pub header: String,
    pub body: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ImageRestDTO {
    pub source_uri: ImageUriRestDTO,
    pub content_description: Option<LocalizedStringRestDTO>,
}

#[derive(Clone, Debug, Serialize)]
pub(super) struct ImageUriRestDTO {
    pub uri: Url,
}

#[derive(Clone, Debug, Serialize)]
pub(super) struct LinksModuleDataRestDTO {
    pub uris: Vec<UriRestDTO>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, From)]
#[from(PassLink)]
pub(super) struct UriRestDTO {
    pub id: Option<String>,
    pub uri: Url,
    pub description: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BarcodeRestDTO {
    pub r#type: &'static str,
    pub value: String,
    pub alternate_text: Option<String>,
}

/// Error envelope of Google APIs
#[derive(Clone, Debug, Deserialize)]
pub(super) struct GoogleErrorResponseRestDTO {
    pub error: GoogleErrorRestDTO,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct GoogleErrorRestDTO {
    pub message: Option<String>,
    pub status: Option<String>,
}

impl From<String> for LocalizedStringRestDTO {
    fn from(value: String) -> Self {
        Self {
            default_value: TranslatedStringRestDTO {
                language: DEFAULT_LANGUAGE,
                value,
            },
        }
    }
}

impl From<ImageRef> for ImageRestDTO {
    fn from(value: ImageRef) -> Self {
        Self {
            source_uri: ImageUriRestDTO { uri: value.uri },
            content_description: value.description.map(Into::into),
        }
    }
}

impl From<Barcode> for BarcodeRestDTO {
    fn from(value: Barcode) -> Self {
        Self {
            r#type: "QR_CODE",
            value: value.value,
            alternate_text: value.alternate_text,
        }
    }
}

impl From<PassObjectRequest> for GenericObjectRequestRestDTO {
    fn from(value: PassObjectRequest) -> Self {
        let links_module_data = (!value.links.is_empty()).then(|| LinksModuleDataRestDTO {
            uris: value.links.into_iter().map(Into::into).collect(),
        });

        Self {
            id: value.id,
            class_id: value.class_id,
            state: PassStateRestEnum::Active,
            card_title: value.card_title.into(),
            header: value.header.into(),
            subheader: value.subheader.map(Into::into),
            text_modules_data: value.text_modules.into_iter().map(Into::into).collect(),
            logo: value.logo.map(Into::into),
            hero_image: value.hero_image.map(Into::into),
            hex_background_color: value.hex_background_color,
            links_module_data,
            barcode: value.barcode.into(),
        }
    }
}

impl From<PassStateRestEnum> for PassState {
    fn from(value: PassStateRestEnum) -> Self {
        match value {
            PassStateRestEnum::Active => Self::Active,
            PassStateRestEnum::Completed => Self::Completed,
            PassStateRestEnum::Expired => Self::Expired,
            PassStateRestEnum::Inactive => Self::Inactive,
            PassStateRestEnum::StateUnspecified => Self::Unknown,
        }
    }
}

impl From<GenericObjectResponseRestDTO> for PassRecord {
    fn from(value: GenericObjectResponseRestDTO) -> Self {
        Self {
            id: value.id,
            class_id: value.class_id,
            state: value.state.map(Into::into),
        }
    }
}
