use shared_types::ObjectId;

use crate::config::core_config::PassTemplateConfig;
use crate::model::pass::{Barcode, ImageRef, PassClassRef, PassLink, PassObjectRequest, TextModule};
use crate::model::profile::Profile;

pub(super) fn pass_object_request(
    object_id: ObjectId,
    class: &PassClassRef,
    profile: &Profile,
    template: &PassTemplateConfig,
) -> PassObjectRequest {
    let profile_modules = [
        TextModule {
            id: "email".to_owned(),
            header: "Email".to_owned(),
            body: profile.email.clone(),
        },
        TextModule {
            id: "role".to_owned(),
            header: "Role".to_owned(),
            body: profile.role.label().to_owned(),
        },
    ];

    let configured_modules = template.text_modules.iter().map(|module| TextModule {
        id: module.id.clone(),
        header: module.header.clone(),
        body: module.body.clone(),
    });

    PassObjectRequest {
        id: object_id,
        class_id: class.class_id(),
        card_title: template.card_title.clone(),
        header: profile.display_name.clone(),
        subheader: Some(profile.role.label().to_owned()),
        text_modules: profile_modules.into_iter().chain(configured_modules).collect(),
        logo: template.logo_uri.clone().map(|uri| ImageRef {
            uri,
            description: Some(template.card_title.clone()),
        }),
        hero_image: template.hero_image_uri.clone().map(|uri| ImageRef {
            uri,
            description: None,
        }),
        hex_background_color: template.hex_background_color.clone(),
        links: template
            .links
            .iter()
            .map(|link| PassLink {
                id: link.id.clone(),
                uri: link.uri.clone(),
                description: link.description.clone(),
            })
            .collect(),
        barcode: Barcode {
            value: profile.id.to_string(),
            alternate_text: Some(profile.display_name.clone()),
        },
    }
}
