//! Default model selections for each supported service connector.

use serde::{Deserialize, Serialize};

/// Model names pre-selected when a new service of each kind is registered.
///
/// An empty string means "no default"; the connector asks the service for
/// its model list instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefaultsSettings {
    pub default_ollama_model: String,
    pub default_open_ai_model: String,
    #[serde(rename = "defaultOpenWebUIModel")]
    pub default_open_web_ui_model: String,
    #[serde(rename = "defaultComfyUIModel")]
    pub default_comfy_ui_model: String,
    #[serde(rename = "defaultA1111Model")]
    pub default_a1111_model: String,
    #[serde(rename = "defaultA1111Refiner")]
    pub default_a1111_refiner: String,
    pub default_anthropic_model: String,
    pub default_hugging_face_model: String,
    pub default_hugging_face_image_model: String,
}

/// Sparse user overrides for [`ServiceDefaultsSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceDefaultsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ollama_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_open_ai_model: Option<String>,
    #[serde(
        rename = "defaultOpenWebUIModel",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_open_web_ui_model: Option<String>,
    #[serde(
        rename = "defaultComfyUIModel",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_comfy_ui_model: Option<String>,
    #[serde(rename = "defaultA1111Model", skip_serializing_if = "Option::is_none")]
    pub default_a1111_model: Option<String>,
    #[serde(
        rename = "defaultA1111Refiner",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_a1111_refiner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_anthropic_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hugging_face_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hugging_face_image_model: Option<String>,
}

impl From<&ServiceDefaultsSettings> for ServiceDefaultsOverrides {
    fn from(settings: &ServiceDefaultsSettings) -> Self {
        Self {
            default_ollama_model: Some(settings.default_ollama_model.clone()),
            default_open_ai_model: Some(settings.default_open_ai_model.clone()),
            default_open_web_ui_model: Some(settings.default_open_web_ui_model.clone()),
            default_comfy_ui_model: Some(settings.default_comfy_ui_model.clone()),
            default_a1111_model: Some(settings.default_a1111_model.clone()),
            default_a1111_refiner: Some(settings.default_a1111_refiner.clone()),
            default_anthropic_model: Some(settings.default_anthropic_model.clone()),
            default_hugging_face_model: Some(settings.default_hugging_face_model.clone()),
            default_hugging_face_image_model: Some(
                settings.default_hugging_face_image_model.clone(),
            ),
        }
    }
}
