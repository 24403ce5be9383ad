use crate::error::{Result, ViewerError};
use serde::Deserialize;

/// Resource locations and DOM hooks for one viewer instance.
///
/// Defaults match the stock host page. A page may embed a JSON object with
/// any subset of these fields, and query-string keys override individual
/// resource locations.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub cloud_url: String,
    pub cameras_url: String,
    /// Prefix joined to each record's `image` to build the overlay source.
    pub image_prefix: String,
    pub container_id: String,
    pub loading_id: String,
    pub loading_text_selector: String,
    pub next_button_id: String,
    pub reset_button_id: String,
    pub overlay_id: String,
    pub overlay_image_id: String,
    pub overlay_visible_class: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            cloud_url: "final_point_cloud.ply".to_string(),
            cameras_url: "cameras.json".to_string(),
            image_prefix: String::new(),
            container_id: "canvas-container".to_string(),
            loading_id: "loading".to_string(),
            loading_text_selector: "#loading .loading-text".to_string(),
            next_button_id: "next-view".to_string(),
            reset_button_id: "reset-view".to_string(),
            overlay_id: "image-overlay".to_string(),
            overlay_image_id: "overlay-image".to_string(),
            overlay_visible_class: "visible".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ViewerError::Config(e.to_string()))
    }

    /// Apply `cloud`, `cameras` and `images` overrides; unknown keys and empty values are ignored.
    pub fn with_overrides<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            let value: String = value.into();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "cloud" => self.cloud_url = value,
                "cameras" => self.cameras_url = value,
                "images" => self.image_prefix = value,
                other => log::debug!("[config] ignoring override '{}'", other),
            }
        }
        self
    }

    pub fn image_url(&self, image: &str) -> String {
        if self.image_prefix.is_empty() {
            return image.to_string();
        }
        if self.image_prefix.ends_with('/') {
            format!("{}{}", self.image_prefix, image)
        } else {
            format!("{}/{}", self.image_prefix, image)
        }
    }
}
