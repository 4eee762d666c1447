use crate::{EditorError, Result, statics};
use serde::{Deserialize, Serialize};

/// Editor defaults. Missing fields in a JSON override fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Name given to targets created with "Add New Target".
    pub default_target_name: String,
    /// Placeholder value for styles created with "Add Style".
    pub default_style_value: String,
    pub dark_theme: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_target_name: statics::DEFAULT_TARGET_NAME.to_string(),
            default_style_value: statics::DEFAULT_STYLE_VALUE.to_string(),
            dark_theme: true,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| EditorError::Parse(e.to_string()))
    }
}
