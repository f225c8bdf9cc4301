//! Filter options: selectors and attribute names the widget looks for, plus
//! menu styling and the "view all" fragment behavior.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::menu::ResetFragment;

/// All knobs of a catalog filter. Every field has a default, so a JSON file
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterOptions {
    /// Rows to index.
    pub row_selector: String,
    /// Element holding the visible rows; the first match is used.
    pub container_selector: String,
    /// Optional caption element.
    pub caption_selector: String,
    /// Row attribute carrying the comma-separated subject list.
    pub subject_attribute: String,
    /// Tag of the element whose text is the entry name.
    pub link_tag: String,
    /// Default mount point for both menus.
    pub menu_selector: String,
    pub letter_menu_class: Option<String>,
    pub subject_menu_class: Option<String>,
    pub reset_fragment: ResetFragment,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            row_selector: ".dbaz".to_string(),
            container_selector: "tbody".to_string(),
            caption_selector: "table caption".to_string(),
            subject_attribute: "data-subject".to_string(),
            link_tag: "a".to_string(),
            menu_selector: ".dbaz-menu".to_string(),
            letter_menu_class: None,
            subject_menu_class: None,
            reset_fragment: ResetFragment::Marker,
        }
    }
}

impl FilterOptions {
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Load options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_err = |source: Box<dyn std::error::Error + Send + Sync>| FilterError::Config {
            path: path.as_std_path().to_path_buf(),
            source,
        };
        let text = std::fs::read_to_string(path).map_err(|e| config_err(Box::new(e)))?;
        Self::from_json_str(&text).map_err(|e| config_err(Box::new(e)))
    }
}
