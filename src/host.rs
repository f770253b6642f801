//! Host Page Bindings
//!
//! The host admin template embeds the change form's seed data as JSON inside
//! a `<script type="application/json">` element; this module reads it. The
//! host owns the project rows and renders them server-side, so the seed is
//! how this fragment receives the same rows.

use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::api::DEFAULT_API_BASE;
use crate::models::Project;

/// DOM id of the embedded seed element
pub const SEED_ELEMENT_ID: &str = "timesheet-form-seed";

/// Form data embedded by the host template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSeed {
    /// Rows for the project (source) control
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Project value pre-selected on a change form ("" on an add form)
    #[serde(default)]
    pub selected_project: String,
    /// Mount path of the admin endpoints
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for FormSeed {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            selected_project: String::new(),
            api_base: default_api_base(),
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Read the seed embedded in `document`, falling back to the default seed
pub fn form_seed(document: &Document) -> FormSeed {
    document
        .get_element_by_id(SEED_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .map(|text| parse_seed(&text))
        .unwrap_or_default()
}

/// Parse the embedded JSON; malformed input yields the default seed
pub fn parse_seed(text: &str) -> FormSeed {
    serde_json::from_str(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_seed() {
        let seed = parse_seed(
            r#"{"projects": [{"id": 3, "name": "Tracker"}],
                "selected_project": "7",
                "api_base": "/mounted/admin"}"#,
        );
        assert_eq!(seed.projects.len(), 1);
        assert_eq!(seed.projects[0].name, "Tracker");
        assert_eq!(seed.selected_project, "7");
        assert_eq!(seed.api_base, "/mounted/admin");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let seed = parse_seed(r#"{"projects": []}"#);
        assert_eq!(seed.selected_project, "");
        assert_eq!(seed.api_base, "/admin/project");
    }

    #[test]
    fn test_malformed_seed_yields_default() {
        let seed = parse_seed("not json at all");
        assert_eq!(seed, FormSeed::default());
    }
}
