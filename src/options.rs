//! Option List Building
//!
//! Pure helpers that compute a dependent select's option set. The list is
//! always rebuilt from scratch on every refresh, never patched in place.

use crate::models::{TaskRecord, TeamMember};

/// Placeholder label shown when nothing is selected or loaded
pub const NO_SELECTION_LABEL: &str = "---------";

/// Placeholder label shown while a fetch is outstanding
pub const LOADING_LABEL: &str = "Loading...";

/// A single `<option>` in a select control
#[derive(Debug, Clone, PartialEq)]
pub struct SelectEntry {
    pub label: String,
    pub value: String,
}

impl SelectEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl From<TaskRecord> for SelectEntry {
    fn from(task: TaskRecord) -> Self {
        Self::new(task.title, task.id.to_string())
    }
}

impl From<TeamMember> for SelectEntry {
    fn from(member: TeamMember) -> Self {
        Self::new(member.username, member.id.to_string())
    }
}

/// Option set for the no-selection / empty state
pub fn idle() -> Vec<SelectEntry> {
    vec![SelectEntry::new(NO_SELECTION_LABEL, "")]
}

/// Option set shown while the scoped entries are being fetched
pub fn loading() -> Vec<SelectEntry> {
    vec![SelectEntry::new(LOADING_LABEL, "")]
}

/// Option set for fetched entries: the no-selection placeholder followed by
/// the entries in arrival order
pub fn loaded(entries: Vec<SelectEntry>) -> Vec<SelectEntry> {
    let mut options = idle();
    options.extend(entries);
    options
}

/// What a dependent select should do for a source value
#[derive(Debug, Clone, PartialEq)]
pub enum Refresh {
    /// No selection: show the idle placeholder, skip the fetch
    Reset,
    /// Fetch entries scoped to this value, showing the loading placeholder
    /// in the meantime
    Load(String),
}

/// Decide the refresh action for the current source value
pub fn plan_refresh(source: &str) -> Refresh {
    if source.is_empty() {
        Refresh::Reset
    } else {
        Refresh::Load(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_single_placeholder() {
        let options = idle();
        assert_eq!(options, vec![SelectEntry::new("---------", "")]);
    }

    #[test]
    fn test_loading_is_single_placeholder() {
        let options = loading();
        assert_eq!(options, vec![SelectEntry::new("Loading...", "")]);
    }

    #[test]
    fn test_empty_source_resets_without_fetch() {
        assert_eq!(plan_refresh(""), Refresh::Reset);
    }

    #[test]
    fn test_selected_source_loads_scoped_entries() {
        assert_eq!(plan_refresh("3"), Refresh::Load("3".to_string()));
    }

    #[test]
    fn test_loaded_prepends_placeholder_and_keeps_order() {
        let tasks: Vec<TaskRecord> = serde_json::from_str(
            r#"[{"id": 11, "title": "Design doc"}, {"id": 12, "title": "Implementation"}]"#,
        )
        .unwrap();

        let options = loaded(tasks.into_iter().map(SelectEntry::from).collect());

        assert_eq!(options.len(), 3);
        assert_eq!(options[0], SelectEntry::new("---------", ""));
        assert_eq!(options[1], SelectEntry::new("Design doc", "11"));
        assert_eq!(options[2], SelectEntry::new("Implementation", "12"));
    }

    #[test]
    fn test_rebuild_from_same_records_is_identical() {
        let records = || {
            vec![
                SelectEntry::new("Design doc", "11"),
                SelectEntry::new("Implementation", "12"),
            ]
        };
        assert_eq!(loaded(records()), loaded(records()));
    }

    #[test]
    fn test_team_member_projection() {
        let member = TeamMember {
            id: 4,
            username: "asha".to_string(),
        };
        assert_eq!(SelectEntry::from(member), SelectEntry::new("asha", "4"));
    }
}
