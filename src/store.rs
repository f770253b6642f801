//! Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::host::FormSeed;
use crate::models::Project;

/// Change-form state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    /// Projects available in the source control
    pub projects: Vec<Project>,
    /// Selected project value ("" = no selection)
    pub project_id: String,
    /// Selected task value
    pub task_id: String,
    /// Selected assignee value
    pub assignee_id: String,
}

impl FormState {
    pub fn from_seed(seed: FormSeed) -> Self {
        Self {
            projects: seed.projects,
            project_id: seed.selected_project,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record a new project selection
pub fn store_set_project(store: &FormStore, value: String) {
    *store.project_id().write() = value;
}

/// Record a new task selection
pub fn store_set_task(store: &FormStore, value: String) {
    *store.task_id().write() = value;
}

/// Record a new assignee selection
pub fn store_set_assignee(store: &FormStore, value: String) {
    *store.assignee_id().write() = value;
}
