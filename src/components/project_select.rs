//! Project Select Component
//!
//! The source control: renders the host-provided project rows behind a
//! no-selection placeholder and records value changes in the form store.

use leptos::prelude::*;

use crate::options::NO_SELECTION_LABEL;
use crate::store::{store_set_project, use_form_store, FormStateStoreFields};

/// Select control listing the form's projects
#[component]
pub fn ProjectSelect() -> impl IntoView {
    let store = use_form_store();

    view! {
        <select
            id="id_project"
            class="project-select"
            prop:value=move || store.project_id().get()
            on:change=move |ev| store_set_project(&store, event_target_value(&ev))
        >
            <option value="">{NO_SELECTION_LABEL}</option>
            <For
                each=move || store.projects().get()
                key=|project| project.id
                children=move |project| {
                    view! { <option value=project.id.to_string()>{project.name.clone()}</option> }
                }
            />
        </select>
    }
}
