//! Timesheet Form App
//!
//! The change-form fragment: a project select driving the task and assignee
//! selects, each repopulated from the admin's JSON endpoints.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::components::{DependentSelect, EntryFuture, ProjectSelect};
use crate::context::AdminContext;
use crate::host;
use crate::options::SelectEntry;
use crate::store::{
    store_set_assignee, store_set_task, FormState, FormStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let seed = web_sys::window()
        .and_then(|window| window.document())
        .map(|document| host::form_seed(&document))
        .unwrap_or_default();

    let ctx = AdminContext::new(seed.api_base.clone());
    provide_context(ctx);

    let store = Store::new(FormState::from_seed(seed));
    provide_context(store);

    let project_id = Signal::derive(move || store.project_id().get());

    let fetch_tasks = move |project: String| -> EntryFuture {
        Box::pin(async move {
            let base = ctx.api_base();
            api::list_tasks_for_project(&base, &project)
                .await
                .map(|tasks| tasks.into_iter().map(SelectEntry::from).collect())
        })
    };

    let fetch_team = move |project: String| -> EntryFuture {
        Box::pin(async move {
            let base = ctx.api_base();
            api::list_team_members_for_project(&base, &project)
                .await
                .map(|members| members.into_iter().map(SelectEntry::from).collect())
        })
    };

    view! {
        <div class="timesheet-form">
            <div class="form-row">
                <label for="id_project">"Project:"</label>
                <ProjectSelect />
            </div>

            <div class="form-row">
                <label for="id_task">"Task:"</label>
                <DependentSelect
                    source=project_id
                    fetch=fetch_tasks
                    on_change=move |value: String| store_set_task(&store, value)
                    id="id_task"
                />
            </div>

            <div class="form-row">
                <label for="id_assigned_to">"Assigned to:"</label>
                <DependentSelect
                    source=project_id
                    fetch=fetch_team
                    on_change=move |value: String| store_set_assignee(&store, value)
                    id="id_assigned_to"
                />
            </div>
        </div>
    }
}
