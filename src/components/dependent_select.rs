//! Dependent Select Component
//!
//! A select control whose options track the value of a source control.
//! Whenever the source value changes, the option set is rebuilt from the
//! backing endpoint, scoped to that value. The source arrives as a signal
//! and the endpoint as a fetch function, so the component never has to find
//! its collaborators in the page.

use std::future::Future;
use std::pin::Pin;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::options::{self, Refresh, SelectEntry};

/// Future returned by a dependent select's fetch function
pub type EntryFuture = Pin<Box<dyn Future<Output = Result<Vec<SelectEntry>, String>>>>;

/// Select control repopulated from a fetch whenever its source changes
///
/// The option set always holds exactly one placeholder first: "Loading..."
/// while a fetch is outstanding, "---------" otherwise. Fetched entries are
/// appended behind it in arrival order. A failed fetch falls back to the
/// no-selection placeholder rather than leaving the loading state on screen.
#[component]
pub fn DependentSelect(
    /// Live value of the source control ("" = no selection)
    #[prop(into)] source: Signal<String>,
    /// Loads the entries scoped to a source value
    fetch: impl Fn(String) -> EntryFuture + Copy + 'static,
    /// Called with the newly selected value
    #[prop(into)] on_change: Callback<String>,
    /// DOM id for the rendered select
    #[prop(optional, into)] id: Option<&'static str>,
) -> impl IntoView {
    let (entries, set_entries) = signal(options::idle());

    // Ticket held by the most recent refresh; a completion carrying an older
    // ticket is stale and must not touch the option list.
    let latest = StoredValue::new(0u64);

    // Runs once on mount (covers a pre-filled source) and again on every
    // source change.
    Effect::new(move |_| {
        latest.update_value(|ticket| *ticket += 1);

        match options::plan_refresh(&source.get()) {
            Refresh::Reset => {
                set_entries.set(options::idle());
            }
            Refresh::Load(value) => {
                let ticket = latest.get_value();
                set_entries.set(options::loading());

                spawn_local(async move {
                    let result = fetch(value).await;
                    if latest.get_value() != ticket {
                        return;
                    }
                    match result {
                        Ok(loaded) => set_entries.set(options::loaded(loaded)),
                        Err(err) => {
                            web_sys::console::log_1(
                                &format!("[SELECT] load failed: {}", err).into(),
                            );
                            set_entries.set(options::idle());
                        }
                    }
                });
            }
        }
    });

    view! {
        <select
            id=id
            class="dependent-select"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {move || {
                entries
                    .get()
                    .into_iter()
                    .map(|entry| view! { <option value=entry.value>{entry.label}</option> })
                    .collect_view()
            }}
        </select>
    }
}
