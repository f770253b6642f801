//! UI Components
//!
//! Reusable Leptos components.

mod dependent_select;
mod project_select;

pub use dependent_select::{DependentSelect, EntryFuture};
pub use project_select::ProjectSelect;
