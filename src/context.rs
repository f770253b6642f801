//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide configuration provided via context
#[derive(Clone, Copy)]
pub struct AdminContext {
    /// Mount path of the admin endpoints
    api_base: StoredValue<String>,
}

impl AdminContext {
    pub fn new(api_base: String) -> Self {
        Self {
            api_base: StoredValue::new(api_base),
        }
    }

    /// Mount path of the admin endpoints
    pub fn api_base(&self) -> String {
        self.api_base.get_value()
    }
}
