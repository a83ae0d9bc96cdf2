use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Pages reachable from the sidebar: (key, label, icon)
pub const PAGES: &[(&str, &str, &str)] = &[
    ("a001_material", "Materiales", "inventory"),
    ("a002_provider", "Proveedores", "suppliers"),
];

pub const DEFAULT_PAGE: &str = "a001_material";

pub fn is_known_page(key: &str) -> bool {
    PAGES.iter().any(|(k, _, _)| *k == key)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the page shown in the center area
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active page from `?active=...` and keep the query string in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            if is_known_page(active_key) {
                self.activate(active_key);
            } else {
                log::warn!("Unknown page in URL: {}", active_key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, key: &str) {
        log::debug!("activate page: {}", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
