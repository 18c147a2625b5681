use contracts::system::roles::Role;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::registry::{required_capability, FORBIDDEN_KEY, HOME_KEY};
use crate::layout::tabs::tab_label_for_key;

/// Open tabs, the active tab and sidebar visibility. Tab opening is gated by
/// the signed-in role.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    reloads: RwSignal<HashMap<String, u32>>,
    role: Signal<Role>,
}

impl AppGlobalContext {
    pub fn new(role: Signal<Role>) -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            reloads: RwSignal::new(HashMap::new()),
            role,
        }
    }

    /// Restore the tab named by `?active=` and keep the query string in sync
    /// with the active tab afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let role = self.role.get_untracked();
        let key = initial_tab_key(role, params.get("active").map(String::as_str));
        self.open_tab(key, &tab_label_for_key(key));

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let query_string =
                    serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                        .unwrap_or_default();
                let new_url = format!("?{}", query_string);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                if current_search != new_url {
                    if let Some(history) = window().and_then(|w| w.history().ok()) {
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

    /// Open (or focus) `key`. A key the current role may not open is
    /// replaced by the access-denied tab.
    pub fn open_tab(&self, key: &str, title: &str) {
        let role = self.role.get_untracked();
        if !role.can(required_capability(key)) {
            log::warn!("Role {} may not open tab '{}'", role, key);
            self.push_tab(FORBIDDEN_KEY, &tab_label_for_key(FORBIDDEN_KEY));
            return;
        }
        self.push_tab(key, title);
    }

    fn push_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
                pinned: key == HOME_KEY,
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Close every tab (used when the session ends).
    pub fn reset(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
        clear_active_query();
    }

    /// Ask the page behind `key` to fetch its data again.
    pub fn request_reload(&self, key: &str) {
        self.reloads.update(|r| *r.entry(key.to_string()).or_insert(0) += 1);
    }

    /// Tracked counter bumped by `request_reload(key)`.
    pub fn reload_token(&self, key: &str) -> u32 {
        self.reloads.with(|r| r.get(key).copied().unwrap_or(0))
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

/// Tab to show first: the `?active=` key when `role` may open it, else home.
pub fn initial_tab_key(role: Role, active: Option<&str>) -> &str {
    match active.filter(|k| !k.is_empty()) {
        Some(key) if role.can(required_capability(key)) => key,
        _ => HOME_KEY,
    }
}

/// Drop `?active=` so the next session does not inherit the last tab.
fn clear_active_query() {
    let Some(window) = window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
    pub pinned: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_tab_follows_role() {
        assert_eq!(initial_tab_key(Role::Administrator, Some("sys_users")), "sys_users");
        assert_eq!(initial_tab_key(Role::Commercial, Some("sys_users")), HOME_KEY);
        assert_eq!(initial_tab_key(Role::Commercial, Some("a006_invoice")), "a006_invoice");
        assert_eq!(initial_tab_key(Role::Unassigned, Some("a001_product")), HOME_KEY);
        assert_eq!(initial_tab_key(Role::Manager, Some("")), HOME_KEY);
        assert_eq!(initial_tab_key(Role::Manager, None), HOME_KEY);
    }

    #[test]
    fn reload_tokens_are_per_key() {
        let ctx = AppGlobalContext::new(Signal::derive(|| Role::Administrator));
        let offers = Memo::new(move |_| ctx.reload_token("a003_offer"));
        let orders = Memo::new(move |_| ctx.reload_token("a004_order"));

        ctx.request_reload("a004_order");
        ctx.request_reload("a004_order");
        assert_eq!(offers.get_untracked(), 0);
        assert_eq!(orders.get_untracked(), 2);

        ctx.request_reload("a003_offer");
        assert_eq!(offers.get_untracked(), 1);
    }
}
