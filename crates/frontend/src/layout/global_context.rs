use contracts::system::modules::ModuleKey;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Screens of the application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Menu,
    Orders,
    OrdersEdit,
    /// Order looked up by its code.
    OrderDetail(String),
    Hr,
    /// Employee looked up by document id.
    HrDetail(String),
}

/// Query string representation: `?page=orders`, `?page=order&id=A1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Page {
    pub fn from_query(query: &PageQuery) -> Page {
        let id = query.id.clone().filter(|id| !id.trim().is_empty());
        match (query.page.as_deref(), id) {
            (Some("orders"), _) => Page::Orders,
            (Some("orders_edit"), _) => Page::OrdersEdit,
            (Some("order"), Some(code)) => Page::OrderDetail(code),
            (Some("hr"), _) => Page::Hr,
            (Some("employee"), Some(id)) => Page::HrDetail(id),
            _ => Page::Menu,
        }
    }

    pub fn to_query(&self) -> PageQuery {
        let (page, id) = match self {
            Page::Menu => return PageQuery::default(),
            Page::Orders => ("orders", None),
            Page::OrdersEdit => ("orders_edit", None),
            Page::OrderDetail(code) => ("order", Some(code.clone())),
            Page::Hr => ("hr", None),
            Page::HrDetail(id) => ("employee", Some(id.clone())),
        };
        PageQuery {
            page: Some(page.to_string()),
            id,
        }
    }

    /// Module whose permission guards this screen.
    pub fn module(&self) -> Option<ModuleKey> {
        match self {
            Page::Menu => None,
            Page::Orders => Some(ModuleKey::Orders),
            Page::OrdersEdit | Page::OrderDetail(_) => Some(ModuleKey::OrdersEdit),
            Page::Hr | Page::HrDetail(_) => Some(ModuleKey::Hr),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Menu),
            left_open: RwSignal::new(true),
        }
    }

    /// Reads the initial page from the URL and keeps the URL in sync with
    /// later navigation.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: PageQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        self.page.set(Page::from_query(&query));

        let page = self.page;
        Effect::new(move |_| {
            let query_string = serde_qs::to_string(&page.get().to_query()).unwrap_or_default();
            let new_url = if query_string.is_empty() {
                "?".to_string()
            } else {
                format!("?{}", query_string)
            };

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
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

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {:?}", page);
        self.page.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    expect_context::<AppGlobalContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_round_trip() {
        for page in [
            Page::Menu,
            Page::Orders,
            Page::OrdersEdit,
            Page::OrderDetail("A1".into()),
            Page::Hr,
            Page::HrDetail("-Nx12".into()),
        ] {
            assert_eq!(Page::from_query(&page.to_query()), page);
        }
    }

    #[test]
    fn test_detail_without_id_falls_back_to_menu() {
        let query = PageQuery {
            page: Some("order".into()),
            id: Some("  ".into()),
        };
        assert_eq!(Page::from_query(&query), Page::Menu);
        assert_eq!(Page::from_query(&PageQuery::default()), Page::Menu);
    }

    #[test]
    fn test_query_string_encoding() {
        let query = Page::OrderDetail("A 1".into()).to_query();
        let encoded = serde_qs::to_string(&query).unwrap();
        let decoded: PageQuery = serde_qs::from_str(&encoded).unwrap();
        assert_eq!(Page::from_query(&decoded), Page::OrderDetail("A 1".into()));
    }

    #[test]
    fn test_detail_pages_share_module_permission() {
        assert_eq!(Page::OrderDetail("A1".into()).module(), Some(ModuleKey::OrdersEdit));
        assert_eq!(Page::HrDetail("e1".into()).module(), Some(ModuleKey::Hr));
        assert_eq!(Page::Menu.module(), None);
    }
}
