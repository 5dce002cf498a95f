//! Module catalog and the start screen listing the modules a user may open.

use contracts::system::modules::{Block, ModuleKey};
use leptos::prelude::*;

use crate::app::use_config;
use crate::layout::global_context::{use_global_context, Page};
use crate::system::auth::context::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub module: ModuleKey,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuSection {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

pub const MENU_SECTIONS: &[MenuSection] = &[
    MenuSection {
        title: "Phân tích & Báo cáo",
        items: &[MenuItem { module: ModuleKey::Dashboard, label: "Dashboard báo cáo" }],
    },
    MenuSection {
        title: "Khách hàng & CRM",
        items: &[MenuItem { module: ModuleKey::Crm, label: "Quản lý CRM/CSKH" }],
    },
    MenuSection {
        title: "Quản lý Sale & Order",
        items: &[
            MenuItem { module: ModuleKey::Orders, label: "Danh sách đơn" },
            MenuItem { module: ModuleKey::OrdersEdit, label: "Chỉnh sửa đơn" },
            MenuItem { module: ModuleKey::NewOrder, label: "Nhập đơn mới" },
        ],
    },
    MenuSection {
        title: "Quản lý Nhân sự",
        items: &[MenuItem { module: ModuleKey::Hr, label: "Quản lý nhân sự" }],
    },
    MenuSection {
        title: "Quản lý Tài chính",
        items: &[MenuItem { module: ModuleKey::Finance, label: "Quản lý tài chính" }],
    },
    MenuSection {
        title: "Marketing",
        items: &[MenuItem { module: ModuleKey::Marketing, label: "Quản lý marketing" }],
    },
    MenuSection {
        title: "Hệ thống",
        items: &[MenuItem { module: ModuleKey::Settings, label: "Cài đặt hệ thống" }],
    },
];

/// Screen behind a module; `None` for modules that are not available yet.
pub fn module_page(module: ModuleKey) -> Option<Page> {
    match module {
        ModuleKey::Orders => Some(Page::Orders),
        ModuleKey::OrdersEdit => Some(Page::OrdersEdit),
        ModuleKey::Hr => Some(Page::Hr),
        _ => None,
    }
}

/// Sidebar entries: the menu catalog plus goals, without system settings.
pub fn sidebar_items() -> Vec<MenuItem> {
    let mut items = Vec::new();
    for item in MENU_SECTIONS.iter().flat_map(|s| s.items.iter()) {
        match item.module {
            ModuleKey::Settings => {}
            ModuleKey::Dashboard => {
                items.push(*item);
                items.push(MenuItem { module: ModuleKey::Goals, label: "Mục tiêu" });
            }
            _ => items.push(*item),
        }
    }
    items
}

#[component]
fn PermissionEditor(module: ModuleKey) -> impl IntoView {
    let session = use_session();
    let (open, set_open) = signal(false);
    let permission_id = module.permission_id();

    view! {
        <div class="permission-editor">
            <button
                class="permission-editor__toggle"
                title="Phân quyền"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_open.update(|o| *o = !*o);
                }
            >
                "⚙"
            </button>
            <Show when=move || open.get()>
                <div class="permission-editor__popover" on:click=|ev| ev.stop_propagation()>
                    {Block::ALL
                        .into_iter()
                        .map(|block| {
                            view! {
                                <label class="permission-editor__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            session
                                                .permissions
                                                .with(|p| p.allowed(permission_id).contains(&block))
                                        }
                                        on:change=move |_| session.toggle_permission(module, block)
                                    />
                                    {block.label()}
                                </label>
                            }
                        })
                        .collect_view()}
                    <p class="permission-editor__note">
                        "* Phân quyền cho " <strong>{permission_id}</strong>
                        ". Nếu không chọn mục nào, hệ thống sử dụng mặc định."
                    </p>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn MenuPage() -> impl IntoView {
    let session = use_session();
    let ctx = use_global_context();
    let admin_email = use_config().admin_email;

    let is_admin = {
        let admin_email = admin_email.clone();
        move || session.user_access(&admin_email).is_admin
    };

    let sections = move || {
        MENU_SECTIONS
            .iter()
            .filter_map(|section| {
                let items: Vec<MenuItem> = section
                    .items
                    .iter()
                    .copied()
                    .filter(|item| session.can_open(item.module, &admin_email))
                    .collect();
                (!items.is_empty()).then_some((section.title, items))
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="menu-page">
            <h1 class="menu-page__title">
                {move || {
                    session
                        .user
                        .with(|u| u.as_ref().map(|u| u.display_name()).unwrap_or_default())
                }}
            </h1>
            {move || {
                let admin = is_admin();
                sections()
                    .into_iter()
                    .map(|(title, items)| {
                        view! {
                            <section class="menu-section">
                                <h2 class="menu-section__title">{title}</h2>
                                <div class="menu-section__grid">
                                    {items
                                        .into_iter()
                                        .map(|item| {
                                            let target = module_page(item.module);
                                            let available = target.is_some();
                                            view! {
                                                <div
                                                    class="menu-card"
                                                    class:menu-card--disabled=!available
                                                    on:click=move |_| {
                                                        if let Some(page) = target.clone() {
                                                            ctx.navigate(page);
                                                        }
                                                    }
                                                >
                                                    <span class="menu-card__label">{item.label}</span>
                                                    {(!available)
                                                        .then(|| view! { <span class="menu-card__badge">"Sắp ra mắt"</span> })}
                                                    {(admin && !item.module.is_admin_only())
                                                        .then(|| view! { <PermissionEditor module=item.module /> })}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_built_modules_have_pages() {
        assert_eq!(module_page(ModuleKey::Orders), Some(Page::Orders));
        assert_eq!(module_page(ModuleKey::OrdersEdit), Some(Page::OrdersEdit));
        assert_eq!(module_page(ModuleKey::Hr), Some(Page::Hr));
        assert_eq!(module_page(ModuleKey::NewOrder), None);
        assert_eq!(module_page(ModuleKey::Dashboard), None);
    }

    #[test]
    fn test_sidebar_items() {
        let items = sidebar_items();
        assert!(items.iter().all(|i| i.module != ModuleKey::Settings));
        let dashboard = items.iter().position(|i| i.module == ModuleKey::Dashboard);
        let goals = items.iter().position(|i| i.module == ModuleKey::Goals);
        assert_eq!(goals, dashboard.map(|d| d + 1));
    }
}
