use leptos::prelude::*;

use crate::app::use_config;
use crate::layout::global_context::{use_global_context, Page};
use crate::system::auth::context::use_session;
use crate::system::pages::menu::{module_page, sidebar_items};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let admin_email = use_config().admin_email;

    let items = move || {
        sidebar_items()
            .into_iter()
            .filter(|item| session.can_open(item.module, &admin_email))
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="sidebar">
            <div
                class="sidebar__item"
                class:sidebar__item--active=move || ctx.page.get() == Page::Menu
                on:click=move |_| ctx.navigate(Page::Menu)
            >
                "Tất cả"
            </div>
            {move || {
                items()
                    .into_iter()
                    .map(|item| {
                        let target = module_page(item.module);
                        let active_target = target.clone();
                        view! {
                            <div
                                class="sidebar__item"
                                class:sidebar__item--disabled=target.is_none()
                                class:sidebar__item--active=move || {
                                    active_target.as_ref().is_some_and(|p| ctx.page.get() == *p)
                                }
                                on:click=move |_| {
                                    if let Some(page) = target.clone() {
                                        ctx.navigate(page);
                                    }
                                }
                            >
                                {item.label}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
