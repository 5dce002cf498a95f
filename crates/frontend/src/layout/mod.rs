pub mod global_context;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = global_context::use_global_context();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar" class:app-sidebar--collapsed=move || !ctx.left_open.get()>
                    <Sidebar />
                </aside>
                <main class="app-main">{center()}</main>
            </div>
        </div>
    }
}
