use crate::app::use_config;
use crate::domain::a001_employee::ui::details::EmployeeDetails;
use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::domain::a002_order::ui::details::OrderDetails;
use crate::domain::a002_order::ui::list::{OrderList, OrderListMode};
use crate::layout::global_context::{use_global_context, Page};
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use crate::system::pages::menu::MenuPage;
use leptos::prelude::*;

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Menu => view! { <MenuPage /> }.into_any(),
        Page::Orders => view! { <OrderList mode=OrderListMode::View /> }.into_any(),
        Page::OrdersEdit => view! { <OrderList mode=OrderListMode::Edit /> }.into_any(),
        Page::OrderDetail(code) => view! { <OrderDetails code=code /> }.into_any(),
        Page::Hr => view! { <EmployeeList /> }.into_any(),
        Page::HrDetail(id) => view! { <EmployeeDetails id=id /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let admin_email = use_config().admin_email;

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    let center = move || {
        let page = ctx.page.get();
        let allowed = page
            .module()
            .map_or(true, |module| session.can_open(module, &admin_email));
        if allowed {
            page_view(page)
        } else {
            view! {
                <div class="access-denied">"Bạn không có quyền truy cập chức năng này."</div>
            }
            .into_any()
        }
    };

    view! { <Shell center=center /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || session.is_authenticated() fallback=|| view! { <LoginPage /> }>
            <MainLayout />
        </Show>
    }
}
