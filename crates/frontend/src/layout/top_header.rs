use leptos::prelude::*;

use crate::layout::global_context::{use_global_context, Page};
use crate::system::auth::context::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();

    let user_name = move || {
        session
            .user
            .with(|u| u.as_ref().map(|u| u.display_name()).unwrap_or_default())
    };

    let logout = move |_| {
        session.sign_out();
        ctx.navigate(Page::Menu);
    };

    view! {
        <header class="top-header">
            <button class="top-header__toggle" title="Thu gọn menu" on:click=move |_| ctx.toggle_left()>
                "☰"
            </button>
            <div class="top-header__brand" on:click=move |_| ctx.navigate(Page::Menu)>
                "Lumi Job"
            </div>
            <div class="top-header__user">
                <span>{user_name}</span>
                <button class="btn-secondary" on:click=logout>"Đăng xuất"</button>
            </div>
        </header>
    }
}
