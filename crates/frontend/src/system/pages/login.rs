use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_config;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let config = use_config();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let config = config.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::sign_in(&config, email_val).await {
                Ok(user) => {
                    // Switches AppRoutes over to the main layout
                    session.sign_in(user);
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    set_error_message.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Lumi Job"</h1>
                <h2>"Đăng nhập hệ thống"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email làm việc"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="ten@lumi.vn"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Đang kiểm tra..." } else { "Đăng nhập" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
