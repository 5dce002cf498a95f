use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::load_app_config;
use crate::system::auth::context::SessionContext;
use contracts::system::config::AppConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Runtime configuration, `None` until `/api/config` has answered.
#[derive(Clone, Copy)]
pub struct ConfigContext(pub RwSignal<Option<AppConfig>>);

/// Current runtime configuration. Only valid below the config gate in [`App`].
pub fn use_config() -> AppConfig {
    let ConfigContext(config) = expect_context::<ConfigContext>();
    config.get_untracked().unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(None::<AppConfig>);
    provide_context(ConfigContext(config));
    provide_context(AppGlobalContext::new());
    provide_context(SessionContext::new());

    spawn_local(async move {
        config.set(Some(load_app_config().await));
    });

    view! {
        <Show
            when=move || config.with(Option::is_some)
            fallback=|| view! { <div class="app-loading">"Đang tải cấu hình..."</div> }
        >
            <AppRoutes />
        </Show>
    }
}
