/// Утилиты для списков: поиск с debounce, подписи количества
use contracts::shared::money::format_count;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay between the last keystroke and the search being applied.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// "Hiển thị 20 / 1.250 bản ghi"
pub fn shown_of_total(shown: usize, total: usize) -> String {
    format!("Hiển thị {} / {} bản ghi", format_count(shown), format_count(total))
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Applied filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new term after the debounce delay
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Tìm kiếm...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Dropping a pending Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let handle_clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Xóa" on:click=handle_clear>
                    "×"
                </button>
            </Show>
        </div>
    }
}
