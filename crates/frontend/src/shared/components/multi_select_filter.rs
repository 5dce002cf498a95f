use contracts::domain::a002_order::filter::{option_label, EMPTY_OPTION};
use leptos::prelude::*;

/// Dropdown with one checkbox per option plus the "empty value" entry.
#[component]
pub fn MultiSelectFilter(
    placeholder: &'static str,
    /// Available values, already sorted
    #[prop(into)]
    options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    on_toggle: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    let summary = move || {
        let chosen = selected.get();
        match chosen.len() {
            0 => placeholder.to_string(),
            1 => option_label(&chosen[0]).to_string(),
            n => format!("{} ({})", placeholder, n),
        }
    };

    let all_options = move || {
        let mut values = vec![EMPTY_OPTION.to_string()];
        values.extend(options.get());
        values
    };

    view! {
        <div class="multi-select" class:multi-select--active=move || !selected.get().is_empty()>
            <button class="multi-select__toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                {summary}
            </button>
            <Show when=move || open.get()>
                <div class="multi-select__menu">
                    <div class="multi-select__actions">
                        <button on:click=move |_| on_clear.run(())>"Bỏ chọn"</button>
                        <button on:click=move |_| set_open.set(false)>"Đóng"</button>
                    </div>
                    <For
                        each=all_options
                        key=|value| value.clone()
                        children=move |value| {
                            let checked_value = value.clone();
                            let toggled_value = value.clone();
                            view! {
                                <label class="multi-select__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.get().contains(&checked_value)
                                        on:change=move |_| on_toggle.run(toggled_value.clone())
                                    />
                                    {option_label(&value).to_string()}
                                </label>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
