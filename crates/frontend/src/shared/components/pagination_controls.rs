use contracts::shared::pagination::Page;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Pages are 1-based, matching [`Page`].
#[component]
pub fn PaginationControls(
    #[prop(into)] page: Signal<Page>,
    /// Total count of items after filtering
    #[prop(into)]
    total_count: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let total_pages = move || page.get().total_pages(total_count.get()).max(1);
    let current = move || page.get().number;

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current() <= 1
                title="Trang đầu"
            >
                "«"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current().saturating_sub(1).max(1))
                disabled=move || current() <= 1
                title="Trang trước"
            >
                "‹"
            </button>
            <span class="pagination-info">
                {move || format!("Trang {} / {}", current(), total_pages())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run((current() + 1).min(total_pages()))
                disabled=move || current() >= total_pages()
                title="Trang sau"
            >
                "›"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages())
                disabled=move || current() >= total_pages()
                title="Trang cuối"
            >
                "»"
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page.get().size.to_string()
            >
                {page_size_options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page.get().size == size>
                                {format!("{} / trang", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
