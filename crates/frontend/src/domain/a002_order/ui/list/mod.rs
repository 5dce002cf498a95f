pub(crate) mod state;

pub use state::{load_orders, OrderListMode};

use contracts::domain::a002_order::columns::{orders_export, CheckBadge, OrderColumn};
use contracts::domain::a002_order::options::{default_filter, derive_options, visible_filters};
use contracts::domain::a002_order::{CategoricalFilter, OrderField, OrderFilter};
use contracts::shared::dates::DateRange;
use contracts::shared::field::LogicalField;
use contracts::shared::load_sequence::LoadSequence;
use contracts::shared::money::{format_count, format_currency};
use contracts::shared::pagination::{Page, DEFAULT_ORDER_PAGE_SIZE, ORDER_PAGE_SIZES};
use contracts::shared::record::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_config;
use crate::layout::global_context::{use_global_context, Page as Screen};
use crate::shared::components::multi_select_filter::MultiSelectFilter;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::export::download_table;
use crate::shared::list_utils::{shown_of_total, SearchInput};
use crate::system::auth::context::use_session;
use state::{
    format_date_input, load_columns, parse_date_input, save_columns, OrdersData, OrdersView,
};

fn render_cell(column: OrderColumn, record: &Record, row_no: usize) -> AnyView {
    let text = column.cell(record, row_no);
    if column == OrderColumn::Check {
        if let Some(badge) = CheckBadge::classify(&text) {
            return view! { <span class=badge.css_class()>{text}</span> }.into_any();
        }
    }
    let class = if column.is_money() { "cell cell--money" } else { "cell" };
    view! { <span class=class>{text}</span> }.into_any()
}

/// Every filter change starts over at page 1.
fn update_filter(filter: RwSignal<OrderFilter>, page: RwSignal<Page>, f: impl FnOnce(&mut OrderFilter)) {
    filter.update(f);
    page.update(|p| *p = Page::first(p.size));
}

#[component]
pub fn OrderList(mode: OrderListMode) -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let ctx = use_global_context();

    let data = RwSignal::new(None::<OrdersData>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let filter = RwSignal::new(OrderFilter::default());
    let page = RwSignal::new(Page::first(DEFAULT_ORDER_PAGE_SIZE));
    let columns = RwSignal::new(load_columns(mode));
    let (show_columns, set_show_columns) = signal(false);
    let sequence = StoredValue::new(LoadSequence::new());

    let load = Callback::new(move |_: ()| {
        let Some(user) = session.user.get_untracked() else {
            return;
        };
        let config = config.clone();

        let mut seq = sequence.get_value();
        let ticket = seq.begin();
        sequence.set_value(seq);

        set_loading.set(true);
        set_error.set(None);
        log::info!("Loading orders (request #{})", ticket.id());

        spawn_local(async move {
            let result = load_orders(&config, &user).await;
            match sequence.with_value(|s| s.try_apply(ticket, result)) {
                None => {
                    log::debug!("Discarding stale orders response #{}", ticket.id());
                    return;
                }
                Some(Ok(loaded)) => {
                    log::info!(
                        "Loaded {} orders for {:?} (request #{})",
                        loaded.records.len(),
                        loaded.access.role,
                        ticket.id()
                    );
                    if data.with_untracked(Option::is_none) {
                        filter.set(default_filter(&loaded.access));
                    }
                    page.update(|p| *p = Page::first(p.size));
                    data.set(Some(loaded));
                }
                Some(Err(e)) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    load.run(());

    let view_model = Memo::new(move |_| {
        data.with(|d| match d {
            Some(d) => filter.with(|f| OrdersView::compute(d, f)),
            None => OrdersView::default(),
        })
    });
    let options = Memo::new(move |_| {
        data.with(|d| d.as_ref().map(|d| derive_options(&d.records, &d.access)).unwrap_or_default())
    });
    let shown_filters = Memo::new(move |_| {
        data.with(|d| d.as_ref().map(|d| visible_filters(&d.access)).unwrap_or_default())
    });
    let greeting = move || data.with(|d| d.as_ref().map(|d| d.access.greeting.clone()).unwrap_or_default());

    let total_rows = Signal::derive(move || view_model.with(|v| v.rows.len()));
    let page_rows = move || {
        let current = page.get().clamped(total_rows.get());
        view_model.with(|v| {
            let range = current.range(v.rows.len());
            let offset = range.start;
            v.rows[range]
                .iter()
                .cloned()
                .enumerate()
                .map(|(idx, record)| (offset + idx + 1, record))
                .collect::<Vec<_>>()
        })
    };

    let handle_export = move |_| {
        let table = view_model.with(|v| {
            let refs: Vec<&Record> = v.rows.iter().collect();
            columns.with(|c| orders_export(&refs, c))
        });
        match download_table(&table, "F3_Data") {
            Ok(()) => set_notice.set(None),
            Err(e) => set_notice.set(Some(e)),
        }
    };

    let toggle_column = move |column: OrderColumn| {
        columns.update(|c| {
            c.toggle(column);
            save_columns(mode, c);
        });
    };

    view! {
        <div class="page orders-page">
            <div class="page-header">
                <div>
                    <h1>{mode.title()}</h1>
                    <p class="page-header__greeting">{greeting}</p>
                </div>
                <div class="page-header__actions">
                    <button class="btn-secondary" on:click=move |_| load.run(()) disabled=move || loading.get()>
                        {move || if loading.get() { "Đang tải..." } else { "Làm mới" }}
                    </button>
                    <button class="btn-secondary" on:click=move |_| set_show_columns.update(|s| *s = !*s)>
                        "Cột hiển thị"
                    </button>
                    <button class="btn-primary" on:click=handle_export>"Xuất Excel"</button>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || notice.get().is_some()>
                <div class="notice-banner">{move || notice.get().unwrap_or_default()}</div>
            </Show>

            <div class="stats-grid">
                <StatCard
                    label="Tổng số đơn"
                    value=Signal::derive(move || format_count(view_model.with(|v| v.totals.count)))
                />
                <StatCard
                    label="Tổng tiền"
                    variant="stat-card--money"
                    value=Signal::derive(move || format_currency(view_model.with(|v| v.totals.total_amount)))
                />
                <StatCard
                    label="Phí ship"
                    variant="stat-card--money"
                    value=Signal::derive(move || format_currency(view_model.with(|v| v.totals.total_ship)))
                />
                <StatCard
                    label="Đã đối soát"
                    variant="stat-card--money"
                    value=Signal::derive(move || format_currency(view_model.with(|v| v.totals.total_reconciled)))
                />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || filter.with(|f| f.search.clone()))
                    on_change=Callback::new(move |term: String| update_filter(filter, page, |f| f.search = term))
                    placeholder="Tìm kiếm đơn hàng..."
                />
                <label class="filter-panel__date">
                    "Từ ngày"
                    <input
                        type="date"
                        prop:value=move || filter.with(|f| format_date_input(f.dates.start))
                        on:change=move |ev| {
                            let start = parse_date_input(&event_target_value(&ev));
                            update_filter(filter, page, |f| f.dates = DateRange::new(start, f.dates.end));
                        }
                    />
                </label>
                <label class="filter-panel__date">
                    "Đến ngày"
                    <input
                        type="date"
                        prop:value=move || filter.with(|f| format_date_input(f.dates.end))
                        on:change=move |ev| {
                            let end = parse_date_input(&event_target_value(&ev));
                            update_filter(filter, page, |f| f.dates = DateRange::new(f.dates.start, end));
                        }
                    />
                </label>
                {move || {
                    shown_filters
                        .get()
                        .into_iter()
                        .map(|cat: CategoricalFilter| {
                            view! {
                                <MultiSelectFilter
                                    placeholder=cat.placeholder()
                                    options=Signal::derive(move || options.with(|o| o.get(cat).to_vec()))
                                    selected=Signal::derive(move || filter.with(|f| f.selection(cat)))
                                    on_toggle=Callback::new(move |value: String| update_filter(filter, page, |f| f.toggle(cat, &value)))
                                    on_clear=Callback::new(move |_| update_filter(filter, page, |f| f.clear(cat)))
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || show_columns.get()>
                <div class="column-picker">
                    {OrderColumn::ALL
                        .into_iter()
                        .map(|column| {
                            view! {
                                <label class="column-picker__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || columns.with(|c| c.is_visible(column))
                                        on:change=move |_| toggle_column(column)
                                    />
                                    {column.label()}
                                </label>
                            }
                        })
                        .collect_view()}
                    <button
                        class="btn-secondary"
                        on:click=move |_| columns.update(|c| {
                            c.show_all();
                            save_columns(mode, c);
                        })
                    >
                        "Hiện tất cả"
                    </button>
                </div>
            </Show>

            <div class="table-summary">
                {move || shown_of_total(total_rows.get(), view_model.with(|v| v.scoped_total))}
            </div>

            <div class="table-wrapper">
                <table class="data-table">
                    <thead>
                        <tr>
                            {move || {
                                columns
                                    .get()
                                    .columns()
                                    .iter()
                                    .map(|c| view! { <th>{c.label()}</th> })
                                    .collect_view()
                            }}
                            {(mode == OrderListMode::Edit).then(|| view! { <th>"Thao tác"</th> })}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let visible = columns.get();
                            page_rows()
                                .into_iter()
                                .map(|(row_no, record)| {
                                    let code = OrderField::Code.trimmed(&record);
                                    let cells = visible
                                        .columns()
                                        .iter()
                                        .map(|c| view! { <td>{render_cell(*c, &record, row_no)}</td> })
                                        .collect_view();
                                    view! {
                                        <tr>
                                            {cells}
                                            {(mode == OrderListMode::Edit).then(|| {
                                                let disabled = code.is_empty();
                                                view! {
                                                    <td>
                                                        <button
                                                            class="btn-link"
                                                            disabled=disabled
                                                            on:click=move |_| ctx.navigate(Screen::OrderDetail(code.clone()))
                                                        >
                                                            "Sửa"
                                                        </button>
                                                    </td>
                                                }
                                            })}
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || !loading.get() && total_rows.get() == 0>
                    <div class="table-empty">"Không có dữ liệu"</div>
                </Show>
            </div>

            <PaginationControls
                page=Signal::derive(move || page.get().clamped(total_rows.get()))
                total_count=total_rows
                on_page_change=Callback::new(move |number: usize| page.update(|p| p.number = number))
                on_page_size_change=Callback::new(move |size: usize| page.set(Page::first(size)))
                page_size_options=ORDER_PAGE_SIZES.to_vec()
            />
        </div>
    }
}
