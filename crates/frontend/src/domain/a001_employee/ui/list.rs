use contracts::domain::a001_employee::hr_view::{
    distinct_values, hr_export, hr_greeting, start_date_display, EmployeeFilter, EmployeeStats,
    MISSING,
};
use contracts::domain::a001_employee::{Employee, EmployeeField};
use contracts::shared::load_sequence::LoadSequence;
use contracts::shared::money::format_count;
use contracts::shared::pagination::{Page, DEFAULT_HR_PAGE_SIZE};
use contracts::system::config::AppConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_config;
use crate::layout::global_context::{use_global_context, Page as Screen};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::export::download_table;
use crate::shared::firebase::fetch_collection_with_ids;
use crate::shared::list_utils::{shown_of_total, SearchInput};
use crate::system::auth::context::use_session;

const HR_PAGE_SIZES: [usize; 3] = [20, 50, 100];

/// Columns of the HR table after the row number.
const TABLE_FIELDS: [EmployeeField; 8] = [
    EmployeeField::FullName,
    EmployeeField::Email,
    EmployeeField::Phone,
    EmployeeField::Title,
    EmployeeField::Department,
    EmployeeField::Branch,
    EmployeeField::StartDate,
    EmployeeField::Status,
];

pub async fn fetch_employees(config: &AppConfig) -> Result<Vec<Employee>, String> {
    let records = fetch_collection_with_ids(&config.employees_url(), config.fetch).await?;
    Ok(records.into_iter().map(Employee::from).collect())
}

fn display(employee: &Employee, field: EmployeeField) -> String {
    match field {
        EmployeeField::StartDate => start_date_display(employee),
        other => {
            let value = employee.get(other);
            if value.is_empty() {
                MISSING.to_string()
            } else {
                value
            }
        }
    }
}

/// `""` from a `<select>` means "all".
fn choice(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[component]
fn ChoiceFilter(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || value.get().unwrap_or_default()
            on:change=move |ev| on_change.run(choice(event_target_value(&ev)))
        >
            <option value="">{label}</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|opt| view! { <option value=opt.clone()>{opt.clone()}</option> })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let ctx = use_global_context();

    let employees = RwSignal::new(Vec::<Employee>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let filter = RwSignal::new(EmployeeFilter::default());
    let page = RwSignal::new(Page::first(DEFAULT_HR_PAGE_SIZE));
    let sequence = StoredValue::new(LoadSequence::new());

    let load = Callback::new(move |_: ()| {
        let config = config.clone();
        let mut seq = sequence.get_value();
        let ticket = seq.begin();
        sequence.set_value(seq);

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = fetch_employees(&config).await;
            match sequence.with_value(|s| s.try_apply(ticket, result)) {
                None => {
                    log::debug!("Discarding stale employees response #{}", ticket.id());
                    return;
                }
                Some(Ok(list)) => {
                    log::info!("Loaded {} employees (request #{})", list.len(), ticket.id());
                    employees.set(list);
                }
                Some(Err(e)) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    load.run(());

    let set_filter = move |f: EmployeeFilter| {
        filter.set(f);
        page.update(|p| *p = Page::first(p.size));
    };

    let filtered = Memo::new(move |_| {
        employees.with(|all| filter.with(|f| f.apply(all).into_iter().cloned().collect::<Vec<_>>()))
    });
    let stats = Memo::new(move |_| {
        employees.with(|all| EmployeeStats::compute(all, filtered.with(Vec::len)))
    });
    let departments = Signal::derive(move || employees.with(|all| distinct_values(all, EmployeeField::Department)));
    let branches = Signal::derive(move || employees.with(|all| distinct_values(all, EmployeeField::Branch)));
    let statuses = Signal::derive(move || employees.with(|all| distinct_values(all, EmployeeField::Status)));

    let total_rows = Signal::derive(move || filtered.with(Vec::len));
    let page_rows = move || {
        let current = page.get().clamped(total_rows.get());
        filtered.with(|rows| {
            let range = current.range(rows.len());
            let offset = range.start;
            rows[range]
                .iter()
                .cloned()
                .enumerate()
                .map(|(idx, e)| (offset + idx + 1, e))
                .collect::<Vec<_>>()
        })
    };

    let greeting = move || {
        session
            .user
            .with(|u| hr_greeting(u.as_ref().map(|u| u.display_name()).as_deref()))
    };

    let handle_export = move |_| {
        let table = filtered.with(|rows| hr_export(&rows.iter().collect::<Vec<_>>()));
        match download_table(&table, "Danh_sach_nhan_su") {
            Ok(()) => set_notice.set(None),
            Err(e) => set_notice.set(Some(e)),
        }
    };

    view! {
        <div class="page hr-page">
            <div class="page-header">
                <div>
                    <h1>"Quản lý nhân sự"</h1>
                    <p class="page-header__greeting">{greeting}</p>
                </div>
                <div class="page-header__actions">
                    <button class="btn-secondary" on:click=move |_| load.run(()) disabled=move || loading.get()>
                        {move || if loading.get() { "Đang tải..." } else { "Làm mới" }}
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
                <StatCard label="Tổng nhân sự" value=Signal::derive(move || format_count(stats.get().total)) />
                <StatCard label="Đang làm việc" value=Signal::derive(move || format_count(stats.get().active)) />
                <StatCard label="Thử việc" value=Signal::derive(move || format_count(stats.get().probation)) />
                <StatCard label="Kết quả lọc" value=Signal::derive(move || format_count(stats.get().filtered)) />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || filter.with(|f| f.search.clone()))
                    on_change=Callback::new(move |term: String| {
                        set_filter(EmployeeFilter { search: term, ..filter.get_untracked() })
                    })
                    placeholder="Tìm theo tên, email, số điện thoại..."
                />
                <ChoiceFilter
                    label="Tất cả bộ phận"
                    options=departments
                    value=Signal::derive(move || filter.with(|f| f.department.clone()))
                    on_change=Callback::new(move |department| {
                        set_filter(EmployeeFilter { department, ..filter.get_untracked() })
                    })
                />
                <ChoiceFilter
                    label="Tất cả chi nhánh"
                    options=branches
                    value=Signal::derive(move || filter.with(|f| f.branch.clone()))
                    on_change=Callback::new(move |branch| {
                        set_filter(EmployeeFilter { branch, ..filter.get_untracked() })
                    })
                />
                <ChoiceFilter
                    label="Tất cả trạng thái"
                    options=statuses
                    value=Signal::derive(move || filter.with(|f| f.status.clone()))
                    on_change=Callback::new(move |status| {
                        set_filter(EmployeeFilter { status, ..filter.get_untracked() })
                    })
                />
            </div>

            <div class="table-summary">
                {move || shown_of_total(total_rows.get(), stats.get().total)}
            </div>

            <div class="table-wrapper">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"STT"</th>
                            {TABLE_FIELDS.iter().map(|f| view! { <th>{f.label()}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            page_rows()
                                .into_iter()
                                .map(|(row_no, employee)| {
                                    let id = employee.id();
                                    let cells = TABLE_FIELDS
                                        .iter()
                                        .map(|f| view! { <td>{display(&employee, *f)}</td> })
                                        .collect_view();
                                    view! {
                                        <tr
                                            class="data-table__row--clickable"
                                            on:click=move |_| {
                                                if let Some(id) = id.clone() {
                                                    ctx.navigate(Screen::HrDetail(id));
                                                }
                                            }
                                        >
                                            <td>{row_no}</td>
                                            {cells}
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || !loading.get() && total_rows.get() == 0>
                    <div class="table-empty">"Không tìm thấy nhân sự phù hợp"</div>
                </Show>
            </div>

            <PaginationControls
                page=Signal::derive(move || page.get().clamped(total_rows.get()))
                total_count=total_rows
                on_page_change=Callback::new(move |number: usize| page.update(|p| p.number = number))
                on_page_size_change=Callback::new(move |size: usize| page.set(Page::first(size)))
                page_size_options=HR_PAGE_SIZES.to_vec()
            />
        </div>
    }
}
