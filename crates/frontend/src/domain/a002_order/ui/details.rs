use contracts::domain::a002_order::catalog::find_product;
use contracts::domain::a002_order::columns::OrderColumn;
use contracts::domain::a002_order::OrderField;
use contracts::shared::field::LogicalField;
use contracts::shared::load_sequence::LoadSequence;
use contracts::shared::record::Record;
use contracts::system::auth::scope_filter::apply_access_filter;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::list::load_orders;
use crate::app::use_config;
use crate::layout::global_context::{use_global_context, Page};
use crate::system::auth::context::use_session;

/// Customer fields that only the detail screen shows.
const CONTACT_FIELDS: [(OrderField, &str); 6] = [
    (OrderField::Phone, "Số điện thoại"),
    (OrderField::Address, "Địa chỉ"),
    (OrderField::City, "Thành phố"),
    (OrderField::State, "Tỉnh"),
    (OrderField::Zipcode, "Mã bưu điện"),
    (OrderField::Note, "Ghi chú"),
];

/// First visible order whose trimmed code equals `code`.
pub fn find_order(records: &[&Record], code: &str) -> Option<Record> {
    let code = code.trim();
    records
        .iter()
        .find(|r| OrderField::Code.trimmed(r) == code)
        .map(|r| (*r).clone())
}

fn product_text(record: &Record) -> String {
    let value = OrderField::Product.trimmed(record);
    match find_product(&value) {
        Some(product) => format!("{} ({})", product.name, product.slug),
        None if value.is_empty() => "---".to_string(),
        None => format!("{} (ngoài danh mục)", value),
    }
}

#[component]
pub fn OrderDetails(code: String) -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let ctx = use_global_context();

    let (order, set_order) = signal(None::<Record>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let sequence = StoredValue::new(LoadSequence::new());

    if let Some(user) = session.user.get_untracked() {
        let code = code.clone();
        let mut seq = sequence.get_value();
        let ticket = seq.begin();
        sequence.set_value(seq);

        spawn_local(async move {
            let result = load_orders(&config, &user).await;
            let Some(result) = sequence.with_value(|s| s.try_apply(ticket, result)) else {
                log::debug!("Discarding stale order response #{}", ticket.id());
                return;
            };
            match result {
                Ok(data) => {
                    let visible = apply_access_filter(&data.records, &data.access);
                    match find_order(&visible, &code) {
                        Some(record) => set_order.set(Some(record)),
                        None => set_error.set(Some(format!("Không tìm thấy đơn hàng với mã: {}", code))),
                    }
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    }

    let rows = move || {
        order.with(|o| {
            o.as_ref()
                .map(|record| {
                    let mut rows: Vec<(&'static str, String)> = OrderColumn::ALL
                        .into_iter()
                        .filter(|c| !matches!(c, OrderColumn::Stt | OrderColumn::MatHang))
                        .map(|c| (c.label(), c.cell(record, 0)))
                        .collect();
                    rows.push((OrderColumn::MatHang.label(), product_text(record)));
                    rows.extend(CONTACT_FIELDS.iter().map(|(field, label)| (*label, field.text(record))));
                    rows
                })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="page order-details">
            <div class="page-header">
                <h1>{format!("Đơn hàng {}", code)}</h1>
                <button class="btn-secondary" on:click=move |_| ctx.navigate(Page::OrdersEdit)>
                    "Quay lại"
                </button>
            </div>
            <Show when=move || loading.get()>
                <div class="loading">"Đang tải dữ liệu..."</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <dl class="details-grid">
                {move || {
                    rows()
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            }
                        })
                        .collect_view()
                }}
            </dl>
        </div>
    }
}
