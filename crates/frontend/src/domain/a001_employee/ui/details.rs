use contracts::domain::a001_employee::hr_view::{start_date_display, STATUS_OPTIONS};
use contracts::domain::a001_employee::update::{apply_changes, changed_fields, set_field, EDITABLE_FIELDS};
use contracts::domain::a001_employee::{Employee, EmployeeField};
use contracts::shared::field::LogicalField;
use contracts::shared::load_sequence::LoadSequence;
use contracts::shared::record::{value_to_text, Record};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_config;
use crate::layout::global_context::{use_global_context, Page};
use crate::shared::firebase::{fetch_record, patch_record};

/// Value shown in the form: what the user typed (stored under the
/// canonical key) wins over the resolved original spelling.
pub fn form_value(draft: &Record, field: EmployeeField) -> String {
    match draft.get(field.storage_key()) {
        Some(value) => value_to_text(value),
        None => field.text(draft),
    }
}

/// Status choices, keeping a non-standard current value selectable.
fn status_choices(current: &str) -> Vec<String> {
    let mut choices: Vec<String> = STATUS_OPTIONS.iter().map(|s| s.to_string()).collect();
    if !current.is_empty() && !choices.iter().any(|c| c == current) {
        choices.insert(0, current.to_string());
    }
    choices
}

#[derive(Debug, Clone, PartialEq)]
enum SaveMessage {
    Success(String),
    Failure(String),
}

#[component]
pub fn EmployeeDetails(id: String) -> impl IntoView {
    let config = use_config();
    let ctx = use_global_context();

    let original = RwSignal::new(None::<Record>);
    let draft = RwSignal::new(Record::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (message, set_message) = signal(None::<SaveMessage>);
    let sequence = StoredValue::new(LoadSequence::new());

    {
        let url = config.employee_url(&urlencoding::encode(&id));
        let policy = config.fetch;
        let id = id.clone();
        let mut seq = sequence.get_value();
        let ticket = seq.begin();
        sequence.set_value(seq);

        spawn_local(async move {
            let result = fetch_record(&url, policy).await;
            let Some(result) = sequence.with_value(|s| s.try_apply(ticket, result)) else {
                log::debug!("Discarding stale employee response #{}", ticket.id());
                return;
            };
            match result {
                Ok(Some(record)) => {
                    draft.set(record.clone());
                    original.set(Some(record));
                }
                Ok(None) => set_error.set(Some(format!("Không tìm thấy nhân viên với ID: {}", id))),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    }

    let save_url = config.employee_url(&urlencoding::encode(&id));
    let handle_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(before) = original.get_untracked() else {
            return;
        };
        let changes = draft.with_untracked(|d| changed_fields(&before, d));
        if changes.is_empty() {
            set_message.set(Some(SaveMessage::Success("Không có thay đổi nào".to_string())));
            return;
        }

        let url = save_url.clone();
        set_saving.set(true);
        set_message.set(None);
        spawn_local(async move {
            match patch_record(&url, &changes).await {
                Ok(()) => {
                    original.update(|o| {
                        if let Some(record) = o {
                            apply_changes(record, &changes);
                        }
                    });
                    set_message.set(Some(SaveMessage::Success("Cập nhật thông tin thành công!".to_string())));
                }
                Err(e) => {
                    log::error!("Employee update failed: {}", e);
                    set_message.set(Some(SaveMessage::Failure(format!("Lỗi khi cập nhật: {}", e))));
                }
            }
            set_saving.set(false);
        });
    };

    let header_name = move || {
        original.with(|o| {
            o.as_ref()
                .map(|r| Employee::new(r.clone()).full_name())
                .unwrap_or_default()
        })
    };
    let avatar = move || {
        original.with(|o| o.as_ref().map(|r| EmployeeField::AvatarUrl.trimmed(r)).unwrap_or_default())
    };
    let start_date = move || {
        original.with(|o| {
            o.as_ref()
                .map(|r| start_date_display(&Employee::new(r.clone())))
                .unwrap_or_default()
        })
    };

    let field_input = move |field: EmployeeField| {
        let on_input = move |ev: web_sys::Event| {
            let text = event_target_value(&ev);
            draft.update(|d| set_field(d, field, text));
        };
        if field == EmployeeField::Status {
            view! {
                <select
                    prop:value=move || draft.with(|d| form_value(d, field))
                    on:change=on_input
                >
                    {move || {
                        draft
                            .with(|d| status_choices(&form_value(d, field)))
                            .into_iter()
                            .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            }
            .into_any()
        } else {
            view! {
                <input
                    type="text"
                    prop:value=move || draft.with(|d| form_value(d, field))
                    on:input=on_input
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="page employee-details">
            <div class="page-header">
                <h1>{header_name}</h1>
                <button class="btn-secondary" on:click=move |_| ctx.navigate(Page::Hr)>
                    "Quay lại"
                </button>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Đang tải dữ liệu..."</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
            </Show>
            {move || {
                message.get().map(|m| match m {
                    SaveMessage::Success(text) => view! { <div class="notice-banner">{text}</div> }.into_any(),
                    SaveMessage::Failure(text) => view! { <div class="error-banner">{text}</div> }.into_any(),
                })
            }}

            <Show when=move || original.with(Option::is_some)>
                <div class="employee-details__summary">
                    <Show when=move || !avatar().is_empty()>
                        <img class="employee-details__avatar" src=avatar alt="avatar" />
                    </Show>
                    <div>{EmployeeField::StartDate.label()} ": " {start_date}</div>
                </div>
                <form class="details-form" on:submit=handle_save.clone()>
                    {EDITABLE_FIELDS
                        .into_iter()
                        .map(|field| {
                            view! {
                                <div class="form-group">
                                    <label>{field.label()}</label>
                                    {field_input(field)}
                                </div>
                            }
                        })
                        .collect_view()}
                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Đang lưu..." } else { "Lưu thay đổi" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
