use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Extra modifier class, e.g. `stat-card--money`
    #[prop(optional)]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", variant)>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}
