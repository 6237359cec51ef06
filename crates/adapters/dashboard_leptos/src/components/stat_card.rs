//! Stat card component for displaying a labelled count.

use leptos::prelude::*;

/// A card displaying a label and a count.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// The count to display.
    value: usize,
    /// Accent class: `success`, `warning` or `error`.
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {tone}")>
            <span class="stat-label">{label}</span>
            <span class="stat-value">{value}</span>
        </div>
    }
}
