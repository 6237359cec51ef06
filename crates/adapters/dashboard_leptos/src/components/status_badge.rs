use leptos::prelude::*;

/// Badge showing whether a device is active.
#[component]
pub fn StatusBadge(active: bool) -> impl IntoView {
    let (class, label) = if active {
        ("badge badge-active", "Active")
    } else {
        ("badge badge-inactive", "Inactive")
    };

    view! {
        <span class=class>{label}</span>
    }
}
