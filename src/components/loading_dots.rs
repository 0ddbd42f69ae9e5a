//! Animated ellipsis for the empty-roster placeholder.

use leptos::prelude::*;

/// Three dots pulsing in sequence while the list waits for its first entry.
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <span class="loading-dots" aria-hidden="true">
            <span class="loading-dots__dot">"."</span>
            <span class="loading-dots__dot">"."</span>
            <span class="loading-dots__dot">"."</span>
        </span>
    }
}
