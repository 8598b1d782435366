use chrono::Datelike;
use leptos::prelude::*;

use crate::content::OWNER;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    // BUILD_TIME is stamped by build.rs as RFC 3339; the date part is enough here
    let built = env!("BUILD_TIME").split('T').next().unwrap_or_default();
    view! {
        <footer class="py-8 pb-24 md:pb-8 border-t border-muted/20 text-center text-sm text-muted">
            <p class="mb-1">{format!("© {year} {OWNER}. All rights reserved.")}</p>
            <p>
                {format!(
                    "Built with Leptos & Rust. v{} ({built})",
                    env!("CARGO_PKG_VERSION"),
                )}
            </p>
        </footer>
    }
}
