use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;

use super::theme::ThemeToggle;
use crate::content::OWNER;

pub const SECTIONS: [(&str, &str); 5] = [
    ("hero", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Picks the section the viewport currently sits in: the last one whose
/// top edge is at or above the probe line 100px below the scroll offset.
fn section_at(scroll_y: f64, offsets: &[(&'static str, f64)]) -> &'static str {
    let probe = scroll_y + 100.0;
    offsets
        .iter()
        .rev()
        .find(|(_, top)| *top <= probe)
        .map(|(id, _)| *id)
        .unwrap_or("hero")
}

/// Fixed top bar on desktop, bottom bar on mobile. Links are fragment
/// anchors; smooth scrolling comes from CSS.
#[component]
pub fn Navigation(section_refs: [NodeRef<html::Section>; 5]) -> impl IntoView {
    let (active, set_active) = signal("hero");
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        let offsets = SECTIONS
            .iter()
            .zip(section_refs.iter())
            .filter_map(|((id, _), node)| node.get().map(|el| (*id, el.offset_top() as f64)))
            .collect::<Vec<_>>();
        set_active.set(section_at(y, &offsets));
    });

    let nav_link = move |id: &'static str, label: &'static str, base: &'static str| {
        view! {
            <a
                href=format!("#{id}")
                class=move || {
                    if active.get() == id { format!("{base} text-cyan font-medium") } else { format!("{base} text-muted") }
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <nav class="hidden md:block fixed top-0 inset-x-0 z-40 bg-background/80 backdrop-blur border-b border-muted/20">
            <div class="max-w-6xl mx-auto flex items-center justify-between px-6 py-3">
                <a href="#hero" class="text-xl font-bold text-cyan">
                    {OWNER}
                </a>
                <div class="flex items-center gap-6">
                    {SECTIONS
                        .iter()
                        .map(|&(id, label)| nav_link(id, label, "hover:text-cyan transition-colors"))
                        .collect_view()}
                </div>
                <ThemeToggle />
            </div>
        </nav>
        <nav class="md:hidden fixed bottom-0 inset-x-0 z-40 bg-background/90 backdrop-blur border-t border-muted/20">
            <div class="flex items-center justify-around px-2 py-2 text-sm">
                {SECTIONS
                    .iter()
                    .map(|&(id, label)| nav_link(id, label, "px-2 py-1"))
                    .collect_view()}
                <ThemeToggle />
            </div>
        </nav>
    }
}
