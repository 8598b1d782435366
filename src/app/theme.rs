use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

/// Light or dark palette, applied through the `data-theme` attribute and
/// remembered in localStorage between visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn attribute(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeSignal(pub RwSignal<Theme>);

/// Installs the theme signal into context. On the client the stored
/// choice is loaded once, then every change is mirrored back.
pub fn provide_theme() -> ThemeSignal {
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        Effect::watch(
            || (),
            move |_, _, _| {
                theme.set(stored.get_untracked());
            },
            true,
        );
        Effect::new(move |_| {
            set_stored.set(theme.get());
        });
    }

    let signal = ThemeSignal(theme);
    provide_context(signal);
    signal
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ThemeSignal(theme) = expect_context::<ThemeSignal>();
    view! {
        <button
            class="text-xl p-1.5 rounded-md hover:bg-brightBlack/50 transition-colors"
            aria-label="Toggle theme"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || match theme.get() {
                Theme::Light => "🌙",
                Theme::Dark => "☀️",
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_themes() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.attribute(), "light");
        assert_eq!(Theme::Dark.attribute(), "dark");
    }
}
