//! Theme Toggle Component

use leptos::*;

use crate::state::theme::{current_attribute, toggle_theme, Theme};

/// Button that flips between dark and light
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = create_signal(Theme::toggled_from(current_attribute().as_deref()));

    view! {
        <button
            id="theme-toggle"
            type="button"
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| set_theme.set(Theme::toggled_from(toggle_theme().attribute()))
        >
            // Icon shows the theme a click switches to
            {move || if theme.get() == Theme::Light { "☀️" } else { "🌙" }}
        </button>
    }
}
