//! Fixed top navigation with a collapsible mobile menu.

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::util::viewport::use_scrolled_past;

/// Scroll offset after which the bar gains its solid background.
pub const SCROLLED_OFFSET_PX: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = use_scrolled_past(SCROLLED_OFFSET_PX);
    let menu_open = RwSignal::new(false);

    let nav_class = move || if scrolled.get() { "navbar navbar--scrolled" } else { "navbar" };
    let menu_class = move || if menu_open.get() { "navbar__mobile navbar__mobile--open" } else { "navbar__mobile" };

    view! {
        <nav class=nav_class>
            <div class="navbar__inner">
                <a href="#home" class="navbar__brand gradient-text">"Ezz"</a>
                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="navbar__link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="#contact" class="btn btn--primary navbar__cta">"Let's Talk"</a>
                </div>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <div class=menu_class>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href class="navbar__mobile-link" on:click=move |_| menu_open.set(false)>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
