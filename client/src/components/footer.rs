//! Site footer with link groups, social links, and a newsletter teaser.

use leptos::prelude::*;

use crate::content::{FOOTER_LINK_GROUPS, SOCIAL_LINKS};
use crate::util::clock::copyright_year;

#[component]
pub fn Footer() -> impl IntoView {
    let year = copyright_year();

    view! {
        <footer class="footer">
            <div class="container footer__grid">
                <div class="footer__brand">
                    <div class="footer__logo">
                        <span class="footer__mark">"E"</span>
                        <span class="footer__name">"Ezz Digital"</span>
                    </div>
                    <p class="footer__tagline">
                        "Building intelligent digital ecosystems that empower businesses to focus on growth and innovation."
                    </p>
                    <div class="footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a href=social.href class="social-link hover-glow" aria-label=social.name>
                                        {social.icon}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                {FOOTER_LINK_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="footer__group">
                                <h3>{group.heading}</h3>
                                <ul>
                                    {group
                                        .links
                                        .iter()
                                        .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}

                <div class="footer__newsletter">
                    <h3>"Stay Updated"</h3>
                    <p>"Get the latest insights on digital transformation and AI automation."</p>
                    <form class="footer__signup" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                        <input type="email" class="field__input" placeholder="Enter your email" />
                        <button type="submit" class="btn btn--primary hover-glow">"Subscribe"</button>
                    </form>
                </div>
            </div>

            <div class="container footer__bottom">
                <div>{format!("© {year} Ezz Digital Solutions. All rights reserved.")}</div>
                <div class="footer__legal">
                    <a href="#">"Privacy"</a>
                    <a href="#">"Terms"</a>
                    <a href="#">"Cookies"</a>
                </div>
            </div>
        </footer>
    }
}
