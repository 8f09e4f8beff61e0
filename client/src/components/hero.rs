//! Landing hero: headline, calls to action, and pointer-driven decoration.
//!
//! The text block plays its stagger once after hydration rather than on
//! scroll, since the hero is in view on load. Orbs and the profile card
//! follow the shared pointer signal.

use leptos::html::Section;
use leptos::prelude::*;

use crate::util::pointer::use_pointer;
use crate::util::reveal::StaggerConfig;
use crate::util::viewport::{fade_in_class, use_mounted, use_page_fade};

/// Orb drift in pixels per percent of viewport travel.
const ORB_PRIMARY_FACTOR: (f64, f64) = (0.02, 0.02);
const ORB_SECONDARY_FACTOR: (f64, f64) = (-0.03, 0.03);
/// Profile card tilt in degrees per percent of viewport travel.
const TILT_FACTOR: f64 = 0.1;

#[component]
pub fn Hero() -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let faded = use_page_fade(section);
    let mounted = use_mounted();
    let pointer = use_pointer();
    let stagger = StaggerConfig::HERO;
    let child = move |index: usize| move || stagger.style(mounted.get(), index);

    let orb_style = move |(fx, fy): (f64, f64)| {
        move || {
            let (dx, dy) = pointer.get().parallax(fx, fy);
            format!("transform:translate({dx}px,{dy}px)")
        }
    };
    let card_tilt = move || {
        let (rotate_x, rotate_y) = pointer.get().tilt(TILT_FACTOR);
        format!("transform:perspective(1000px) rotateY({rotate_y}deg) rotateX({rotate_x}deg)")
    };

    view! {
        <section id="home" class=move || fade_in_class("hero", faded.get()) node_ref=section>
            <div class="hero__orb hero__orb--blue" style=orb_style(ORB_PRIMARY_FACTOR)></div>
            <div class="hero__orb hero__orb--purple" style=orb_style(ORB_SECONDARY_FACTOR)></div>

            <div class="container hero__grid">
                <div class="hero__copy">
                    <h1 class="hero__headline" style=child(0)>
                        <span class="gradient-text">"Building Intelligent"</span>
                        <br />
                        <span>"Digital Ecosystems"</span>
                        <br />
                        <span class="hero__headline-muted">"for the Future"</span>
                    </h1>
                    <p class="hero__subheadline" style=child(1)>
                        "From strategy to execution, we transform ideas into fully connected online ecosystems."
                    </p>
                    <p class="hero__tagline" style=child(2)>
                        "From Zero to Digital Hero — Building Smart, Scalable Ecosystems."
                    </p>
                    <div class="hero__actions" style=child(3)>
                        <a href="#contact" class="btn btn--primary hover-glow">"Start Your Transformation"</a>
                        <a href="#case-studies" class="btn btn--outline">"View Case Studies"</a>
                    </div>
                </div>

                <div class="hero__visual" style=child(2)>
                    <div class="hero__card glass" style=card_tilt>
                        <div class="hero__avatar">"E"</div>
                        <p class="hero__card-name">"Abdelaziz \"Ezz\" Ashater"</p>
                        <p class="hero__card-role">"Digital Transformation Specialist"</p>
                    </div>
                </div>
            </div>

            <a href="#about" class="hero__scroll-hint" aria-label="Scroll to about">
                <span class="hero__scroll-dot"></span>
            </a>
        </section>
    }
}
