//! About section: introduction, belief statement, and headline stats.

use leptos::html::Section;
use leptos::prelude::*;

use crate::content::{ABOUT_PARAGRAPHS, ABOUT_STATS, BELIEF};
use crate::util::reveal::{StaggerConfig, container_style};
use crate::util::viewport::{RevealOptions, fade_in_class, use_page_fade, use_reveal};

#[component]
pub fn About() -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let visible = use_reveal(section, RevealOptions::ABOUT);
    let faded = use_page_fade(section);
    let stagger = StaggerConfig::SECTION;
    let child = move |index: usize| move || stagger.style(visible.get(), index);

    view! {
        <section id="about" class=move || fade_in_class("section about", faded.get()) node_ref=section>
            <div class="container about__grid" style=move || container_style(visible.get())>
                <div class="about__copy">
                    <h2 class="section__title" style=child(0)>
                        <span class="gradient-text">"About"</span>
                        " Ezz"
                    </h2>
                    <div class="about__paragraphs" style=child(1)>
                        <p>
                            "I'm "
                            <span class="text-neon-blue">"Abdelaziz \"Ezz\" Ashater"</span>
                            ", a digital transformation specialist passionate about creating intelligent, \
                             automated ecosystems that empower businesses to focus on what matters most."
                        </p>
                        {ABOUT_PARAGRAPHS.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}
                    </div>
                    <blockquote class="about__belief glass" style=child(2)>
                        <span class="text-neon-blue">"\""</span>
                        <span class="gradient-text">{BELIEF}</span>
                        <span class="text-neon-blue">"\""</span>
                    </blockquote>
                    <div class="about__stats" style=child(3)>
                        {ABOUT_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <div class="stat__value gradient-text">{stat.value}</div>
                                        <div class="stat__label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="about__portrait" style=child(4)>
                    <div class="about__frame glass">
                        <div class="about__monogram">"E"</div>
                        <p class="about__caption">"Digital Transformation Specialist"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
