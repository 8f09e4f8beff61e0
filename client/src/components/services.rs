//! Services grid with a faster card cascade than other sections.

use leptos::html::Section;
use leptos::prelude::*;

use crate::content::SERVICES;
use crate::util::reveal::StaggerConfig;
use crate::util::viewport::{RevealOptions, fade_in_class, use_page_fade, use_reveal};

#[component]
pub fn Services() -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let visible = use_reveal(section, RevealOptions::SECTION);
    let faded = use_page_fade(section);
    let header = StaggerConfig::SECTION;
    let cards = StaggerConfig::SERVICES;
    let features = StaggerConfig::LIST;

    view! {
        <section id="services" class=move || fade_in_class("section services", faded.get()) node_ref=section>
            <div class="container">
                <div class="section__header">
                    <h2 class="section__title" style=move || header.style(visible.get(), 0)>
                        <span class="gradient-text">"Core Services"</span>
                    </h2>
                    <p class="section__lead" style=move || header.style(visible.get(), 1)>
                        "Comprehensive digital solutions designed to transform your business into a connected, \
                         intelligent ecosystem"
                    </p>
                </div>

                <div class="services__grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| {
                            view! {
                                <article
                                    class="service-card glass hover-glow"
                                    style=move || cards.style(visible.get(), index)
                                >
                                    <div class=format!("service-card__icon {}", service.accent)>{service.icon}</div>
                                    <h3 class="service-card__title">{service.title}</h3>
                                    <p class="service-card__description">{service.description}</p>
                                    <ul class="service-card__features">
                                        {service
                                            .features
                                            .iter()
                                            .enumerate()
                                            .map(|(i, feature)| {
                                                view! {
                                                    <li style=move || features.style(visible.get(), i)>
                                                        <span class=format!("dot {}", service.accent)></span>
                                                        {*feature}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="section__cta" style=move || header.style(visible.get(), 2)>
                    <a href="#contact" class="btn btn--primary hover-glow">"Get Started Today"</a>
                </div>
            </div>
        </section>
    }
}
