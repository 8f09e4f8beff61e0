//! Case studies with alternating text and mockup columns.

use leptos::html::Section;
use leptos::prelude::*;

use crate::content::{CASE_STUDIES, CaseStudy};
use crate::util::reveal::StaggerConfig;
use crate::util::viewport::{RevealOptions, fade_in_class, use_page_fade, use_reveal};

#[component]
pub fn CaseStudies() -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let visible = use_reveal(section, RevealOptions::SECTION);
    let faded = use_page_fade(section);
    let stagger = StaggerConfig::SECTION;

    view! {
        <section id="case-studies" class=move || fade_in_class("section case-studies", faded.get()) node_ref=section>
            <div class="container">
                <div class="section__header">
                    <h2 class="section__title" style=move || stagger.style(visible.get(), 0)>
                        <span class="gradient-text">"Success Stories"</span>
                    </h2>
                    <p class="section__lead" style=move || stagger.style(visible.get(), 1)>
                        "Real results from real projects. See how we've transformed businesses across different \
                         industries with intelligent digital solutions."
                    </p>
                </div>
                <div class="case-studies__list">
                    {CASE_STUDIES
                        .iter()
                        .enumerate()
                        .map(|(index, study)| view! { <CaseStudyRow study=*study index=index visible=visible /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CaseStudyRow(study: CaseStudy, index: usize, visible: Signal<bool>) -> impl IntoView {
    let row = StaggerConfig::SECTION;
    let chips = StaggerConfig::CHIP;
    let row_class = if index % 2 == 1 { "case-study case-study--reversed" } else { "case-study" };

    view! {
        <div class=row_class style=move || row.style(visible.get(), index + 2)>
            <div class="case-study__body">
                <div class="case-study__heading">
                    <span class=format!("case-study__icon {}", study.accent)>{study.icon}</span>
                    <div>
                        <h3 class="case-study__title">{study.title}</h3>
                        <p class="case-study__subtitle">{study.subtitle}</p>
                    </div>
                </div>
                <p class="case-study__description">{study.description}</p>
                <div class="case-study__metrics">
                    {study
                        .results
                        .iter()
                        .enumerate()
                        .map(|(i, metric)| {
                            view! {
                                <div class="metric glass" style=move || chips.style(visible.get(), i)>
                                    <div class=format!("metric__value gradient-fill {}", study.accent)>
                                        {metric.value}
                                    </div>
                                    <div class="metric__label">{metric.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="case-study__tags">
                    {study
                        .services
                        .iter()
                        .enumerate()
                        .map(|(i, tag)| {
                            view! {
                                <span
                                    class=format!("tag {}", study.accent)
                                    style=move || chips.style(visible.get(), i)
                                >
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="case-study__visual">
                <div class="case-study__mockup glass hover-glow">
                    <div class="case-study__screen">
                        <div class="case-study__emoji">{study.icon}</div>
                        <div class="case-study__screen-title">{study.title}</div>
                        <div class="case-study__screen-subtitle">{study.subtitle}</div>
                    </div>
                    <span class="case-study__float case-study__float--blue"></span>
                    <span class="case-study__float case-study__float--purple"></span>
                </div>
            </div>
        </div>
    }
}
