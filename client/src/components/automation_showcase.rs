//! Workflow showcase that cycles through Trigger, Process, Action, Result.
//!
//! The stepper starts when the section first scrolls into view and keeps
//! cycling until the section unmounts.

use leptos::html::Section;
use leptos::prelude::*;

use crate::content::{BENEFITS, WORKFLOW_STEPS, WorkflowStep};
use crate::state::stepper::{CyclicStepper, STEP_INTERVAL_MS, StepStatus, WORKFLOW_STEP_COUNT};
use crate::util::reveal::StaggerConfig;
use crate::util::stepper::use_cyclic_stepper;
use crate::util::viewport::{RevealOptions, fade_in_class, use_page_fade, use_reveal};

/// Number of data dots drifting across the flowchart.
const DATA_DOTS: usize = 6;

#[component]
pub fn AutomationShowcase() -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let visible = use_reveal(section, RevealOptions::SECTION);
    let faded = use_page_fade(section);
    let stepper = use_cyclic_stepper(visible, WORKFLOW_STEP_COUNT, STEP_INTERVAL_MS);
    let stagger = StaggerConfig::SECTION;

    view! {
        <section id="automation" class=move || fade_in_class("section automation", faded.get()) node_ref=section>
            <div class="container">
                <div class="section__header">
                    <h2 class="section__title" style=move || stagger.style(visible.get(), 0)>
                        <span class="gradient-text">"AI Automation"</span>
                        " Showcase"
                    </h2>
                    <p class="section__lead" style=move || stagger.style(visible.get(), 1)>
                        "See how AI + n8n workflows connect everything together, creating intelligent systems \
                         that work 24/7 to grow your business."
                    </p>
                </div>

                <div class="automation__flow glass">
                    <div class="automation__steps">
                        {WORKFLOW_STEPS
                            .iter()
                            .enumerate()
                            .map(|(index, step)| {
                                view! { <StepCard step=*step index=index stepper=stepper visible=visible /> }
                            })
                            .collect_view()}
                    </div>
                    <div class=move || {
                        if visible.get() { "automation__dots automation__dots--live" } else { "automation__dots" }
                    }>
                        {(0..DATA_DOTS)
                            .map(|i| {
                                let style = format!("top:{}%;animation-delay:{}ms", 20 + i * 15, i * 500);
                                view! { <span class="automation__dot" style=style></span> }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="automation__benefits">
                    {BENEFITS
                        .iter()
                        .enumerate()
                        .map(|(index, benefit)| {
                            view! {
                                <div
                                    class="benefit glass hover-glow"
                                    style=move || stagger.style(visible.get(), index + 2)
                                >
                                    <div class="benefit__icon">{benefit.icon}</div>
                                    <h3 class="benefit__title">{benefit.title}</h3>
                                    <p class="benefit__description">{benefit.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="section__cta" style=move || stagger.style(visible.get(), BENEFITS.len() + 2)>
                    <a href="#contact" class="btn btn--primary btn--large hover-glow">"Automate Your Business"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(step: WorkflowStep, index: usize, stepper: Signal<CyclicStepper>, visible: Signal<bool>) -> impl IntoView {
    let stagger = StaggerConfig::SECTION;
    let status = move || stepper.with(|s| s.step_status(index));
    let is_active = move || status() == StepStatus::Active;
    let card_class = move || match status() {
        StepStatus::Active => "step-card glass step-card--active",
        StepStatus::Reached => "step-card glass step-card--reached",
        StepStatus::Upcoming => "step-card glass",
    };
    let has_connector = index + 1 < WORKFLOW_STEPS.len();
    let connector_class = move || {
        if stepper.with(|s| s.connector_lit(index)) {
            "step__connector step__connector--lit"
        } else {
            "step__connector"
        }
    };

    view! {
        <div class="step" style=move || stagger.style(visible.get(), index + 2)>
            <Show when=move || has_connector>
                <div class=connector_class style=format!("transition-delay:{}ms", index * 200)></div>
            </Show>
            <div class=card_class>
                <div class="step-card__icon">{step.icon}</div>
                <h3 class="step-card__title">{step.title}</h3>
                <p class="step-card__description">{step.description}</p>
                <div class="step-card__examples">
                    {step
                        .examples
                        .iter()
                        .enumerate()
                        .map(|(i, example)| {
                            let example_style = move || {
                                let (opacity, offset) = if is_active() { (1.0, 0) } else { (0.5, -20) };
                                format!(
                                    "opacity:{opacity};transform:translateX({offset}px);transition-delay:{}ms",
                                    i * 100,
                                )
                            };
                            view! {
                                <div class="step-card__example" style=example_style>
                                    <span class=format!("dot {}", step.accent)></span>
                                    {*example}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=is_active>
                    <span class="step-card__indicator"></span>
                </Show>
            </div>
        </div>
    }
}
