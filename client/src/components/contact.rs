//! Contact section: inquiry form plus direct contact channels.
//!
//! ERROR HANDLING
//! ==============
//! Validation and server-side field rejections render inline under each
//! input. Transport, timeout, rate-limit, and server failures render as a
//! notice below the form and keep the typed values so the visitor can
//! retry. Only a successful send raises the blocking acknowledgment.

use leptos::html::Section;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::{CONTACT_CHANNELS, SPECIALTIES};
use crate::net::types::FormField;
use crate::state::contact::{ContactForm, FormNotice};
use crate::util::reveal::StaggerConfig;
use crate::util::viewport::{RevealOptions, fade_in_class, use_page_fade, use_reveal};

#[component]
pub fn Contact() -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let visible = use_reveal(section, RevealOptions::SECTION);
    let faded = use_page_fade(section);
    let stagger = StaggerConfig::SECTION;
    let list = StaggerConfig::LIST;
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_contact(&request).await;
            match &outcome {
                Ok(receipt) => log::info!("contact inquiry accepted: {}", receipt.id),
                Err(e) => log::warn!("contact inquiry failed: {e}"),
            }
            let _ = form.try_update(|f| f.finish_submit(outcome));
            if form.try_update(ContactForm::take_sent).flatten().is_some()
                && let Some(window) = web_sys::window()
            {
                let _ = window.alert_with_message(crate::state::contact::SENT_ACKNOWLEDGMENT);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let submitting = move || form.with(|f| f.submitting);
    let failure = move || {
        form.with(|f| match &f.notice {
            Some(FormNotice::Failed { message, retryable }) => Some((message.clone(), *retryable)),
            _ => None,
        })
    };

    view! {
        <section id="contact" class=move || fade_in_class("section contact", faded.get()) node_ref=section>
            <div class="container">
                <div class="section__header">
                    <h2 class="section__title" style=move || stagger.style(visible.get(), 0)>
                        "Let's "
                        <span class="gradient-text">"Build Together"</span>
                    </h2>
                    <p class="section__lead" style=move || stagger.style(visible.get(), 1)>
                        "Ready to transform your business with intelligent digital solutions? Let's discuss your \
                         project and create something amazing together."
                    </p>
                </div>

                <div class="contact__grid">
                    <div class="contact__form-card glass" style=move || stagger.style(visible.get(), 2)>
                        <h3 class="contact__form-title">"Send a Message"</h3>
                        <form class="contact-form" on:submit=on_submit novalidate=true>
                            <FormInput form=form field=FormField::Name label="Name" kind="text" placeholder="Your full name" />
                            <FormInput
                                form=form
                                field=FormField::Email
                                label="Email"
                                kind="email"
                                placeholder="your.email@example.com"
                            />
                            <FormInput
                                form=form
                                field=FormField::Message
                                label="Message"
                                kind="textarea"
                                placeholder="Tell me about your project and how I can help..."
                            />
                            <button class="btn btn--primary btn--block hover-glow" type="submit" disabled=submitting>
                                <Show when=submitting>
                                    <span class="spinner"></span>
                                </Show>
                                {move || form.with(ContactForm::submit_label)}
                            </button>
                            {move || {
                                failure()
                                    .map(|(message, retryable)| {
                                        view! {
                                            <p class="contact-form__notice" role="alert">
                                                {format!("Your message could not be sent: {message}.")}
                                                {retryable.then_some(" Please try again in a moment.")}
                                            </p>
                                        }
                                    })
                            }}
                        </form>
                    </div>

                    <div class="contact__info" style=move || stagger.style(visible.get(), 3)>
                        <div class="contact__channels">
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| {
                                    view! {
                                        <a href=channel.href class="channel glass hover-glow">
                                            <span class="channel__icon">{channel.icon}</span>
                                            <div>
                                                <h4 class="channel__title">{channel.title}</h4>
                                                <p class="channel__value">{channel.value}</p>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="contact__promise glass">
                            <h4>"Quick Response"</h4>
                            <p>
                                "I typically respond to all inquiries within 24 hours. For urgent projects, feel \
                                 free to call directly."
                            </p>
                        </div>
                        <div class="contact__specialties glass">
                            <h4>"I Specialize In:"</h4>
                            <ul>
                                {SPECIALTIES
                                    .iter()
                                    .enumerate()
                                    .map(|(i, item)| {
                                        view! {
                                            <li style=move || list.style(visible.get(), i)>
                                                <span class="dot accent--blue"></span>
                                                {*item}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Labeled input bound to one form field, with its inline error.
#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: FormField,
    label: &'static str,
    /// `text`, `email`, or `textarea`.
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = field.as_str();
    let value = move || form.with(|f| f.field(field).to_owned());
    let error = move || form.with(|f| f.error_for(field).map(str::to_owned));
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set_field(field, text));
    };
    let input_class = move || if error().is_some() { "field__input field__input--invalid" } else { "field__input" };

    let control = if kind == "textarea" {
        view! {
            <textarea
                id=id
                name=id
                rows="6"
                class=input_class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                name=id
                type=kind
                class=input_class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="field">
            <label for=id class="field__label">
                {label}
            </label>
            {control}
            {move || error().map(|message| view! { <p class="field__error">{message}</p> })}
        </div>
    }
}
