use leptos::{either::Either, ev::SubmitEvent, html, prelude::*, task::spawn_local};

use crate::contact::{
    plan_submission, post_contact, ContactForm, FieldErrors, SubmissionPlan, SubmitStatus,
};
use crate::content::SOCIAL_LINKS;

#[component]
pub fn ContactSection(section_ref: NodeRef<html::Section>) -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let honeypot_ref = NodeRef::<html::Input>::new();

    let (errors, set_errors) = signal(FieldErrors::default());
    let (status, set_status) = signal(SubmitStatus::Idle);
    let (submitting, set_submitting) = signal(false);

    let reset_fields = move || {
        for input in [name_ref, email_ref, honeypot_ref] {
            if let Some(el) = input.get_untracked() {
                el.set_value("");
            }
        }
        if let Some(el) = message_ref.get_untracked() {
            el.set_value("");
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(name_el), Some(email_el), Some(message_el)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            set_status.set(SubmitStatus::Error);
            return;
        };
        let form = ContactForm {
            name: name_el.value(),
            email: email_el.value(),
            message: message_el.value(),
            honeypot: honeypot_ref.get_untracked().map(|el| el.value()),
        };

        set_submitting.set(true);
        set_status.set(SubmitStatus::Idle);
        match plan_submission(&form) {
            SubmissionPlan::FeignSuccess => {
                // act as if sent to deter bots
                set_errors.set(FieldErrors::default());
                set_status.set(SubmitStatus::Success);
                set_submitting.set(false);
                reset_fields();
            }
            SubmissionPlan::Reject(field_errors) => {
                set_errors.set(field_errors);
                set_submitting.set(false);
            }
            SubmissionPlan::Relay => {
                set_errors.set(FieldErrors::default());
                spawn_local(async move {
                    match post_contact(&form).await {
                        Ok(()) => {
                            set_status.set(SubmitStatus::Success);
                            reset_fields();
                        }
                        Err(err) => {
                            log::error!("error submitting form: {err}");
                            set_status.set(SubmitStatus::Error);
                        }
                    }
                    set_submitting.set(false);
                });
            }
        }
    };

    view! {
        <section node_ref=section_ref id="contact" class="py-20 section-content">
            <div class="max-w-5xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-4">"Get In Touch"</h2>
                <p class="text-center text-muted mb-12 max-w-2xl mx-auto">
                    "I'm always open to discussing new opportunities and interesting projects. Let's connect and create something amazing together!"
                </p>
                <div class="flex flex-col lg:flex-row gap-12">
                    <form class="flex-1 space-y-4" novalidate=true on:submit=on_submit>
                        <input
                            node_ref=honeypot_ref
                            type="text"
                            name="honeypot"
                            style="display: none"
                            tabindex="-1"
                            autocomplete="off"
                        />
                        <div>
                            <label for="name" class="block mb-1 font-medium">
                                "Name *"
                            </label>
                            <input
                                node_ref=name_ref
                                id="name"
                                type="text"
                                class="w-full px-4 py-2 rounded-md border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-cyan"
                            />
                            {move || {
                                errors
                                    .get()
                                    .name
                                    .map(|msg| view! { <span class="text-sm text-red">{msg}</span> })
                            }}
                        </div>
                        <div>
                            <label for="email" class="block mb-1 font-medium">
                                "Email *"
                            </label>
                            <input
                                node_ref=email_ref
                                id="email"
                                type="email"
                                class="w-full px-4 py-2 rounded-md border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-cyan"
                            />
                            {move || {
                                errors
                                    .get()
                                    .email
                                    .map(|msg| view! { <span class="text-sm text-red">{msg}</span> })
                            }}
                        </div>
                        <div>
                            <label for="message" class="block mb-1 font-medium">
                                "Message *"
                            </label>
                            <textarea
                                node_ref=message_ref
                                id="message"
                                rows="5"
                                class="w-full px-4 py-2 rounded-md border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-cyan"
                            ></textarea>
                            {move || {
                                errors
                                    .get()
                                    .message
                                    .map(|msg| view! { <span class="text-sm text-red">{msg}</span> })
                            }}
                        </div>
                        <button
                            type="submit"
                            class="w-full sm:w-auto bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30 disabled:opacity-60"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                        </button>
                        {move || match status.get() {
                            SubmitStatus::Idle => None,
                            SubmitStatus::Success => {
                                Some(
                                    Either::Left(
                                        view! {
                                            <div class="p-3 rounded-md bg-green/20 text-green">
                                                "Thank you! Your message has been sent successfully."
                                            </div>
                                        },
                                    ),
                                )
                            }
                            SubmitStatus::Error => {
                                Some(
                                    Either::Right(
                                        view! {
                                            <div class="p-3 rounded-md bg-red/20 text-red">
                                                "Sorry, there was an error sending your message. Please try again."
                                            </div>
                                        },
                                    ),
                                )
                            }
                        }}
                    </form>
                    <div class="lg:w-72">
                        <h3 class="text-xl font-bold mb-6">"Connect With Me"</h3>
                        <div class="flex flex-col gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center gap-3 p-3 rounded-md bg-brightBlack/30 hover:bg-brightBlack/50 transition-colors"
                                            aria-label=format!("Visit {} profile", link.name)
                                        >
                                            <i class=format!("{} text-2xl text-cyan", link.icon)></i>
                                            <span>{link.name}</span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
