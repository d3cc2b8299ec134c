//! Contact page. The form does not submit anywhere; "sending" is a staged
//! pending/success display driven by the same timer discipline as the
//! showcase, with handles parked for unmount cancellation.

use gloo::timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::home::SectionTitle;

const SUBMIT_DELAY_MS: u32 = 1500;
const SUCCESS_BANNER_MS: u32 = 3000;

const PROJECT_TYPES: &[(&str, &str)] = &[
    ("salesforce", "Salesforce Development"),
    ("mern", "MERN Stack Application"),
    ("zoho", "Zoho CRM Integration"),
    ("fullstack", "Full-Stack Development"),
    ("consultation", "Technical Consultation"),
    ("other", "Other"),
];

const SERVICES: &[(&str, &str)] = &[
    ("cert-dot-blue", "Salesforce Development & Customization"),
    ("cert-dot-green", "MERN Stack Applications"),
    ("cert-dot-purple", "Zoho CRM Integration & Automation"),
    ("cert-dot-orange", "API Development & Integration"),
    ("cert-dot-cyan", "Technical Consultation"),
];

#[derive(Clone, Default, PartialEq)]
struct FormData {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[derive(Default)]
struct ContactTimers {
    submit: Option<Timeout>,
    banner: Option<Timeout>,
}

#[function_component(Contact)]
pub(crate) fn contact() -> Html {
    let form = use_state(FormData::default);
    let submitting = use_state(|| false);
    let submitted = use_state(|| false);
    let timers = use_mut_ref(ContactTimers::default);

    {
        let timers = timers.clone();
        use_effect_with((), move |_| {
            move || {
                *timers.borrow_mut() = ContactTimers::default();
            }
        });
    }

    let edit = |field: fn(&mut FormData, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| {
                    event
                        .target_dyn_into::<HtmlTextAreaElement>()
                        .map(|area| area.value())
                })
                .unwrap_or_default();
            let mut next = (*form).clone();
            field(&mut next, value);
            form.set(next);
        })
    };
    let on_name = edit(|form, value| form.name = value);
    let on_email = edit(|form, value| form.email = value);
    let on_message = edit(|form, value| form.message = value);
    let on_subject = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.subject = select.value();
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        let timers = timers.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting || *submitted {
                return;
            }
            submitting.set(true);
            let form = form.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            let timers_inner = timers.clone();
            timers.borrow_mut().submit = Some(Timeout::new(SUBMIT_DELAY_MS, move || {
                submitting.set(false);
                submitted.set(true);
                form.set(FormData::default());
                let submitted = submitted.clone();
                timers_inner.borrow_mut().banner =
                    Some(Timeout::new(SUCCESS_BANNER_MS, move || submitted.set(false)));
            }));
        })
    };

    let send_label = if *submitting {
        html! { <>{ "Sending..." }</> }
    } else if *submitted {
        html! { <>{ "✓ Message Sent!" }</> }
    } else {
        html! { <>{ "Send Message" }</> }
    };

    let type_options: Html = PROJECT_TYPES
        .iter()
        .map(|(value, label)| {
            html! {
                <option value={*value} selected={form.subject == *value}>{ *label }</option>
            }
        })
        .collect();

    let services: Html = SERVICES
        .iter()
        .map(|(dot, text)| {
            html! {
                <div class="cert-row">
                    <div class={classes!("cert-dot", *dot)} />
                    <span>{ *text }</span>
                </div>
            }
        })
        .collect();

    let submit_class = classes!(
        "btn-submit",
        (*submitted).then_some("btn-submit-success"),
    );

    html! {
        <div class="page page-contact">
            <section class="section-padding">
                <SectionTitle
                    label="Contact"
                    title={html! { <>
                        { "Let's Build Something " }
                        <span class="epic-text">{ "EPIC" }</span>
                        { " Together" }
                    </> }}
                    subtitle="Ready to bring your ideas to life? I'm available for freelance projects, full-time opportunities, and collaboration. Let's create something amazing!"
                />

                <div class="container-g contact-grid">
                    <div class="glass-card">
                        <h3 class="panel-heading epic-text">{ "Send me a message" }</h3>
                        <form class="contact-form" onsubmit={on_submit}>
                            <div class="form-pair">
                                <div class="form-field">
                                    <label for="name">{ "Full Name *" }</label>
                                    <input
                                        type="text"
                                        id="name"
                                        required={true}
                                        placeholder="Your full name"
                                        value={form.name.clone()}
                                        oninput={on_name}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="email">{ "Email Address *" }</label>
                                    <input
                                        type="email"
                                        id="email"
                                        required={true}
                                        placeholder="your.email@example.com"
                                        value={form.email.clone()}
                                        oninput={on_email}
                                    />
                                </div>
                            </div>
                            <div class="form-field">
                                <label for="subject">{ "Project Type *" }</label>
                                <select id="subject" required={true} onchange={on_subject}>
                                    <option value="" selected={form.subject.is_empty()}>
                                        { "Select project type" }
                                    </option>
                                    { type_options }
                                </select>
                            </div>
                            <div class="form-field">
                                <label for="message">{ "Project Details *" }</label>
                                <textarea
                                    id="message"
                                    required={true}
                                    rows="6"
                                    placeholder="Tell me about your project, timeline, and requirements..."
                                    value={form.message.clone()}
                                    oninput={on_message}
                                />
                            </div>
                            <button
                                type="submit"
                                class={submit_class}
                                disabled={*submitting || *submitted}
                            >
                                { send_label }
                            </button>
                        </form>
                    </div>

                    <div class="contact-side">
                        <div class="glass-card">
                            <h3 class="panel-heading epic-text">{ "Get in touch" }</h3>
                            <div class="contact-rows">
                                <div class="contact-row">
                                    <div class="contact-badge icon-blue">{ "✉" }</div>
                                    <div>
                                        <h4>{ "Email" }</h4>
                                        <a href="mailto:2mustafa.exe@gmail.com">
                                            { "2mustafa.exe@gmail.com" }
                                        </a>
                                    </div>
                                </div>
                                <div class="contact-row">
                                    <div class="contact-badge icon-emerald">{ "☎" }</div>
                                    <div>
                                        <h4>{ "Phone" }</h4>
                                        <a href="tel:+923052229343">{ "+92 305-2229343" }</a>
                                    </div>
                                </div>
                                <div class="contact-row">
                                    <div class="contact-badge icon-violet">{ "📍" }</div>
                                    <div>
                                        <h4>{ "Location" }</h4>
                                        <p>{ "31 Farooq Avenue, Johar Town, Lahore" }</p>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="glass-card">
                            <h3 class="panel-heading epic-text">{ "Connect with me" }</h3>
                            <div class="social-row">
                                <a
                                    class="social-badge social-linkedin"
                                    href="https://linkedin.com/in/mustafa-exe"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    { "in" }
                                </a>
                                <a
                                    class="social-badge social-github"
                                    href="https://github.com/Mustafa-exe"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    { "gh" }
                                </a>
                            </div>
                        </div>

                        <div class="glass-card">
                            <h3 class="panel-heading epic-text">{ "Availability" }</h3>
                            <div class="availability-row">
                                <div class="availability-pulse" />
                                <span>{ "Currently Available" }</span>
                            </div>
                            <p>
                                { "Ready for freelance projects and full-time Salesforce/MERN \
                                   opportunities." }
                            </p>
                            <p class="availability-note">
                                { "⏱ Response time: Usually within 24 hours" }
                            </p>
                        </div>

                        <div class="glass-card">
                            <h3 class="panel-heading epic-text">{ "Services" }</h3>
                            <div class="cert-list">{ services }</div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
