//! Home page: hero, the gated project showcase, and the sections that mount
//! once the gate opens. This component owns the unlock gate and the viewport
//! scroll policy; the showcase only reports the unlock through its callback.

use yew::prelude::*;
use yew_router::prelude::*;

use epicfolio_core::{featured_projects, UnlockGate};

use crate::app_router::Route;
use crate::effects::{BackgroundOrbs, CursorFollower};
use crate::project_card::ProjectCard;
use crate::scroll_policy::ViewportScrollPolicy;
use crate::showcase::ProjectShowcase;
use crate::skills::SkillsSection;
use crate::testimonials::TestimonialsSection;

#[derive(Properties, PartialEq)]
pub(crate) struct SectionTitleProps {
    pub label: AttrValue,
    pub title: Html,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionTitle)]
pub(crate) fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <div class="section-label glass-premium">
                <div class="section-label-dot" />
                { props.label.clone() }
            </div>
            <h2 class="section-heading">{ props.title.clone() }</h2>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="section-subtitle">{ subtitle }</p>
            }
        </div>
    }
}

#[function_component(Home)]
pub(crate) fn home() -> Html {
    let unlocked = use_state(|| false);
    let gate = use_mut_ref(UnlockGate::new);

    let on_unlock = {
        let unlocked = unlocked.clone();
        let gate = gate.clone();
        Callback::from(move |value: bool| {
            if value && gate.borrow_mut().unlock() {
                gloo::console::log!("portfolio unlocked");
                unlocked.set(true);
            }
        })
    };

    // Scroll stays locked until the gate opens; unmount always restores it.
    use_effect_with(*unlocked, move |unlocked| {
        let policy = ViewportScrollPolicy::new();
        if *unlocked {
            policy.unlock();
        } else {
            policy.lock();
        }
        move || policy.unlock()
    });

    let featured_grid: Html = featured_projects()
        .iter()
        .map(|entry| {
            html! {
                <div class="floating-card">
                    <ProjectCard entry={entry} />
                </div>
            }
        })
        .collect();

    html! {
        <div class="page page-home">
            <CursorFollower />

            <section class="hero">
                <BackgroundOrbs />
                <div class="container-g hero-intro">
                    <h1 class="hero-heading">
                        { "Building " }
                        <span class="epic-text">{ "Epic" }</span>
                        { " Digital Solutions" }
                    </h1>
                    <p class="hero-lede">
                        { "Muhammad Mustafa — Computer Science graduate specializing in \
                           Salesforce Development, Zoho integrations, and MERN stack projects. \
                           Scroll through my featured projects below!" }
                    </p>
                </div>
                <ProjectShowcase on_unlock={on_unlock} />
            </section>

            if *unlocked {
                <div class="unlocked-content">
                    <section class="section-padding">
                        <SectionTitle
                            label="About"
                            title={html! { <>
                                { "Computer Science graduate with " }
                                <span class="epic-text">{ "Epic" }</span>
                                { " Salesforce mastery" }
                            </> }}
                            subtitle="I bridge the gap between enterprise solutions and modern development, creating scalable platforms with 30+ Salesforce certifications and hands-on MERN stack expertise."
                        />
                        <div class="container-g card-trio">
                            <div class="glass-card intro-card floating-card">
                                <div class="intro-icon icon-blue">{ "🌐" }</div>
                                <h3>
                                    <span class="epic-text">{ "Epic" }</span>
                                    { " Salesforce Development" }
                                </h3>
                                <p>
                                    { "30+ Trailhead certifications, Lightning Web Components, Apex \
                                       development, and Experience Cloud customization. \
                                       Enterprise-grade solutions." }
                                </p>
                            </div>
                            <div class="glass-card intro-card floating-card">
                                <div class="intro-icon icon-violet">{ "⌨" }</div>
                                <h3>
                                    { "MERN Stack " }
                                    <span class="epic-text">{ "Mastery" }</span>
                                </h3>
                                <p>
                                    { "MongoDB, Express.js, React, Node.js expertise. Building \
                                       full-stack applications with modern architecture and \
                                       scalable solutions." }
                                </p>
                            </div>
                            <div class="glass-card intro-card floating-card">
                                <div class="intro-icon icon-emerald">{ "🔗" }</div>
                                <h3>
                                    { "CRM " }
                                    <span class="epic-text">{ "Integration" }</span>
                                </h3>
                                <p>
                                    { "Zoho CRM automation, API integrations, webhooks, and \
                                       workflow optimization. Streamlining business processes." }
                                </p>
                            </div>
                        </div>
                        <div class="section-cta">
                            <Link<Route> to={Route::About} classes="btn-secondary">
                                { "Learn More About Me →" }
                            </Link<Route>>
                        </div>
                    </section>

                    <section class="section-padding section-shaded">
                        <SectionTitle
                            label="Featured Work"
                            title={html! { <>
                                <span class="epic-text">{ "Epic" }</span>
                                { " Projects That Perform" }
                            </> }}
                            subtitle="A selection of my best work showcasing Salesforce expertise, MERN stack development, and innovative solutions."
                        />
                        <div class="container-g project-grid">{ featured_grid }</div>
                        <div class="section-cta">
                            <Link<Route> to={Route::Projects} classes="btn-primary">
                                { "View All Projects →" }
                            </Link<Route>>
                        </div>
                    </section>

                    <SkillsSection />
                    <TestimonialsSection />

                    <section class="section-padding">
                        <SectionTitle
                            label="Contact"
                            title={html! { <>
                                { "Have a brief? Let's build something " }
                                <span class="epic-text">{ "EPIC" }</span>
                                { "." }
                            </> }}
                        />
                        <div class="container-g card-duo">
                            <div class="glass-card floating-card">
                                <h3>
                                    <span class="epic-text">{ "Epic" }</span>
                                    { " Email" }
                                </h3>
                                <a class="contact-link" href="mailto:2mustafa.exe@gmail.com">
                                    { "2mustafa.exe@gmail.com" }
                                </a>
                            </div>
                            <div class="glass-card floating-card">
                                <h3>{ "Availability" }</h3>
                                <p>
                                    { "Ready for freelance projects and full-time \
                                       Salesforce/MERN opportunities." }
                                </p>
                            </div>
                        </div>
                        <div class="section-cta">
                            <Link<Route> to={Route::Contact} classes="btn-primary">
                                { "Get In Touch ✉" }
                            </Link<Route>>
                        </div>
                    </section>
                </div>
            }
        </div>
    }
}
