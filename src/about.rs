use yew::prelude::*;

use crate::home::SectionTitle;
use crate::skills::SkillsSection;

const ACHIEVEMENTS: &[(&str, &str)] = &[
    ("🏆", "Best Chess Player at Riphah University"),
    ("👥", "Managed Riphah Computing Cup & Recruitment"),
    ("🎯", "Volunteer in Community Food Distribution"),
];

const KEY_CERTIFICATIONS: &[(&str, &str)] = &[
    ("cert-dot-blue", "30+ Salesforce Trailhead Certificates"),
    ("cert-dot-green", "C++ Certification (Cisco)"),
    ("cert-dot-purple", "Java Certification (Great Learning)"),
    ("cert-dot-orange", "Cybersecurity (HP LIFE)"),
    ("cert-dot-cyan", "Front-End Development Certified"),
];

#[function_component(About)]
pub(crate) fn about() -> Html {
    let achievements: Html = ACHIEVEMENTS
        .iter()
        .map(|(icon, text)| {
            html! {
                <div class="achievement-row">
                    <span class="achievement-icon">{ *icon }</span>
                    <span>{ *text }</span>
                </div>
            }
        })
        .collect();

    let certifications: Html = KEY_CERTIFICATIONS
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

    html! {
        <div class="page page-about">
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
                               development, and Experience Cloud customization." }
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
                               full-stack applications with modern architecture." }
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
                               workflow optimization." }
                        </p>
                    </div>
                </div>

                <div class="container-g">
                    <div class="glass-card journey-card">
                        <h3 class="panel-heading epic-text">{ "My Journey" }</h3>
                        <div class="journey-grid">
                            <div>
                                <p>
                                    { "Graduated with a Bachelor's in Computer Science from Riphah \
                                       International University, where I discovered my passion for \
                                       enterprise solutions and modern web development." }
                                </p>
                                <p>
                                    { "Through hands-on internships and personal projects, I've \
                                       specialized in Salesforce Development, Zoho integrations, \
                                       and MERN stack applications, building solutions that matter." }
                                </p>
                            </div>
                            <div class="achievement-list">{ achievements }</div>
                        </div>
                    </div>
                </div>

                <div class="container-g">
                    <SectionTitle
                        label="Education & Certifications"
                        title={html! { <>
                            { "Continuous Learning & " }
                            <span class="epic-text">{ "Excellence" }</span>
                        </> }}
                    />
                    <div class="card-duo">
                        <div class="glass-card">
                            <h4 class="panel-heading epic-text">{ "Education" }</h4>
                            <h5 class="edu-degree">{ "Bachelor's in Computer Science" }</h5>
                            <p class="edu-school">{ "Riphah International University" }</p>
                            <p class="edu-focus">
                                { "Focus: Software Development, Database Systems, Web Technologies" }
                            </p>
                        </div>
                        <div class="glass-card">
                            <h4 class="panel-heading epic-text">{ "Key Certifications" }</h4>
                            <div class="cert-list">{ certifications }</div>
                        </div>
                    </div>
                </div>
            </section>

            <SkillsSection />
        </div>
    }
}
