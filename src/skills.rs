use yew::prelude::*;

struct Skill {
    name: &'static str,
    level: u32,
    bar: &'static str,
}

const SKILLS: &[Skill] = &[
    Skill { name: "Salesforce Development", level: 95, bar: "bar-blue" },
    Skill { name: "MERN Stack", level: 90, bar: "bar-blue" },
    Skill { name: "Java & C++", level: 85, bar: "bar-green" },
    Skill { name: "Zoho CRM Integration", level: 88, bar: "bar-purple" },
    Skill { name: "API Development", level: 82, bar: "bar-green" },
    Skill { name: "Database Management", level: 86, bar: "bar-orange" },
];

const CERTIFICATIONS: &[&str] = &[
    "30+ Salesforce Trailhead Certificates",
    "C++ Certification (Cisco)",
    "Java Certification (Great Learning)",
    "Cybersecurity (HP LIFE)",
    "Front-End Development Certified",
];

const SERVICES: &[&str] = &[
    "Webflow Sites",
    "React Apps",
    "Web3 dApps",
    "UI/UX Design",
    "API Integration",
    "Performance Optimization",
];

#[function_component(SkillsSection)]
pub(crate) fn skills_section() -> Html {
    let bars: Html = SKILLS
        .iter()
        .map(|skill| {
            let fill_class = classes!("skill-fill", skill.bar);
            let fill_style = format!("width: {}%;", skill.level);
            html! {
                <div class="skill-row">
                    <div class="skill-row-head">
                        <span class="skill-name">{ skill.name }</span>
                        <span class="skill-level">{ format!("{}%", skill.level) }</span>
                    </div>
                    <div class="skill-track">
                        <div class={fill_class} style={fill_style} />
                    </div>
                </div>
            }
        })
        .collect();

    let certifications: Html = CERTIFICATIONS
        .iter()
        .map(|cert| {
            html! {
                <div class="cert-row">
                    <div class="cert-dot" />
                    <span>{ *cert }</span>
                </div>
            }
        })
        .collect();

    let services: Html = SERVICES
        .iter()
        .map(|service| html! { <div class="service-cell">{ *service }</div> })
        .collect();

    html! {
        <section class="section-padding">
            <div class="container-g">
                <div class="section-title">
                    <p class="section-kicker">{ "Expertise" }</p>
                    <h2 class="section-heading gradient-text">{ "Skills & Technologies" }</h2>
                    <p class="section-subtitle">
                        { "From Webflow wizardry to Web3 integration, here's what I bring \
                           to every project." }
                    </p>
                </div>
                <div class="skills-grid">
                    <div class="glass-card">
                        <h3 class="panel-heading">{ "Technical Skills" }</h3>
                        <div class="skill-list">{ bars }</div>
                    </div>
                    <div class="skills-side">
                        <div class="glass-card">
                            <h3 class="panel-heading">{ "Certifications" }</h3>
                            <div class="cert-list">{ certifications }</div>
                        </div>
                        <div class="glass-card">
                            <h3 class="panel-heading">{ "Services" }</h3>
                            <div class="service-grid">{ services }</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
