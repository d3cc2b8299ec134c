use yew::prelude::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    content: &'static str,
    rating: u32,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Riphah University",
        role: "Academic Achievement",
        company: "Computing Department",
        content: "Muhammad Mustafa demonstrated exceptional leadership managing the Riphah \
                  Computing Cup and recruitment drives. His technical expertise in Salesforce \
                  and MERN stack projects was outstanding.",
        rating: 5,
    },
    Testimonial {
        name: "Chess Excellence",
        role: "Best Chess Player",
        company: "Riphah University",
        content: "Awarded Best Chess Player at Riphah University, demonstrating strategic \
                  thinking and problem-solving skills that translate perfectly to software \
                  development challenges.",
        rating: 5,
    },
    Testimonial {
        name: "Project Excellence",
        role: "Technical Innovation",
        company: "Portfolio Projects",
        content: "Successfully delivered 10+ complex projects including Sportshub community \
                  platform, Salesforce LWC portals, and Zoho CRM integrations. Each project \
                  showcased technical mastery and innovation.",
        rating: 5,
    },
];

const CLIENTS: &[&str] = &[
    "Salesforce",
    "Zoho CRM",
    "Riphah University",
    "MongoDB",
    "Express.js",
    "React Projects",
];

#[function_component(TestimonialsSection)]
pub(crate) fn testimonials_section() -> Html {
    let cards: Html = TESTIMONIALS
        .iter()
        .map(|item| {
            let stars: Html = (0..5)
                .map(|i| {
                    let class = if i < item.rating {
                        "star star-filled"
                    } else {
                        "star"
                    };
                    html! { <span {class}>{ "★" }</span> }
                })
                .collect();
            let initial = item.name.chars().next().unwrap_or('•');
            html! {
                <div class="glass-card testimonial-card">
                    <span class="testimonial-quote">{ "❝" }</span>
                    <div class="testimonial-head">
                        <div class="testimonial-avatar">{ initial }</div>
                        <div>
                            <h4 class="testimonial-name">{ item.name }</h4>
                            <p class="testimonial-role">
                                { format!("{} at {}", item.role, item.company) }
                            </p>
                        </div>
                    </div>
                    <div class="testimonial-stars">{ stars }</div>
                    <p class="testimonial-content">{ item.content }</p>
                </div>
            }
        })
        .collect();

    let clients: Html = CLIENTS
        .iter()
        .map(|client| html! { <div class="glass-premium client-chip">{ *client }</div> })
        .collect();

    html! {
        <section class="section-padding section-shaded">
            <div class="container-g">
                <div class="section-title">
                    <p class="section-kicker">{ "Testimonials" }</p>
                    <h2 class="section-heading gradient-text">{ "What Clients Say" }</h2>
                    <p class="section-subtitle">
                        { "Real feedback from real projects. Results that speak louder \
                           than words." }
                    </p>
                </div>
                <div class="testimonial-grid">{ cards }</div>
                <div class="client-band">
                    <h3 class="panel-heading">{ "Trusted by" }</h3>
                    <div class="client-row">{ clients }</div>
                </div>
            </div>
        </section>
    }
}
