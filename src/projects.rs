use web_sys::HtmlInputElement;
use yew::prelude::*;

use epicfolio_core::catalog::{project_matches, PROJECT_CATALOG, PROJECT_CATEGORIES};

use crate::home::SectionTitle;
use crate::project_card::ProjectCard;

const STATS: &[(&str, &str)] = &[
    ("10+", "Projects Completed"),
    ("6", "Technology Stacks"),
    ("30+", "Salesforce Certs"),
    ("100%", "Client Satisfaction"),
];

#[function_component(Projects)]
pub(crate) fn projects() -> Html {
    let category = use_state(|| "All");
    let query = use_state(String::new);

    let on_query = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_clear = {
        let category = category.clone();
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            category.set("All");
            query.set(String::new());
        })
    };

    let category_buttons: Html = PROJECT_CATEGORIES
        .iter()
        .map(|&item| {
            let class = if item == *category {
                "filter-button filter-button-active"
            } else {
                "filter-button"
            };
            let on_pick = {
                let category = category.clone();
                Callback::from(move |_: MouseEvent| category.set(item))
            };
            html! { <button {class} onclick={on_pick}>{ item }</button> }
        })
        .collect();

    let matches: Vec<_> = PROJECT_CATALOG
        .iter()
        .filter(|entry| project_matches(entry, *category, &query))
        .collect();

    let grid: Html = matches
        .iter()
        .map(|&entry| {
            html! {
                <div class="floating-card">
                    <ProjectCard entry={entry} />
                </div>
            }
        })
        .collect();

    let stats: Html = STATS
        .iter()
        .map(|(value, label)| {
            html! {
                <div class="stat-cell">
                    <div class="stat-value epic-text">{ *value }</div>
                    <div class="stat-label">{ *label }</div>
                </div>
            }
        })
        .collect();

    html! {
        <div class="page page-projects">
            <section class="section-padding">
                <SectionTitle
                    label="Portfolio"
                    title={html! { <>
                        <span class="epic-text">{ "Epic" }</span>
                        { " Projects That Perform" }
                    </> }}
                    subtitle="From enterprise Salesforce solutions to MERN stack applications. Each project showcases technical excellence and innovative problem-solving."
                />

                <div class="container-g">
                    <div class="glass-card filter-bar">
                        <div class="search-box">
                            <span class="search-icon">{ "🔍" }</span>
                            <input
                                type="text"
                                class="search-input"
                                placeholder="Search projects..."
                                value={(*query).clone()}
                                oninput={on_query}
                            />
                        </div>
                        <div class="filter-row">{ category_buttons }</div>
                    </div>
                </div>

                <div class="container-g">
                    if matches.is_empty() {
                        <div class="empty-state">
                            <p>{ "No projects found matching your criteria." }</p>
                            <button class="btn-primary" onclick={on_clear}>
                                { "Clear Filters" }
                            </button>
                        </div>
                    } else {
                        <div class="project-grid">{ grid }</div>
                    }
                </div>

                <div class="container-g">
                    <div class="glass-card stats-band">{ stats }</div>
                </div>
            </section>
        </div>
    }
}
