use yew::prelude::*;

use epicfolio_core::ProjectEntry;

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectCardProps {
    pub entry: &'static ProjectEntry,
}

#[function_component(ProjectCard)]
pub(crate) fn project_card(props: &ProjectCardProps) -> Html {
    let entry = props.entry;
    let class = classes!(
        "glass-card",
        "project-card",
        entry.featured.then_some("project-card-featured"),
    );

    let tags: Html = entry
        .tags
        .iter()
        .map(|tag| html! { <span class="project-tag">{ *tag }</span> })
        .collect();

    html! {
        <div {class}>
            <div class="project-thumb">
                <div class="project-thumb-placeholder">{ "👁" }</div>
                <div class="project-thumb-overlay">
                    <button class="btn-primary">{ "Live" }</button>
                    <button class="btn-secondary">{ "Code" }</button>
                </div>
            </div>
            <div class="project-body">
                <h3 class="project-title">{ entry.title }</h3>
                <p class="project-blurb">{ entry.blurb }</p>
                <div class="project-tags">{ tags }</div>
            </div>
        </div>
    }
}
