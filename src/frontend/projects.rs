use super::bubbles::FloatingBubbles;
use super::reveal::use_reveal;
use super::SectionProps;
use crate::bubbles::BubbleColor;
use crate::content::profile::GITHUB_PROFILE;
use crate::content::projects::{company_project_label, featured_label, filter_projects, ProjectFilter, PROJECTS};
use crate::reveal::{reveal_class, DENSE_SECTION_STAGGER};
use yew::prelude::*;

#[function_component(Projects)]
pub fn projects(props: &SectionProps) -> Html {
    let language = props.view.language;
    let content = PROJECTS.select(language);
    let (node, visible) = use_reveal("projects");
    let active = use_state(ProjectFilter::default);
    let class = reveal_class(visible);

    let visible_projects = filter_projects(content.projects, *active);

    html! {
        <section id="projects" class="section section--alt" ref={node}>
            <FloatingBubbles count={4} color={BubbleColor::Mixed} />
            <div class="container">
                <header class={classes!(class, "section-header")} style={DENSE_SECTION_STAGGER.style(0)}>
                    <h2 class="gradient-text">{content.title}</h2>
                    <p class="section-subtitle">{content.subtitle}</p>
                </header>

                <div class={classes!(class, "filters")} style={DENSE_SECTION_STAGGER.style(1)} role="toolbar">
                    { for content.filters.iter().map(|label| {
                        let onclick = {
                            let active = active.clone();
                            let filter = label.filter;
                            Callback::from(move |_: MouseEvent| active.set(filter))
                        };
                        let selected = *active == label.filter;
                        html! {
                            <button
                                key={label.filter.id()}
                                type="button"
                                class={classes!("filter", selected.then_some("is-active"))}
                                aria-pressed={selected.to_string()}
                                {onclick}
                            >
                                <span aria-hidden="true">{label.filter.icon()}</span>
                                <span>{label.name}</span>
                            </button>
                        }
                    }) }
                </div>

                <div class="project-grid">
                    { for visible_projects.iter().enumerate().map(|(index, project)| html! {
                        <article
                            key={project.title}
                            class={classes!(class, "card", "project", project.featured.then_some("project--featured"))}
                            style={DENSE_SECTION_STAGGER.style(index + 2)}
                        >
                            if project.featured {
                                <span class="badge badge--featured">{featured_label(language)}</span>
                            }
                            <h3>{project.title}</h3>
                            <p class="project-description">{project.description}</p>
                            <div class="chips">
                                { for project.technologies.iter().map(|tech| html! { <span class="chip">{*tech}</span> }) }
                            </div>
                            if let Some(url) = project.github_url {
                                <a class="button button--dark" href={url} target="_blank" rel="noopener noreferrer">
                                    {"GitHub"}
                                </a>
                            } else {
                                <button class="button button--muted" type="button" disabled=true>
                                    {company_project_label(language)}
                                </button>
                            }
                        </article>
                    }) }
                </div>

                <div class={classes!(class, "section-cta")} style={DENSE_SECTION_STAGGER.style(visible_projects.len() + 2)}>
                    <a class="button button--dark" href={GITHUB_PROFILE} target="_blank" rel="noopener noreferrer">
                        {content.cta}
                    </a>
                </div>
            </div>
        </section>
    }
}
