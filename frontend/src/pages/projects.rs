use yew::prelude::*;

use crate::components::heading::SectionHeader;
use crate::components::icons::ExternalLinkIcon;
use crate::content::{Project, ProjectsContent};
use crate::reveal::{use_item_reveal, use_scroll_reveal};

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: ProjectsContent,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let content = &props.projects;
    let (section_ref, visible) = use_scroll_reveal(content.reveal);
    let (card_refs, revealed) = use_item_reveal(content.items.len());
    let total = content.items.len();

    html! {
        <section id="projects" class="section projects" ref={section_ref}>
            <div class="container">
                <SectionHeader heading={content.heading.clone()} {visible} />
                <div class="projects-stack">
                    { for content.items.iter().enumerate().map(|(index, project)| html! {
                        <div
                            class={classes!("project-card", revealed.contains(index).then(|| "revealed"))}
                            ref={card_refs.get(index).cloned().unwrap_or_default()}
                            style={format!("--stack-index: {}; --total-cards: {};", index, total)}
                        >
                            { project_card(project) }
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .projects-stack {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .project-card {
                    position: sticky;
                    top: calc(6rem + var(--stack-index) * 1.5rem);
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    padding: 2rem;
                    border-radius: 20px;
                    background: #141414;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                    z-index: calc(var(--total-cards) - var(--stack-index));
                }
                .project-card.revealed {
                    opacity: 1;
                    transform: none;
                }
                .project-image img,
                .project-placeholder {
                    width: 100%;
                    aspect-ratio: 16 / 10;
                    object-fit: cover;
                    border-radius: 12px;
                }
                .project-placeholder {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.04);
                    color: #606060;
                    font-size: 2.5rem;
                }
                .project-features {
                    padding-left: 1.2rem;
                    color: #b0b0b0;
                }
                .project-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.4rem;
                }
                @media (max-width: 768px) {
                    .project-card {
                        position: relative;
                        top: 0;
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

fn project_card(project: &Project) -> Html {
    let image = match &project.image {
        Some(src) => html! { <img src={src.clone()} alt={project.title.clone()} loading="lazy" /> },
        None => html! { <div class="project-placeholder">{"🖥️"}</div> },
    };

    html! {
        <>
            <div class="project-image">{image}</div>
            <div class="project-info">
                <h3>{&project.title}</h3>
                <p>{&project.description}</p>
                <ul class="project-features">
                    { for project.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                </ul>
                <div class="tags">
                    { for project.tags.iter().map(|tag| html! { <span class="tag">{tag}</span> }) }
                </div>
                if let Some(link) = &project.link {
                    <a href={link.clone()} class="project-link" target="_blank" rel="noopener noreferrer">
                        {"View Project"}
                        <ExternalLinkIcon />
                    </a>
                }
            </div>
        </>
    }
}
