use yew::prelude::*;

use crate::components::heading::SectionHeader;
use crate::components::icons::LocationIcon;
use crate::content::{AboutContent, Owner};
use crate::reveal::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub owner: Owner,
    pub about: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let (section_ref, visible) = use_scroll_reveal(props.about.reveal);
    let about = &props.about;
    let owner = &props.owner;

    html! {
        <section id="about" class="section about" ref={section_ref}>
            <div class="container">
                <SectionHeader heading={about.heading.clone()} {visible} />
                <div class={classes!("about-grid", "fade-in-up", visible.then(|| "visible"))} style="transition-delay: 0.2s;">
                    <div class="about-profile">
                        <img src={owner.photo.clone()} alt={owner.name.clone()} class="about-photo" />
                        <h3>{&owner.name}</h3>
                        <p class="about-role">{&owner.role}</p>
                        <p class="about-location">
                            <LocationIcon />
                            {&owner.location}
                        </p>
                    </div>
                    <div class="about-body">
                        <p class="about-bio">{&about.bio}</p>

                        <h3 class="about-heading">{"Education"}</h3>
                        <div class="timeline">
                            { for about.education.iter().map(|entry| html! {
                                <div class="timeline-item">
                                    <span class="timeline-level">{&entry.level}</span>
                                    <h4>{&entry.school}</h4>
                                    <p>{&entry.program}</p>
                                    <span class="timeline-period">{&entry.period}</span>
                                </div>
                            }) }
                        </div>

                        <h3 class="about-heading">{"Experience"}</h3>
                        <div class="timeline-item">
                            <h4>{&about.experience.role}</h4>
                            <span class="timeline-period">{&about.experience.period}</span>
                            <ul class="experience-list">
                                { for about.experience.highlights.iter().map(|highlight| {
                                    // "Label: detail" highlights get a bold label
                                    match highlight.split_once(": ") {
                                        Some((label, detail)) => html! {
                                            <li><strong>{format!("{}: ", label)}</strong>{detail.to_string()}</li>
                                        },
                                        None => html! { <li>{highlight}</li> },
                                    }
                                }) }
                            </ul>
                        </div>

                        <h3 class="about-heading">{"Tech Stack"}</h3>
                        <div class="tech-stack">
                            { for about.tech_stack.iter().map(|group| html! {
                                <div class="tech-group">
                                    <h4>{&group.category}</h4>
                                    <div class="tags">
                                        { for group.items.iter().map(|item| html! {
                                            <span class="tag">{item}</span>
                                        }) }
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 280px 1fr;
                    gap: 3rem;
                }
                .about-profile {
                    text-align: center;
                }
                .about-photo {
                    width: 200px;
                    height: 200px;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 2px solid rgba(255, 255, 255, 0.1);
                }
                .about-role {
                    color: #a0a0a0;
                }
                .about-location {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.4rem;
                    color: #808080;
                    font-size: 0.9rem;
                }
                .about-bio {
                    color: #c0c0c0;
                    line-height: 1.7;
                }
                .about-heading {
                    margin-top: 2rem;
                }
                .timeline-item {
                    padding: 1rem 1.25rem;
                    border-left: 2px solid rgba(255, 255, 255, 0.1);
                    margin-bottom: 1rem;
                }
                .timeline-level,
                .timeline-period {
                    font-size: 0.8rem;
                    color: #808080;
                }
                .experience-list {
                    padding-left: 1.2rem;
                    color: #b0b0b0;
                    line-height: 1.6;
                }
                .tech-stack {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.25rem;
                }
                @media (max-width: 768px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
