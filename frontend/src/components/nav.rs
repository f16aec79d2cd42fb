use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::icons::{FolderIcon, GitHubIcon, HomeIcon, LinkedInIcon, MailIcon, UserIcon};
use crate::content::SocialLinks;

/// Smoothly scrolls the section with `section_id` into view.
pub fn scroll_to_section(section_id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section_id));
    let Some(element) = element else {
        warn!("No section with id {:?} to scroll to", section_id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Click handler for in-page anchors.
pub fn scroll_link(section_id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(section_id);
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub links: SocialLinks,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let sections = [
        ("home", "Home", html! { <HomeIcon /> }),
        ("about", "About", html! { <UserIcon /> }),
        ("projects", "Projects", html! { <FolderIcon /> }),
        ("contact", "Contact", html! { <MailIcon /> }),
    ];

    html! {
        <nav class="navbar">
            <div class="container">
                <div class="nav-links">
                    { for sections.into_iter().map(|(id, label, icon)| html! {
                        <a href={format!("#{}", id)} class="nav-link" onclick={scroll_link(id)} aria-label={label}>
                            {icon}
                        </a>
                    }) }
                    <a href={props.links.linkedin.clone()} class="nav-link" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        <LinkedInIcon />
                    </a>
                    <a href={props.links.github.clone()} class="nav-link" target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        <GitHubIcon />
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 100;
                }
                .nav-links {
                    display: flex;
                    gap: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    background: rgba(20, 20, 20, 0.8);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 999px;
                }
                .nav-link {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    color: #a0a0a0;
                    transition: color 0.2s ease, background 0.2s ease;
                }
                .nav-link svg {
                    width: 20px;
                    height: 20px;
                }
                .nav-link:hover {
                    color: #ffffff;
                    background: rgba(255, 255, 255, 0.08);
                }
                "#}
            </style>
        </nav>
    }
}
