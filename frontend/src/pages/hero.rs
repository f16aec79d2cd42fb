use yew::prelude::*;

use crate::components::nav::scroll_link;
use crate::content::{HeroContent, SocialLinks};
use crate::reveal::use_mount_reveal;

// Lets the first paint land before the entrance transitions start
const ENTRANCE_DELAY_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroContent,
    pub links: SocialLinks,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let loaded = use_mount_reveal(ENTRANCE_DELAY_MS);
    let entrance = |class: &'static str| classes!(class, "fade-in-up", loaded.then(|| "visible"));

    html! {
        <section id="home" class="hero section">
            <span class={entrance("hero-badge")} style="transition-delay: 0.2s;">
                {&props.hero.badge}
            </span>
            <h1 class={entrance("hero-title")} style="transition-delay: 0.4s;">
                {&props.hero.title}
            </h1>
            <p class={entrance("hero-subtitle")} style="transition-delay: 0.6s;">
                {&props.hero.subtitle}
            </p>
            <div class={entrance("hero-buttons")} style="transition-delay: 0.8s;">
                <a href="#contact" class="btn btn-primary" onclick={scroll_link("contact")}>
                    {"👋 Let's Connect"}
                </a>
                <a href={props.links.resume.clone()} class="btn">
                    {"My Resume ↓"}
                </a>
            </div>
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    gap: 1.5rem;
                }
                .hero-badge {
                    padding: 0.4rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 999px;
                    font-size: 0.85rem;
                    color: #a0a0a0;
                }
                .hero-title {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.1;
                }
                .hero-subtitle {
                    max-width: 640px;
                    color: #b0b0b0;
                    font-size: 1.1rem;
                    line-height: 1.6;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                "#}
            </style>
        </section>
    }
}
