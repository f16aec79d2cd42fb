use yew::prelude::*;

use crate::content::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub heading: SectionHeading,
    pub visible: bool,
}

/// Eyebrow label and title, fading in with their section.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let fade = props.visible.then(|| "visible");

    html! {
        <>
            <p class={classes!("section-label", "fade-in-up", fade)}>{&props.heading.label}</p>
            <h2 class={classes!("section-title", "fade-in-up", fade)} style="transition-delay: 0.1s;">
                {&props.heading.title}
            </h2>
        </>
    }
}
