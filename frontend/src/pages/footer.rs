use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::nav::scroll_link;
use crate::content::{FooterContent, Owner};
use crate::reveal::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub owner: Owner,
    pub footer: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let (footer_ref, visible) = use_scroll_reveal(props.footer.reveal);
    let year = Local::now().year();

    html! {
        <footer class="footer" ref={footer_ref}>
            <div class={classes!("container", "fade-in-up", visible.then(|| "visible"))}>
                <p>{format!("© {} {}. All rights reserved.", year, props.owner.name)}</p>
                <a href="#contact" class="footer-link" onclick={scroll_link("contact")}>
                    {&props.footer.cta}
                </a>
            </div>
            <style>
                {r#"
                .footer {
                    padding: 2.5rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    text-align: center;
                    color: #707070;
                    font-size: 0.9rem;
                }
                .footer-link:hover {
                    color: #f0f0f0;
                }
                "#}
            </style>
        </footer>
    }
}
