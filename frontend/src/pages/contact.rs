use log::debug;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::components::heading::SectionHeader;
use crate::components::icons::{GitHubIcon, LinkedInIcon, MailIcon};
use crate::content::{ContactContent, Owner, SocialLinks};
use crate::reveal::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub owner: Owner,
    pub links: SocialLinks,
    pub contact: ContactContent,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let (section_ref, visible) = use_scroll_reveal(props.contact.reveal);

    // The form is presentational, nothing is sent anywhere
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("Contact form submit suppressed");
    });

    html! {
        <section id="contact" class="section contact" ref={section_ref}>
            <div class="container">
                <SectionHeader heading={props.contact.heading.clone()} {visible} />
                <div class={classes!("contact-content", "fade-in-up", visible.then(|| "visible"))} style="transition-delay: 0.2s;">
                    <p class="contact-intro">
                        {"I'm always open to new opportunities and collaborations. Feel free to reach out!"}
                    </p>
                    <div class="contact-buttons">
                        <a href={format!("mailto:{}", props.owner.email)} class="btn btn-primary">
                            <MailIcon />
                            {"Email Me"}
                        </a>
                        <a href={props.links.linkedin.clone()} class="btn" target="_blank" rel="noopener noreferrer">
                            <LinkedInIcon />
                            {"LinkedIn"}
                        </a>
                        <a href={props.links.github.clone()} class="btn" target="_blank" rel="noopener noreferrer">
                            <GitHubIcon />
                            {"GitHub"}
                        </a>
                    </div>
                    <p class="contact-divider">{"Or send a message"}</p>
                    <form class="contact-form" {onsubmit}>
                        <input type="text" name="name" placeholder="Your Name" required={true} />
                        <input type="email" name="email" placeholder="Your Email" required={true} />
                        <textarea name="message" rows="5" placeholder="Your Message" required={true}></textarea>
                        <button type="submit" class="btn btn-primary">{"Send Message"}</button>
                    </form>
                </div>
            </div>
            <style>
                {r#"
                .contact .container {
                    text-align: center;
                    max-width: 720px;
                }
                .contact-intro {
                    color: #b0b0b0;
                }
                .contact-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin: 2rem 0;
                }
                .contact-buttons svg {
                    width: 18px;
                    height: 18px;
                }
                .contact-divider {
                    color: #808080;
                    font-size: 0.9rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    text-align: left;
                }
                .contact-form input,
                .contact-form textarea {
                    padding: 0.85rem 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    color: inherit;
                    font: inherit;
                }
                "#}
            </style>
        </section>
    }
}
