use yew::prelude::*;

use crate::components::heading::SectionHeader;
use crate::content::CertificatesContent;
use crate::reveal::{use_scroll_reveal, use_stagger_reveal};

#[derive(Properties, PartialEq)]
pub struct CertificatesProps {
    pub certificates: CertificatesContent,
}

#[function_component(Certificates)]
pub fn certificates(props: &CertificatesProps) -> Html {
    let content = &props.certificates;
    let (section_ref, visible) = use_scroll_reveal(content.reveal);
    let (grid_ref, revealed) = use_stagger_reveal(content.items.len(), content.stagger_ms);

    html! {
        <section id="certificates" class="section certificates" ref={section_ref}>
            <div class="container">
                <SectionHeader heading={content.heading.clone()} {visible} />
                <div class="certificates-grid" ref={grid_ref}>
                    { for content.items.iter().enumerate().map(|(index, certificate)| html! {
                        <div class={classes!("certificate-card", revealed.contains(index).then(|| "visible"))}>
                            <span class="certificate-icon">{&certificate.icon}</span>
                            <h3>{&certificate.title}</h3>
                            <p class="certificate-issuer">{&certificate.issuer}</p>
                            <span class="certificate-date">{&certificate.date}</span>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .certificates-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .certificate-card {
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    opacity: 0;
                    transform: translateY(20px) scale(0.97);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }
                .certificate-card.visible {
                    opacity: 1;
                    transform: none;
                }
                .certificate-icon {
                    font-size: 2rem;
                }
                .certificate-issuer {
                    color: #a0a0a0;
                }
                .certificate-date {
                    font-size: 0.8rem;
                    color: #808080;
                }
                "#}
            </style>
        </section>
    }
}
