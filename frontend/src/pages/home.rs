use std::rc::Rc;

use yew::prelude::*;

use crate::components::nav::Nav;
use crate::content::PortfolioContent;
use crate::pages::about::About;
use crate::pages::certificates::Certificates;
use crate::pages::contact::Contact;
use crate::pages::footer::Footer;
use crate::pages::hero::Hero;
use crate::pages::projects::Projects;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: Rc<PortfolioContent>,
}

#[function_component]
pub fn Home(props: &HomeProps) -> Html {
    let content = &props.content;

    html! {
        <div class="portfolio">
            <Nav links={content.links.clone()} />
            <main>
                <Hero hero={content.hero.clone()} links={content.links.clone()} />
                <About owner={content.owner.clone()} about={content.about.clone()} />
                <Certificates certificates={content.certificates.clone()} />
                <Projects projects={content.projects.clone()} />
                <Contact
                    owner={content.owner.clone()}
                    links={content.links.clone()}
                    contact={content.contact.clone()}
                />
            </main>
            <Footer owner={content.owner.clone()} footer={content.footer.clone()} />
            <style>
                {r#"
                *, *::before, *::after {
                    box-sizing: border-box;
                }
                body {
                    margin: 0;
                    background: #0a0a0a;
                    color: #f0f0f0;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
                }
                a {
                    color: inherit;
                    text-decoration: none;
                }
                .container {
                    width: 100%;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section {
                    padding: 6rem 0;
                }
                .section-label {
                    margin: 0 0 0.5rem;
                    font-size: 0.8rem;
                    letter-spacing: 0.2em;
                    color: #808080;
                }
                .section-title {
                    font-size: 2.25rem;
                    margin-bottom: 2.5rem;
                }
                .fade-in-up {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .fade-in-up.visible {
                    opacity: 1;
                    transform: none;
                }
                .btn {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.8rem 1.6rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: #f0f0f0;
                    font: inherit;
                    cursor: pointer;
                    transition: background 0.2s ease, transform 0.2s ease;
                }
                .btn:hover {
                    transform: translateY(-2px);
                    background: rgba(255, 255, 255, 0.06);
                }
                .btn-primary {
                    background: #f0f0f0;
                    color: #0a0a0a;
                    border-color: #f0f0f0;
                }
                .btn-primary:hover {
                    background: #ffffff;
                }
                .tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .tag {
                    padding: 0.3rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.06);
                    font-size: 0.8rem;
                    color: #c0c0c0;
                }
                @media (prefers-reduced-motion: reduce) {
                    .fade-in-up,
                    .certificate-card,
                    .project-card {
                        transition: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
