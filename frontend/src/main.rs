use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod reveal;
mod components {
    pub mod heading;
    pub mod icons;
    pub mod nav;
}
mod pages {
    pub mod home;
    pub mod hero;
    pub mod about;
    pub mod certificates;
    pub mod projects;
    pub mod contact;
    pub mod footer;
}

use content::PortfolioContent;
use pages::home::Home;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Option<Rc<PortfolioContent>>,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    match &props.content {
        Some(content) => html! { <Home content={content.clone()} /> },
        None => html! {
            <div style="padding: 4rem 1.5rem; text-align: center; color: #a0a0a0;">
                <h1>{"Something went wrong"}</h1>
                <p>{"The portfolio could not be loaded. Please try again later."}</p>
            </div>
        },
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    let content = match content::load() {
        Ok(content) => Some(Rc::new(content)),
        Err(err) => {
            error!("Failed to load portfolio content: {}", err);
            None
        }
    };
    yew::Renderer::<App>::with_props(AppProps { content }).render();
}
