use yew::prelude::*;

// Stroke icons on a 24x24 grid
fn outline(style: Option<&'static str>, shapes: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            style={style}
        >
            {shapes}
        </svg>
    }
}

#[function_component(HomeIcon)]
pub fn home_icon() -> Html {
    outline(None, html! {
        <>
            <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
            <polyline points="9,22 9,12 15,12 15,22" />
        </>
    })
}

#[function_component(UserIcon)]
pub fn user_icon() -> Html {
    outline(None, html! {
        <>
            <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" />
            <circle cx="12" cy="7" r="4" />
        </>
    })
}

#[function_component(FolderIcon)]
pub fn folder_icon() -> Html {
    outline(None, html! {
        <path d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z" />
    })
}

#[function_component(MailIcon)]
pub fn mail_icon() -> Html {
    outline(None, html! {
        <>
            <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" />
            <polyline points="22,6 12,13 2,6" />
        </>
    })
}

#[function_component(LinkedInIcon)]
pub fn linkedin_icon() -> Html {
    outline(None, html! {
        <>
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
            <rect x="2" y="9" width="4" height="12" />
            <circle cx="4" cy="4" r="2" />
        </>
    })
}

#[function_component(GitHubIcon)]
pub fn github_icon() -> Html {
    outline(None, html! {
        <path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22" />
    })
}

#[function_component(ExternalLinkIcon)]
pub fn external_link_icon() -> Html {
    outline(Some("width: 14px; height: 14px;"), html! {
        <>
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
            <polyline points="15,3 21,3 21,9" />
            <line x1="10" y1="14" x2="21" y2="3" />
        </>
    })
}

#[function_component(LocationIcon)]
pub fn location_icon() -> Html {
    outline(Some("width: 16px; height: 16px;"), html! {
        <>
            <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z" />
            <circle cx="12" cy="10" r="3" />
        </>
    })
}
