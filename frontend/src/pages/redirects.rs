use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::redirect::{open_or_log, OpenMode, RedirectTarget};
use crate::Route;

#[derive(Properties, PartialEq)]
struct RedirectPanelProps {
    target: RedirectTarget,
    icon: AttrValue,
    title: AttrValue,
    status: AttrValue,
    fallback: AttrValue,
    /// How the primary link opens when clicked.
    link_mode: OpenMode,
    #[prop_or_default]
    children: Children,
}

#[function_component(RedirectPanel)]
fn redirect_panel(props: &RedirectPanelProps) -> Html {
    // Fires once per page load; no retry if the browser ignores it.
    {
        let target = props.target;
        use_mount(move || open_or_log(target, OpenMode::SameTab));
    }

    let href = props.target.href();
    let open_link = {
        let target = props.target;
        let mode = props.link_mode;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_or_log(target, mode);
        })
    };

    html! {
        <div class="redirect-page">
            <div class="redirect-panel">
                <div class="redirect-icon">{props.icon.clone()}</div>
                <h1>{props.title.clone()}</h1>
                <p class="redirect-status">{props.status.clone()}</p>
                <a class="redirect-link" href={href.clone()} onclick={open_link}>{props.target.display_text()}</a>
                <p class="redirect-fallback">
                    {"If not redirected, "}
                    <a href={href}>{props.fallback.clone()}</a>
                </p>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .redirect-page {
                    padding-top: 4rem;
                    min-height: 100vh;
                    background: var(--obsidian);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .redirect-panel {
                    text-align: center;
                    padding: 0 1rem;
                }
                .redirect-icon {
                    color: var(--orange);
                    font-size: 4rem;
                    margin-bottom: 1.5rem;
                }
                .redirect-panel h1 {
                    font-family: var(--font-heading);
                    font-size: 1.875rem;
                    color: #ffffff;
                    margin-bottom: 1rem;
                }
                .redirect-status {
                    color: var(--smoke);
                    margin-bottom: 1.5rem;
                }
                .redirect-link {
                    color: var(--orange);
                    font-size: 1.125rem;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .redirect-link:hover {
                    color: #ffffff;
                }
                .redirect-fallback {
                    color: var(--smoke);
                    font-size: 0.875rem;
                    margin-top: 2rem;
                }
                .redirect-fallback a {
                    color: var(--orange);
                }
                .back-home {
                    margin-top: 2rem;
                    background: none;
                    border: none;
                    color: var(--smoke);
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .back-home:hover {
                    color: #ffffff;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <RedirectPanel
            target={RedirectTarget::Contact}
            icon="✉"
            title="CONTACT US"
            status="Redirecting to email..."
            fallback="click here to email us"
            link_mode={OpenMode::SameTab}
        />
    }
}

#[function_component(ApplicationPage)]
pub fn application_page() -> Html {
    let navigator = use_navigator();

    let back_home = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <RedirectPanel
            target={RedirectTarget::Application}
            icon="↗"
            title="APPLICATION"
            status="Redirecting to application form..."
            fallback="click here to apply"
            link_mode={OpenMode::NewTab}
        >
            <button class="back-home" onclick={back_home}>{"← Back to Home"}</button>
        </RedirectPanel>
    }
}
