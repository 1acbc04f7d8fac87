use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod countdown;
mod redirect;
mod components {
    pub mod animated_section;
    pub mod countdown_timer;
    pub mod faq;
    pub mod footer;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod redirects;
}

use components::footer::Footer;
use pages::{
    about::About,
    home::Home,
    redirects::{ApplicationPage, ContactPage},
};

/// Scroll offset after which the nav bar switches to its solid style.
const NAV_SCROLL_THRESHOLD: i32 = 80;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/apply")]
    Apply,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::Apply => {
            info!("Rendering Apply page");
            html! { <ApplicationPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"PAGE NOT FOUND"}</h1>
                    <Link<Route> to={Route::Home} classes="outline-button">
                        {"← Back to Home"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let mut listener = None;

            if let Some(window) = web_sys::window() {
                let document = window.document();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .as_ref()
                        .and_then(|d| d.document_element())
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_ok()
                {
                    listener = Some((window, scroll_callback));
                }
            }

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Link clicks still navigate; this only folds the mobile menu away.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"TNTX"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Apply} classes="nav-apply-button">
                            {"Apply Now"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(10, 10, 10, 0.6);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid var(--zinc);
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(10, 10, 10, 0.95);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-family: var(--font-heading);
                    color: #ffffff;
                    font-size: 1.125rem;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    line-height: 1;
                    transition: color 0.2s ease;
                }
                .nav-logo:hover {
                    color: var(--orange);
                }
                .nav-right {
                    display: none;
                }
                .nav-right.mobile-menu-open {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    position: fixed;
                    top: 4rem;
                    right: 0;
                    bottom: 0;
                    width: 300px;
                    padding: 2.5rem 1.5rem;
                    background: var(--obsidian);
                    border-left: 1px solid var(--zinc);
                }
                .nav-link {
                    color: var(--smoke);
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #ffffff;
                }
                .nav-apply-button {
                    display: inline-block;
                    background: var(--orange);
                    color: #ffffff;
                    font-family: var(--font-heading);
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-size: 0.75rem;
                    padding: 0.5rem 1rem;
                    text-decoration: none;
                }
                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    background: #ffffff;
                }
                @media (min-width: 640px) {
                    .burger-menu {
                        display: none;
                    }
                    .nav-right, .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 1.5rem;
                        position: static;
                        width: auto;
                        padding: 0;
                        background: none;
                        border: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="app">
                <div class="grain-overlay"></div>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </div>
            <style>
                {r#"
                :root {
                    --obsidian: #0a0a0a;
                    --steel: #18181b;
                    --zinc: #27272a;
                    --smoke: #a1a1aa;
                    --orange: #ff6b00;
                    --font-heading: 'Oswald', 'Arial Narrow', sans-serif;
                    --font-body: 'Inter', system-ui, sans-serif;
                }
                * {
                    box-sizing: border-box;
                    margin: 0;
                }
                body {
                    background: var(--obsidian);
                    color: #ffffff;
                    font-family: var(--font-body);
                }
                .app {
                    min-height: 100vh;
                    background: var(--obsidian);
                }
                .grain-overlay {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: 100;
                    opacity: 0.04;
                    background-image: radial-gradient(rgba(255, 255, 255, 0.5) 1px, transparent 1px);
                    background-size: 3px 3px;
                }
                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    width: 100%;
                }
                .bg-obsidian { background: var(--obsidian); }
                .bg-steel { background: var(--steel); }
                .accent { color: var(--orange); }
                .white { color: #ffffff; }
                .muted { color: var(--smoke); }
                .warning { color: #ef4444; }
                .bold { font-weight: 700; }
                .small { font-size: 0.875rem; }
                .tiny { font-size: 0.75rem; }
                .large { font-size: 1.125rem; }
                .heading { font-family: var(--font-heading); }
                .centered { text-align: center; }
                .label-text {
                    font-family: var(--font-heading);
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-size: 0.75rem;
                    color: var(--orange);
                }
                .stat-number {
                    font-family: var(--font-heading);
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: var(--orange);
                }
                .industrial-image {
                    filter: grayscale(40%) contrast(1.1);
                }
                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: var(--orange);
                    color: #ffffff;
                    font-family: var(--font-heading);
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    padding: 1.25rem 2rem;
                    text-decoration: none;
                    transition: opacity 0.2s ease;
                }
                .cta-button:hover {
                    opacity: 0.9;
                }
                .cta-button.large {
                    padding: 1.75rem 3rem;
                    font-size: 1.125rem;
                }
                .cta-button .arrow {
                    font-style: normal;
                    transition: transform 0.2s ease;
                }
                .cta-button:hover .arrow {
                    transform: translateX(4px);
                }
                .outline-button {
                    display: inline-block;
                    border: 1px solid var(--orange);
                    color: var(--orange);
                    padding: 0.75rem 1.5rem;
                    text-decoration: none;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .outline-button:hover {
                    background: var(--orange);
                    color: #ffffff;
                }
                .animated-section {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .animated-section.visible {
                    opacity: 1;
                    transform: none;
                }
                .fade-up {
                    animation: fadeUp 0.6s ease both;
                }
                .delay-1 { animation-delay: 0.1s; }
                .delay-2 { animation-delay: 0.2s; }
                .delay-3 { animation-delay: 0.3s; }
                .delay-4 { animation-delay: 0.4s; }
                .delay-5 { animation-delay: 0.5s; }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: none; }
                }
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    font-family: var(--font-heading);
                }
                "#}
            </style>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
