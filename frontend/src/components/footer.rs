use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <div>
                    <p class="footer-brand">{"TNTX"}</p>
                    <p class="footer-tagline">{"Direct mill access. No middlemen."}</p>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::About} classes="footer-link">{"About"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="footer-link">{"Contact"}</Link<Route>>
                    <Link<Route> to={Route::Apply} classes="footer-link">{"Apply"}</Link<Route>>
                </div>
                <p class="footer-copy">{format!("© {} TNTX", year)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 0;
                    background: var(--obsidian);
                    border-top: 1px solid var(--zinc);
                }
                .footer-content {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }
                .footer-brand {
                    font-family: var(--font-heading);
                    color: #ffffff;
                    font-size: 1.25rem;
                    letter-spacing: 0.1em;
                    margin-bottom: 0.5rem;
                }
                .footer-tagline, .footer-copy {
                    color: var(--smoke);
                    font-size: 0.875rem;
                }
                .footer-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .footer-link {
                    color: var(--smoke);
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .footer-link:hover {
                    color: #ffffff;
                }
                @media (min-width: 768px) {
                    .footer-content {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
