use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
struct AboutBlockProps {
    #[prop_or_default]
    dark: bool,
    children: Children,
}

#[function_component(AboutBlock)]
fn about_block(props: &AboutBlockProps) -> Html {
    html! {
        <section class={classes!("about-block", if props.dark { "bg-obsidian" } else { "bg-steel" })}>
            <div class="about-inner">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    use_mount(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <div class="about-page">
            <section class="about-hero bg-obsidian">
                <div class="about-hero-image">
                    <img src="https://images.unsplash.com/photo-1636986056375-184676d8ca14?q=80&w=2070" alt="Mill" />
                </div>
                <div class="about-hero-content">
                    <p class="label-text fade-up">{"About TNTX"}</p>
                    <h1 class="fade-up delay-1">
                        {"THIS IS NOT A "}<span class="accent">{"TEXTILE TOUR"}</span>
                    </h1>
                    <p class="about-hero-sub fade-up delay-2">{"This Is Where Textile Theory Finally Meets Reality"}</p>
                </div>
            </section>

            <AboutBlock>
                <p class="lead">{"If you have studied fashion or textiles outside India, there is a high chance you have never seen how the world's clothing is actually made."}</p>
                <p class="muted">{"You may understand fibers, know fabric names, speak confidently about sustainability. But you have likely never watched a spinning mill decide quality under time pressure, seen how one yarn defect destroys fabric meters later, or understood why a price quoted today changes tomorrow."}</p>
                <p class="accent">{"This program exists because that gap is not your fault. It is built into how textile education is structured globally."}</p>
            </AboutBlock>

            <AboutBlock dark={true}>
                <h2>{"THE SILENT FAILURE OF "}<span class="accent">{"TEXTILE EDUCATION"}</span></h2>
                <p class="muted">{"Textile education in the US and Europe is clean, controlled, and distant from reality. Students are taught what textiles are, not how textiles survive commercially."}</p>
                <div class="about-compare">
                    <div class="about-card">
                        <p class="about-card-title">{"They Learn:"}</p>
                        <p class="muted small">{"Fiber properties in isolation. Weaves without production constraints. Dyeing without water, waste, or time pressure. Sustainability without scale."}</p>
                    </div>
                    <div class="about-card about-card-accent">
                        <p class="about-card-title accent">{"In Real Factories:"}</p>
                        <p class="muted small">{"Quality competes with speed. Cost competes with ethics. Theory competes with deadlines. Design competes with feasibility."}</p>
                    </div>
                </div>
                <p class="white">{"Without seeing this collision, graduates enter the industry unprepared—and often overconfident."}</p>
            </AboutBlock>

            <AboutBlock>
                <h2>{"WHY TAMIL NADU IS "}<span class="accent">{"UNMATCHED"}</span></h2>
                <p class="white">{"Tamil Nadu is not a destination. It is a functioning textile system."}</p>
                <p class="muted">{"Within a compact region, you can trace: cotton sourcing, yarn spinning, fabric weaving (especially powerloom), bleaching, dyeing, printing, finishing, garment manufacturing, wholesale and export markets, payments, logistics, and risk management."}</p>
                <p class="accent">{"Few places in the world offer this density. Fewer still allow outsiders to walk inside it."}</p>
            </AboutBlock>

            <AboutBlock dark={true}>
                <h2>{"OUR CORE "}<span class="accent">{"PHILOSOPHY"}</span></h2>
                <p class="white large">{"This is not a tour. This is not a workshop. This is industry entry."}</p>
                <div class="about-compare">
                    <div class="about-card about-card-warning">
                        <p class="about-card-title warning">{"There Are No:"}</p>
                        <ul class="muted small plain-list">
                            <li>{"× Staged demonstrations"}</li>
                            <li>{"× Curated success stories"}</li>
                            <li>{"× Factories \"prepared\" for visitors"}</li>
                        </ul>
                    </div>
                    <div class="about-card about-card-accent">
                        <p class="about-card-title accent">{"You Will See:"}</p>
                        <ul class="muted small plain-list">
                            <li>{"✓ Machines running as usual"}</li>
                            <li>{"✓ Problems discussed in real time"}</li>
                            <li>{"✓ Decisions made under pressure"}</li>
                            <li>{"✓ Trade-offs openly acknowledged"}</li>
                        </ul>
                    </div>
                </div>
                <p class="accent">{"Nothing is simplified to impress you. Everything is shown to educate you."}</p>
            </AboutBlock>

            <AboutBlock>
                <h2>{"HOW THE IMMERSION IS "}<span class="accent">{"STRUCTURED"}</span></h2>
                <p class="muted">{"The program follows the real manufacturing sequence: Fiber → Yarn → Fabric → Processing → Garment → Market → Payments & Logistics."}</p>
                <p class="white">{"At each stage, you learn why decisions are made, how mistakes compound, and where value is created or destroyed."}</p>
                <p class="accent">{"This is not learning modules. This is systems literacy."}</p>
            </AboutBlock>

            <AboutBlock dark={true}>
                <h2>{"WHAT CHANGES "}<span class="accent">{"AFTER"}</span></h2>
                <p class="muted">{"Participants leave with the ability to speak confidently with mills and factories, a deep understanding of cost, defects, and margins, the skill to identify where problems actually originate, and a realistic view of scale, ethics, and feasibility."}</p>
                <p class="white large">{"You stop seeing textiles as concepts. You start seeing them as systems."}</p>
                <p class="accent">{"That shift changes careers, sourcing decisions, and brand outcomes."}</p>
            </AboutBlock>

            <section class="about-block bg-steel">
                <div class="about-inner centered">
                    <p class="muted">{"This is not an educational add-on. This is not a travel experience."}</p>
                    <p class="white large">{"This is a gateway into the real textile industry—for people who want clarity, not comfort."}</p>
                    <p class="muted small">{"Access is limited. Admission is selective."}</p>
                    <p class="accent">{"Industry is not explained to everyone."}</p>
                    <Link<Route> to={Route::Apply} classes="cta-button">
                        <span>{"Request Application Access"}</span>
                        <i class="arrow">{"→"}</i>
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .about-page {
                    padding-top: 4rem;
                }
                .about-hero {
                    position: relative;
                    padding: 6rem 0;
                }
                .about-hero-image {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                }
                .about-hero-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .about-hero-content {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    text-align: center;
                }
                .about-hero-content h1 {
                    font-family: var(--font-heading);
                    font-size: clamp(1.875rem, 5vw, 3rem);
                    color: #ffffff;
                    margin: 1rem 0 1.5rem;
                }
                .about-hero-sub {
                    color: var(--smoke);
                    font-size: 1.25rem;
                }
                .about-block {
                    padding: 5rem 0;
                }
                .about-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .about-inner p {
                    margin-bottom: 1.5rem;
                }
                .about-inner h2 {
                    font-family: var(--font-heading);
                    font-size: clamp(1.5rem, 3vw, 1.875rem);
                    color: #ffffff;
                    margin-bottom: 1.5rem;
                }
                .about-compare {
                    display: grid;
                    gap: 1.5rem;
                    padding: 1.5rem 0;
                }
                .about-card {
                    background: var(--steel);
                    border: 1px solid var(--zinc);
                    padding: 1.5rem;
                }
                .about-card-accent {
                    border-color: rgba(255, 107, 0, 0.3);
                }
                .about-card-warning {
                    border-color: rgba(127, 29, 29, 0.3);
                }
                .about-card-title {
                    font-family: var(--font-heading);
                    color: #ffffff;
                }
                .warning {
                    color: #ef4444;
                }
                .plain-list {
                    list-style: none;
                    padding: 0;
                    line-height: 1.8;
                }
                @media (min-width: 768px) {
                    .about-compare {
                        grid-template-columns: 1fr 1fr;
                    }
                    .about-hero {
                        padding: 8rem 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
