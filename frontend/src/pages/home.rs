use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::countdown_timer::{use_countdown, CountdownTimer};
use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::config;
use crate::countdown::Phase;
use crate::Route;

const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What are the eligibility criteria for TNTX?",
        answer: "We accept fashion brand founders, textile business heirs, sourcing professionals, and professors with student cohorts. You should have a genuine intent to source from Indian mills or learn the ecosystem for professional purposes.",
    },
    FaqEntry {
        question: "How competitive is the application process?",
        answer: "We cap each cohort at 15 participants to ensure real access. Selection is based on fit, not just ability to pay. Expect a screening call after your application.",
    },
    FaqEntry {
        question: "What happens during the screening call?",
        answer: "A 20-30 minute conversation to understand your background, sourcing goals, and expectations. It's not an interview — it's a mutual evaluation.",
    },
    FaqEntry {
        question: "Is prior textile industry experience required?",
        answer: "No. We accept students and early-career professionals. What matters is genuine interest in understanding textile sourcing.",
    },
    FaqEntry {
        question: "What's included in the program?",
        answer: "Mill visits across the entire value chain, direct meetings with mill owners, real cost breakdowns, and post-program supplier contacts. Accommodation and local transport during the program are included.",
    },
    FaqEntry {
        question: "Can professors get sponsored?",
        answer: "Yes. Professors can be sponsored to audit the course. Contact us directly to discuss sponsorship arrangements.",
    },
    FaqEntry {
        question: "What happens after the program?",
        answer: "Your supplier contacts remain open. Many participants place their first orders within weeks of completing TNTX.",
    },
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
    location: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I came expecting a factory tour. I left with 12 direct supplier contacts and a completely different understanding of how pricing actually works in South India.",
        name: "Sarah Chen",
        role: "Founder, Sustainable Apparel Co.",
        location: "Los Angeles, USA",
    },
    Testimonial {
        quote: "The access we got was unreal. We walked into mills that don't take visitors and negotiated directly with owners. No agents, no markup — just real conversations.",
        name: "Marcus Williams",
        role: "Head of Sourcing, Fashion House",
        location: "London, UK",
    },
    Testimonial {
        quote: "As a textile family heir, I thought I knew this industry. TNTX showed me the gaps in my understanding and gave me connections outside my family's network.",
        name: "Priya Sharma",
        role: "3rd Gen, Textile Business",
        location: "Mumbai, India",
    },
];

fn bullet_list(items: &[&'static str], marker: &'static str, marker_class: &'static str) -> Html {
    html! {
        <ul class="bullet-list">
            { items.iter().map(|item| html! {
                <li><span class={marker_class}>{marker}</span>{*item}</li>
            }).collect::<Html>() }
        </ul>
    }
}

fn deadline_heading(phase: Phase) -> &'static str {
    match phase {
        Phase::Counting => "Applications Close",
        Phase::Elapsed => "Applications Closed",
    }
}

#[derive(Properties, PartialEq)]
struct DeadlineNoticeProps {
    deadline: DateTime<Tz>,
}

/// Flips to "closed" on its own when the deadline passes while the page is open.
#[function_component(DeadlineNotice)]
fn deadline_notice(props: &DeadlineNoticeProps) -> Html {
    let model = use_countdown(props.deadline.with_timezone(&Utc));

    html! {
        <div class="deadline">
            <span class="label-text warning">{deadline_heading(model.phase)}</span>
            <p class="deadline-date">{config::format_long_date(&props.deadline)}</p>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let cohort_start = config::cohort_start();
    let deadline = config::application_deadline();
    let cohort_label = format!("Cohort Starts {}", config::format_day_of_month(&cohort_start));

    html! {
        <section class="hero">
            <div class="hero-image">
                <img class="industrial-image" src="https://images.unsplash.com/photo-1636986056375-184676d8ca14?q=80&w=2070" alt="Textile Mill Interior" />
                <div class="hero-gradient"></div>
            </div>

            <div class="container hero-content">
                <p class="label-text fade-up">{"Direct Mill Access · Coimbatore, South India"}</p>
                <h1 class="hero-title fade-up delay-1"><span class="accent">{"TNTX"}</span></h1>
                <p class="hero-sub fade-up delay-2">
                    {"Meet mills. See real ex-mill pricing."}
                    <br />
                    {"Build your supplier map—without middlemen."}
                </p>
                <div class="fade-up delay-3">
                    <Link<Route> to={Route::Apply} classes="cta-button">
                        <span>{"Apply for the Intensive"}</span>
                        <i class="arrow">{"→"}</i>
                    </Link<Route>>
                </div>

                <div class="hero-facts fade-up delay-4">
                    <span>{"15 people"}</span>
                    <span>{"9 days"}</span>
                    <span>{"Coimbatore, South India"}</span>
                </div>

                <div class="hero-dates fade-up delay-5">
                    <CountdownTimer
                        target={cohort_start}
                        label={cohort_label}
                        elapsed_label={Some(AttrValue::from("Cohort In Progress"))}
                    />
                    <div class="hero-divider"></div>
                    <DeadlineNotice {deadline} />
                </div>
            </div>
        </section>
    }
}

#[function_component(ProblemSection)]
fn problem_section() -> Html {
    html! {
        <section class="section bg-obsidian">
            <div class="container">
                <AnimatedSection class={classes!("narrow", "centered")}>
                    <p class="label-text">{"The Reality"}</p>
                    <h2>
                        {"MOST PEOPLE "}<span class="accent">{"\"SOURCE FROM INDIA\""}</span>
                        <br />{"WITHOUT EVER ENTERING THE SYSTEM"}
                    </h2>
                    <p class="muted">{"They deal with agents, traders, curated factories, and filtered truths."}</p>
                    <p class="white bold">{"TNTX exists to remove every layer between you and the mills."}</p>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(TargetAudience)]
fn target_audience() -> Html {
    let ideal_for = [
        "Fashion & apparel brand founders",
        "Textile family business heirs (college / early career)",
        "Sourcing heads & buying managers",
        "Professors bringing serious student cohorts",
    ];
    let not_for = ["Tourists", "Dropshippers", "Influencers"];

    html! {
        <section class="section bg-steel">
            <div class="container">
                <AnimatedSection>
                    <p class="label-text centered">{"Brutally Clear"}</p>
                    <h2 class="centered">{"WHO THIS IS FOR"}</h2>
                    <div class="grid-2">
                        <div class="card card-dark">
                            <h3>{"✓ Ideal Participants"}</h3>
                            { bullet_list(&ideal_for, "—", "accent") }
                        </div>
                        <div class="card card-dark card-warning">
                            <h3>{"× Not For"}</h3>
                            { bullet_list(&not_for, "×", "warning") }
                            <p class="muted small card-footnote">
                                {"If you're not planning to work with mills directly, this is not for you."}
                            </p>
                        </div>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(CorePromise)]
fn core_promise() -> Html {
    let promises = [
        ("True Pricing Benchmarks", "Yarn → Fabric → Processing → Job Work"),
        ("Verified Supplier List", "Build your own, directly with mills"),
        ("Real Production Limits", "Understand MOQs, timelines, and capacity"),
        ("Complete Independence", "Operate without traders, agents, or brokers"),
    ];

    html! {
        <section class="section bg-obsidian layered">
            <div class="backdrop">
                <img src="https://images.unsplash.com/photo-1760818072388-4604d5cb39ac?q=80&w=2070" alt="Yarn" />
            </div>
            <div class="container">
                <AnimatedSection>
                    <p class="label-text centered">{"The Core Promise"}</p>
                    <h2 class="centered">{"BY THE END, YOU WILL"}</h2>
                    <p class="muted centered">
                        {"This is not exposure. "}<span class="accent bold">{"This is independence."}</span>
                    </p>
                    <div class="grid-4">
                        { promises.iter().map(|(title, description)| html! {
                            <div class="card card-translucent">
                                <h3>{*title}</h3>
                                <p class="muted small">{*description}</p>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(WhatHappens)]
fn what_happens() -> Html {
    let visits = [
        "Spinning mills",
        "Powerloom weaving units",
        "Dyeing & processing houses",
        "Printing units",
        "Garment factories",
    ];
    let activities = [
        "Speak directly with owners and production managers",
        "See live cost breakdowns (ex-mill price, MOQ, lead times)",
        "Ask real sourcing questions—and get real answers",
    ];

    html! {
        <section class="section bg-steel">
            <div class="container">
                <AnimatedSection class={classes!("grid-2", "align-center")}>
                    <div class="captioned-image">
                        <img class="industrial-image" src="https://images.unsplash.com/photo-1764114909312-c27b89ec7223?q=80&w=2070" alt="Workers" />
                        <p class="caption">
                            {"No sales theatre. No curated narratives."}<br />
                            <span class="white">{"No factory prepared \"for foreigners.\""}</span>
                        </p>
                    </div>
                    <div>
                        <p class="label-text">{"Deal-First Approach"}</p>
                        <h2>{"WHAT ACTUALLY"}<br /><span class="accent">{"HAPPENS"}</span></h2>
                        <h3>{"You Will Visit:"}</h3>
                        { bullet_list(&visits, "▪", "accent") }
                        <h3>{"At Each Stop:"}</h3>
                        { bullet_list(&activities, "✓", "accent") }
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(WhyNotTour)]
fn why_not_tour() -> Html {
    let points = [
        "No sponsored factories",
        "No commissions from mills",
        "No trader relationships",
        "No eco-marketing bias",
    ];
    let selection = ["Price realism", "Capacity", "Operational honesty"];

    html! {
        <section class="section bg-obsidian">
            <div class="container">
                <AnimatedSection class={classes!("medium")}>
                    <p class="label-text centered">{"Structurally Clean"}</p>
                    <h2 class="centered">{"WHY THIS IS "}<span class="accent">{"NOT A TOUR"}</span></h2>
                    <div class="grid-2 tight">
                        { points.iter().map(|p| html! {
                            <div class="pill-row">{*p}</div>
                        }).collect::<Html>() }
                    </div>
                    <div class="card card-translucent">
                        <h3>{"Factories Are Selected For:"}</h3>
                        <div class="tags">
                            { selection.iter().map(|s| html! { <span class="tag">{*s}</span> }).collect::<Html>() }
                        </div>
                        <hr />
                        <p class="muted">
                            {"If something is inefficient, you'll see it."}<br />
                            <span class="white">{"If something is cheap, you'll understand why."}</span>
                        </p>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    let chain = ["Fiber", "Yarn", "Fabric", "Processing", "Garment", "Market"];
    let learnings = [
        "How early decisions destroy margins later",
        "Why some defects appear only at finishing or garment stage",
        "How timelines collapse at scale",
        "Where real negotiation power comes from",
    ];

    html! {
        <section class="section bg-steel">
            <div class="container">
                <AnimatedSection>
                    <p class="label-text centered">{"The Real Value Chain"}</p>
                    <h2 class="centered">{"HOW THE LEARNING "}<span class="accent">{"ACTUALLY WORKS"}</span></h2>
                    <div class="chain">
                        { chain.iter().enumerate().map(|(i, stage)| html! {
                            <div class="chain-step">
                                <span class="chain-stage">{*stage}</span>
                                if i < chain.len() - 1 {
                                    <span class="accent">{"→"}</span>
                                }
                            </div>
                        }).collect::<Html>() }
                    </div>
                    <div class="card card-dark narrow">
                        <h3>{"You Learn:"}</h3>
                        <ul class="bullet-list">
                            { learnings.iter().enumerate().map(|(i, l)| html! {
                                <li><span class="accent bold">{format!("{:02}", i + 1)}</span>{*l}</li>
                            }).collect::<Html>() }
                        </ul>
                        <hr />
                        <p class="white centered">
                            {"At TNTX, "}<span class="accent">{"the factories are the syllabus."}</span>
                        </p>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(ProgramSnapshot)]
fn program_snapshot() -> Html {
    let details = [
        ("9", "Days"),
        ("15", "Max Participants"),
        ("Coimbatore", "Location"),
        ("∞", "Post-program Access"),
    ];

    html! {
        <section class="section bg-obsidian">
            <div class="container">
                <AnimatedSection>
                    <p class="label-text centered">{"Program Details"}</p>
                    <h2 class="centered">{"PROGRAM "}<span class="accent">{"SNAPSHOT"}</span></h2>
                    <div class="grid-4 compact">
                        { details.iter().map(|(value, label)| html! {
                            <div class="card card-steel centered">
                                <div class="stat-number">{*value}</div>
                                <p class="label-text">{*label}</p>
                            </div>
                        }).collect::<Html>() }
                    </div>
                    <p class="muted centered spaced">
                        {"Small cohort is what enables "}<span class="white">{"real access."}</span><br />
                        {"Supplier contacts remain open post-program."}
                    </p>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="section bg-steel">
            <div class="container">
                <AnimatedSection>
                    <p class="label-text centered">{"Past Participants"}</p>
                    <h2 class="centered">{"WHAT THEY "}<span class="accent">{"SAY"}</span></h2>
                    <div class="grid-3">
                        { TESTIMONIALS.iter().map(|t| html! {
                            <div class="card card-dark">
                                <p class="quote-mark">{"“"}</p>
                                <p class="muted">{format!("\"{}\"", t.quote)}</p>
                                <div class="attribution">
                                    <p class="white heading small">{t.name}</p>
                                    <p class="muted tiny">{t.role}</p>
                                    <p class="accent tiny">{t.location}</p>
                                </div>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(AcademicSection)]
fn academic_section() -> Html {
    html! {
        <section class="section bg-obsidian">
            <div class="container">
                <AnimatedSection class={classes!("grid-2", "align-center")}>
                    <div>
                        <p class="label-text">{"Academic Access"}</p>
                        <h2>{"FOR PROFESSORS"}<br /><span class="accent">{"& STUDENTS"}</span></h2>
                        <div class="card card-steel">
                            <p class="white">{"Professors can be sponsored to audit the course"}</p>
                            <p class="muted small">{"Students accepted even without immediate buying power"}</p>
                        </div>
                        <p class="muted">{"The objective is not buying."}</p>
                        <p class="white">{"The objective is learning how sourcing works before money is at risk."}</p>
                        <p class="accent">{"TNTX complements theory with operational reality."}</p>
                    </div>
                    <img class="industrial-image section-image" src="https://images.unsplash.com/photo-1632932580949-3182167aaebb?q=80&w=2070" alt="Cotton Yarn" />
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(WhyTntx)]
fn why_tntx() -> Html {
    html! {
        <section class="section bg-steel">
            <div class="container">
                <AnimatedSection class={classes!("narrow", "centered")}>
                    <p class="label-text">{"About"}</p>
                    <h2>{"WHY "}<span class="accent">{"TNTX"}</span></h2>
                    <p class="white large">
                        {"Tamilnadu Textile Exchange is a practitioner-led platform built to decode India's textile ecosystem for global buyers."}
                    </p>
                    <div class="grid-3 tight">
                        { ["No brokers", "No markups", "No storytelling fluff"].iter().map(|t| html! {
                            <div class="card card-dark"><p class="white heading">{*t}</p></div>
                        }).collect::<Html>() }
                    </div>
                    <p class="muted spaced">{"Just direct access to how textiles are actually made, priced, and negotiated."}</p>
                    <Link<Route> to={Route::About} classes="outline-button">
                        {"Learn More About TNTX ›"}
                    </Link<Route>>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(FaqSection)]
fn faq_section() -> Html {
    html! {
        <section class="section bg-obsidian">
            <div class="container">
                <AnimatedSection class={classes!("narrow")}>
                    <p class="label-text centered">{"Frequently Asked"}</p>
                    <h2 class="centered">{"ADMISSION "}<span class="accent">{"FAQ"}</span></h2>
                    <FaqAccordion entries={FAQS} />
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(ApplicationProcess)]
fn application_process() -> Html {
    let steps = [
        "Short application form",
        "Screening call (fit > money)",
        "Confirmation + onboarding checklist",
    ];
    let deadline = config::format_long_date(&config::application_deadline());

    html! {
        <section class="section bg-steel">
            <div class="container">
                <AnimatedSection class={classes!("narrow")}>
                    <p class="label-text centered">{"How to Apply"}</p>
                    <h2 class="centered">{"APPLICATION "}<span class="accent">{"PROCESS"}</span></h2>
                    <div class="steps">
                        { steps.iter().enumerate().map(|(i, text)| html! {
                            <div class="step">
                                <span class="stat-number">{format!("{:02}", i + 1)}</span>
                                <span class="white large">{*text}</span>
                            </div>
                        }).collect::<Html>() }
                    </div>
                    <div class="card card-dark card-accent centered">
                        <p class="muted">{"This is not open enrollment."}</p>
                        <p class="white heading large">{"Access is intentional."}</p>
                        <p class="warning small deadline-note">{format!("Applications close {}", deadline)}</p>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    let cohort_label = config::format_short_date(&config::cohort_start());
    let stats = [
        ("15".to_string(), "People"),
        ("9".to_string(), "Days"),
        (cohort_label, "Cohort Start"),
    ];

    html! {
        <section class="section bg-obsidian layered">
            <div class="backdrop strong">
                <img class="industrial-image" src="https://images.unsplash.com/photo-1636986056375-184676d8ca14?q=80&w=2070" alt="Mill" />
            </div>
            <div class="container">
                <AnimatedSection class={classes!("narrow", "centered")}>
                    <p class="label-text">{"Final Positioning"}</p>
                    <p class="muted small">{"This is not education tourism."}</p>
                    <p class="muted small">{"It is not networking."}</p>
                    <p class="white">
                        {"It is "}<span class="accent">{"industry entry"}</span>
                        {"— for people who want control, clarity, and long-term sourcing independence."}
                    </p>
                    <Link<Route> to={Route::Apply} classes="cta-button large">
                        <span>{"Apply for the Intensive"}</span>
                        <i class="arrow">{"→"}</i>
                    </Link<Route>>
                    <div class="final-stats">
                        { stats.iter().map(|(value, label)| html! {
                            <div>
                                <p class="stat-number">{value.clone()}</p>
                                <p class="label-text">{*label}</p>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <Hero />
            <ProblemSection />
            <TargetAudience />
            <CorePromise />
            <WhatHappens />
            <WhyNotTour />
            <HowItWorks />
            <ProgramSnapshot />
            <Testimonials />
            <AcademicSection />
            <WhyTntx />
            <FaqSection />
            <ApplicationProcess />
            <FinalCta />
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: flex-end;
                    padding-bottom: 5rem;
                }
                .hero-image {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, var(--obsidian) 10%, rgba(10, 10, 10, 0.6) 60%, rgba(10, 10, 10, 0.3));
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                }
                .hero-title {
                    font-family: var(--font-heading);
                    font-size: clamp(2.25rem, 8vw, 4.5rem);
                    line-height: 0.95;
                    margin: 1rem 0 1.5rem;
                }
                .hero-sub {
                    color: var(--smoke);
                    font-size: 1.125rem;
                    max-width: 42rem;
                    margin-bottom: 2rem;
                    line-height: 1.6;
                }
                .hero-facts {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem 2rem;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid var(--zinc);
                    color: #ffffff;
                }
                .hero-facts span::before {
                    content: "■ ";
                    color: var(--orange);
                }
                .hero-dates {
                    margin-top: 2rem;
                    padding: 1rem;
                    background: rgba(24, 24, 27, 0.5);
                    border: 1px solid var(--zinc);
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .hero-divider {
                    display: none;
                }
                .deadline {
                    text-align: center;
                }
                .deadline-date {
                    font-family: var(--font-heading);
                    color: #ffffff;
                    font-size: 1.25rem;
                    margin-top: 0.5rem;
                }
                .section {
                    padding: 6rem 0;
                }
                .section h2 {
                    font-family: var(--font-heading);
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    color: #ffffff;
                    margin: 1rem 0 3rem;
                }
                .section h3 {
                    font-family: var(--font-heading);
                    color: #ffffff;
                    font-size: 1.125rem;
                    margin: 1.5rem 0 1rem;
                }
                .layered {
                    position: relative;
                }
                .layered .container {
                    position: relative;
                }
                .backdrop {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                }
                .backdrop.strong {
                    opacity: 0.2;
                }
                .backdrop img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .narrow {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .medium {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .grid-2, .grid-3, .grid-4 {
                    display: grid;
                    gap: 1.5rem;
                }
                .grid-2.tight, .grid-3.tight {
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .align-center {
                    align-items: center;
                }
                .card {
                    border: 1px solid var(--zinc);
                    padding: 2rem;
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }
                .card:hover {
                    border-color: var(--orange);
                    transform: translateY(-2px);
                }
                .card-dark {
                    background: var(--obsidian);
                }
                .card-steel {
                    background: var(--steel);
                }
                .card-translucent {
                    background: rgba(24, 24, 27, 0.5);
                }
                .card-warning {
                    border-color: rgba(127, 29, 29, 0.3);
                }
                .card-accent {
                    border-color: rgba(255, 107, 0, 0.3);
                }
                .card-footnote {
                    margin-top: 2rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--zinc);
                }
                .bullet-list {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    color: var(--smoke);
                }
                .bullet-list li span {
                    margin-right: 0.75rem;
                }
                .captioned-image {
                    position: relative;
                }
                .captioned-image img, .section-image {
                    width: 100%;
                    height: 400px;
                    object-fit: cover;
                }
                .caption {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    padding: 1.5rem;
                    font-size: 0.875rem;
                    color: var(--smoke);
                    background: linear-gradient(to top, var(--obsidian), transparent);
                }
                .pill-row {
                    background: var(--steel);
                    border: 1px solid var(--zinc);
                    padding: 1rem;
                    color: #ffffff;
                }
                .tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .tag {
                    color: var(--orange);
                    background: var(--obsidian);
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(255, 107, 0, 0.3);
                }
                hr {
                    border: none;
                    border-top: 1px solid var(--zinc);
                    margin: 1.5rem 0;
                }
                .chain {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 4rem;
                }
                .chain-step {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .chain-stage {
                    font-family: var(--font-heading);
                    color: #ffffff;
                    background: var(--obsidian);
                    padding: 0.5rem 1rem;
                    border: 1px solid var(--zinc);
                }
                .quote-mark {
                    font-size: 3rem;
                    line-height: 1;
                    color: rgba(255, 107, 0, 0.3);
                }
                .attribution {
                    border-top: 1px solid var(--zinc);
                    padding-top: 1rem;
                    margin-top: 1.5rem;
                }
                .steps {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .step {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    background: var(--obsidian);
                    border: 1px solid var(--zinc);
                    padding: 1.5rem;
                }
                .deadline-note {
                    margin-top: 1rem;
                    padding-top: 1rem;
                    border-top: 1px solid var(--zinc);
                }
                .final-stats {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid var(--zinc);
                }
                .spaced {
                    margin: 2rem 0;
                }
                @media (min-width: 640px) {
                    .grid-4 {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (min-width: 768px) {
                    .grid-2 {
                        grid-template-columns: 1fr 1fr;
                    }
                    .grid-3 {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                @media (min-width: 1024px) {
                    .section {
                        padding: 8rem 0;
                    }
                    .hero {
                        padding-bottom: 8rem;
                    }
                    .hero-dates {
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .hero-divider {
                        display: block;
                        width: 1px;
                        height: 4rem;
                        background: var(--zinc);
                    }
                    .grid-4 {
                        grid-template-columns: repeat(4, 1fr);
                    }
                    .grid-2 {
                        gap: 4rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::{CountdownAction, CountdownModel};
    use chrono::Duration;
    use std::rc::Rc;
    use yew::Reducible;

    #[test]
    fn deadline_heading_follows_the_live_phase() {
        let deadline = config::application_deadline().with_timezone(&Utc);
        let model = Rc::new(CountdownModel::new(deadline, deadline - Duration::seconds(1)));
        assert_eq!(deadline_heading(model.phase), "Applications Close");

        let model = model.reduce(CountdownAction::Tick(deadline + Duration::milliseconds(1)));
        assert_eq!(deadline_heading(model.phase), "Applications Closed");
    }

    #[test]
    fn faq_has_seven_distinct_questions() {
        assert_eq!(FAQS.len(), 7);
        for (i, entry) in FAQS.iter().enumerate() {
            assert!(FAQS[i + 1..].iter().all(|other| other.question != entry.question));
        }
    }
}
