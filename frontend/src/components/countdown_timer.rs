use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::countdown::{pad, CountdownAction, CountdownModel, Phase, TICK_MILLIS};

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    pub target: DateTime<Tz>,
    pub label: AttrValue,
    /// Shown instead of `label` once the target has passed.
    #[prop_or_default]
    pub elapsed_label: Option<AttrValue>,
}

/// A running 1 s tick source. Stopping or dropping it clears the interval, so
/// the callback never fires afterwards.
pub struct Ticker {
    interval: Interval,
}

impl Ticker {
    pub fn start<F>(period_millis: u32, on_tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            interval: Interval::new(period_millis, on_tick),
        }
    }

    pub fn stop(self) {
        drop(self.interval);
    }
}

/// Live countdown to `target`, recomputed every [`TICK_MILLIS`] while the
/// calling component is mounted.
#[hook]
pub fn use_countdown(target: DateTime<Utc>) -> UseReducerHandle<CountdownModel> {
    let model = use_reducer(move || CountdownModel::new(target, Utc::now()));

    {
        let dispatcher = model.dispatcher();
        use_effect_with_deps(
            move |target: &DateTime<Utc>| {
                dispatcher.dispatch(CountdownAction::Reset {
                    target: *target,
                    now: Utc::now(),
                });

                let ticker = Ticker::start(TICK_MILLIS, move || {
                    dispatcher.dispatch(CountdownAction::Tick(Utc::now()));
                });
                debug!("Countdown to {} started", target);

                // Runs on unmount and before a new target replaces this one,
                // whether or not the first tick has fired yet.
                move || {
                    ticker.stop();
                    debug!("Countdown stopped");
                }
            },
            target,
        );
    }

    model
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let model = use_countdown(props.target.with_timezone(&Utc));

    let label = match (&model.phase, &props.elapsed_label) {
        (Phase::Elapsed, Some(elapsed)) => elapsed.clone(),
        _ => props.label.clone(),
    };

    html! {
        <div class="countdown">
            <p class="label-text countdown-label">{label}</p>
            <div class="countdown-units">
                { model.state.units().iter().map(|(value, unit)| {
                    html! {
                        <div class="countdown-unit" key={*unit}>
                            <p class="stat-number countdown-value">{pad(*value)}</p>
                            <p class="label-text countdown-unit-label">{*unit}</p>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
            <style>
                {r#"
                .countdown {
                    text-align: center;
                }
                .countdown-label {
                    margin-bottom: 0.75rem;
                }
                .countdown-units {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .countdown-unit {
                    background: var(--steel);
                    border: 1px solid var(--zinc);
                    padding: 0.5rem 0.75rem;
                    min-width: 60px;
                }
                .countdown-value {
                    font-size: 1.25rem;
                }
                .countdown-unit-label {
                    font-size: 10px;
                }
                @media (min-width: 640px) {
                    .countdown-units {
                        gap: 1rem;
                    }
                    .countdown-unit {
                        padding: 0.75rem 1rem;
                    }
                    .countdown-value {
                        font-size: 1.5rem;
                    }
                    .countdown-unit-label {
                        font-size: 0.75rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::Duration;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::config::PROGRAM_TZ;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counting_ticker(count: &Rc<Cell<u32>>) -> Ticker {
        let count = count.clone();
        Ticker::start(TICK_MILLIS, move || count.set(count.get() + 1))
    }

    async fn wait_ticks(ticks: u32) {
        TimeoutFuture::new(ticks * TICK_MILLIS + TICK_MILLIS / 2).await;
    }

    fn mount_root() -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    async fn stopped_before_first_tick_never_fires() {
        let count = Rc::new(Cell::new(0));
        counting_ticker(&count).stop();
        wait_ticks(2).await;
        assert_eq!(count.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn no_ticks_after_stop() {
        let count = Rc::new(Cell::new(0));
        let ticker = counting_ticker(&count);
        wait_ticks(1).await;
        assert_eq!(count.get(), 1);

        ticker.stop();
        wait_ticks(2).await;
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn repeated_start_stop_leaves_nothing_running() {
        let count = Rc::new(Cell::new(0));
        for _ in 0..50 {
            counting_ticker(&count).stop();
        }
        wait_ticks(2).await;
        assert_eq!(count.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn unmounted_timer_stops_updating() {
        let root = mount_root();
        let target = (Utc::now() + Duration::days(3)).with_timezone(&PROGRAM_TZ);
        let app = yew::Renderer::<CountdownTimer>::with_root_and_props(
            root.clone(),
            CountdownTimerProps {
                target,
                label: "Cohort Starts".into(),
                elapsed_label: None,
            },
        )
        .render();

        wait_ticks(1).await;
        let text = root.text_content().unwrap_or_default();
        assert!(text.contains("Cohort Starts"));
        assert!(text.contains("Days"));

        app.destroy();
        wait_ticks(2).await;
        assert_eq!(root.inner_html(), "");
    }

    #[wasm_bindgen_test]
    async fn unmount_before_first_tick() {
        let root = mount_root();
        for _ in 0..20 {
            let target = (Utc::now() + Duration::hours(1)).with_timezone(&PROGRAM_TZ);
            let app = yew::Renderer::<CountdownTimer>::with_root_and_props(
                root.clone(),
                CountdownTimerProps {
                    target,
                    label: "Soon".into(),
                    elapsed_label: None,
                },
            )
            .render();
            TimeoutFuture::new(0).await;
            app.destroy();
        }
        wait_ticks(2).await;
        assert_eq!(root.inner_html(), "");
    }
}
