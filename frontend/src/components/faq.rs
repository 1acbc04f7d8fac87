use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Next open item after clicking `clicked`. At most one item is open and
/// clicking the open one closes it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { props.entries.iter().enumerate().map(|(i, entry)| {
                let is_open = *open == Some(i);
                let toggle = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggle_open(*open, i));
                    })
                };
                html! {
                    <div class={classes!("faq-item", is_open.then(|| "open"))} key={entry.question}>
                        <button class="faq-question" onclick={toggle}>
                            <span class="question-text">{entry.question}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        if is_open {
                            <div class="faq-answer">
                                <p>{entry.answer}</p>
                            </div>
                        }
                    </div>
                }
            }).collect::<Html>() }
            <style>
                {r#"
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    background: var(--steel);
                    border: 1px solid var(--zinc);
                    padding: 0 1.5rem;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem 0;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-family: var(--font-heading);
                    font-size: 1rem;
                    text-align: left;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .faq-question:hover {
                    color: var(--orange);
                }
                .toggle-icon {
                    color: var(--orange);
                    font-size: 1.25rem;
                }
                .faq-answer {
                    color: var(--smoke);
                    padding-bottom: 1.5rem;
                    line-height: 1.7;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_item_open_at_a_time() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_open(open, 4), Some(4));
    }

    #[test]
    fn clicking_open_item_collapses_it() {
        assert_eq!(toggle_open(Some(3), 3), None);
    }
}
