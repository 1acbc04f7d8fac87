use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// How far into the viewport an element's top edge must be before it reveals.
const REVEAL_MARGIN_PX: f64 = 100.0;

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN_PX
}

fn in_view(element: &Element) -> bool {
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    should_reveal(element.get_bounding_client_rect().top(), viewport_height)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time it scrolls into view. Once revealed it
/// stays revealed.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let is_revealed = *revealed;
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |is_revealed: &bool| {
                let mut listener = None;

                if !*is_revealed {
                    if node.cast::<Element>().map_or(false, |el| in_view(&el)) {
                        revealed.set(true);
                    } else if let Some(window) = web_sys::window() {
                        let scroll_node = node.clone();
                        let scroll_callback = Closure::wrap(Box::new(move || {
                            if scroll_node.cast::<Element>().map_or(false, |el| in_view(&el)) {
                                revealed.set(true);
                            }
                        }) as Box<dyn FnMut()>);

                        if window
                            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                            .is_ok()
                        {
                            listener = Some((window, scroll_callback));
                        }
                    }
                }

                // Dropped once revealed (deps change) or on unmount.
                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            is_revealed,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("animated-section", props.class.clone(), (*revealed).then(|| "visible"))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_needs_top_inside_margin() {
        assert!(should_reveal(0.0, 800.0));
        assert!(should_reveal(699.0, 800.0));
        assert!(!should_reveal(700.0, 800.0));
        assert!(!should_reveal(1_500.0, 800.0));
    }

    #[test]
    fn sections_above_the_fold_reveal() {
        // Scrolled past: negative top still counts as seen.
        assert!(should_reveal(-400.0, 800.0));
    }
}
