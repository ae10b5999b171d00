use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, window, Element, Event, MouseEvent};
use yew::prelude::*;

use crate::components::listener::Listener;
use crate::particles::device::is_mobile_agent;

/// Elements that enlarge the cursor while hovered.
pub const INTERACTIVE_SELECTOR: &str = "a, button, [role=\"button\"], input, textarea, select";

/// Set on `<html>` while the custom cursor replaces the system one.
const ACTIVE_CLASS: &str = "has-custom-cursor";

/// Half the cursor's 50 px diameter, so it is centred on the pointer.
const CURSOR_OFFSET: f64 = 25.0;

/// What the browser reports about touch input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchSignals {
    pub has_touch_events: bool,
    pub max_touch_points: i32,
    pub coarse_pointer: bool,
    pub user_agent: String,
}

/// Any single signal is enough to skip the custom cursor.
pub fn is_touch_device(signals: &TouchSignals) -> bool {
    signals.has_touch_events
        || signals.max_touch_points > 0
        || signals.coarse_pointer
        || is_mobile_agent(&signals.user_agent)
}

fn read_touch_signals() -> TouchSignals {
    let Some(window) = window() else {
        return TouchSignals::default();
    };
    let navigator = window.navigator();
    TouchSignals {
        has_touch_events: js_sys::Reflect::has(&window, &"ontouchstart".into()).unwrap_or(false),
        max_touch_points: navigator.max_touch_points(),
        coarse_pointer: window
            .match_media("(pointer: coarse)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false),
        user_agent: navigator.user_agent().unwrap_or_default(),
    }
}

fn over_interactive(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

/// Ring that trails the mouse on desktop. Touch devices get nothing.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let touch = use_memo(|_| is_touch_device(&read_touch_signals()), ());
    let position = use_state_eq(|| (0.0f64, 0.0f64));
    let hovering = use_state_eq(|| false);

    {
        let position = position.clone();
        let hovering = hovering.clone();
        use_effect_with_deps(
            move |touch: &bool| {
                let mut listeners = Vec::new();
                let root = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .filter(|_| !*touch);
                if let Some(root) = &root {
                    if let Err(e) = root.class_list().add_1(ACTIVE_CLASS) {
                        debug!("could not hide the system cursor: {:?}", e);
                    }
                }
                if !*touch {
                    if let Some(window) = window() {
                        let attached = Listener::attach(&window, "mousemove", move |event: Event| {
                            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                                position.set((event.client_x() as f64, event.client_y() as f64));
                            }
                        });
                        listeners.push(attached);
                        if let Some(document) = window.document() {
                            listeners.push(Listener::attach(&document, "mouseover", move |event: Event| {
                                hovering.set(over_interactive(&event));
                            }));
                        }
                    }
                }
                let listeners: Vec<Listener> = listeners
                    .into_iter()
                    .filter_map(|attached| attached.map_err(|e| debug!("cursor listener failed: {:?}", e)).ok())
                    .collect();
                move || {
                    drop(listeners);
                    if let Some(root) = root {
                        let _ = root.class_list().remove_1(ACTIVE_CLASS);
                    }
                }
            },
            *touch,
        );
    }

    if *touch {
        return html! {};
    }

    let (x, y) = *position;
    html! {
        <div
            class={classes!("custom-cursor", hovering.then(|| "cursor-hover"))}
            style={format!("transform: translate({}px, {}px)", x - CURSOR_OFFSET, y - CURSOR_OFFSET)}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/126.0";

    fn desktop() -> TouchSignals {
        TouchSignals {
            user_agent: DESKTOP.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn plain_desktop_gets_the_cursor() {
        assert!(!is_touch_device(&desktop()));
    }

    #[test]
    fn any_touch_signal_hides_the_cursor() {
        let cases = [
            TouchSignals { has_touch_events: true, ..desktop() },
            TouchSignals { max_touch_points: 5, ..desktop() },
            TouchSignals { coarse_pointer: true, ..desktop() },
            TouchSignals {
                user_agent: "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)".to_string(),
                ..desktop()
            },
        ];
        for signals in &cases {
            assert!(is_touch_device(signals), "{:?}", signals);
        }
    }

    #[test]
    fn selector_covers_every_clickable_kind() {
        for tag in ["a", "button", "[role=\"button\"]", "input", "textarea", "select"] {
            assert!(INTERACTIVE_SELECTOR.split(", ").any(|part| part == tag), "{}", tag);
        }
    }
}
