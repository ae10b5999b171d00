use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::background::DynamicBackground;
use crate::components::language_toggle::{LanguageToggle, ToggleTone};
use crate::components::section::Section;
use crate::config;
use crate::i18n::use_language;
use crate::scroll::{active_section_index, scroll_progress};
use crate::sections::build_sections;
use crate::Route;

fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// (active section, scroll progress) for the container's current offset.
fn measure(container: &Element, section_count: usize) -> (usize, f64) {
    let top = container.scroll_top() as f64;
    (
        active_section_index(top, viewport_height(), section_count),
        scroll_progress(top, container.scroll_height() as f64, container.client_height() as f64),
    )
}

/// Content page: full-height sections in a snapping scroll container, with
/// nav dots, a progress bar and the shared black particle backdrop.
#[function_component(Site)]
pub fn site() -> Html {
    let language = use_language();
    let sections = use_memo(|language| build_sections(*language), language.language);
    let container_ref = use_node_ref();
    let active = use_state_eq(|| 0usize);
    let progress = use_state_eq(|| 0.0f64);
    let count = sections.len();

    {
        let container_ref = container_ref.clone();
        let active = active.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |count: &usize| {
                let count = *count;
                let container = container_ref.cast::<Element>();
                let listener = container.map(|container| {
                    let options = ScrollToOptions::new();
                    options.set_top(0.0);
                    container.scroll_to_with_scroll_to_options(&options);

                    let source = container.clone();
                    let on_scroll = Closure::wrap(Box::new(move || {
                        let (index, ratio) = measure(&source, count);
                        active.set(index);
                        progress.set(ratio);
                    }) as Box<dyn FnMut()>);

                    let _ = container.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    (container, on_scroll)
                });

                move || {
                    if let Some((container, on_scroll)) = listener {
                        let _ = container.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    }
                }
            },
            count,
        );
    }

    {
        let container_ref = container_ref.clone();
        let active = active.clone();
        let progress = progress.clone();
        use_event_with_window("resize", move |_: Event| {
            if let Some(container) = container_ref.cast::<Element>() {
                let (index, ratio) = measure(&container, count);
                debug!("viewport resized, active section {}", index);
                active.set(index);
                progress.set(ratio);
            }
        });
    }

    let go_to = {
        let container_ref = container_ref.clone();
        Callback::from(move |index: usize| {
            if let Some(container) = container_ref.cast::<Element>() {
                info!("Navigating to section {}", index);
                let options = ScrollToOptions::new();
                options.set_top(index as f64 * viewport_height());
                options.set_behavior(ScrollBehavior::Smooth);
                container.scroll_to_with_scroll_to_options(&options);
            }
        })
    };

    let section_label = language.t("nav.section");

    html! {
        <div class="site">
            <DynamicBackground color="#ffffff" background_color="#000000" speed={0.8} class="site-background" />
            <Link<Route> to={Route::Intro} classes="back-button">
                <svg class="back-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                </svg>
                <span>{ language.t("nav.back") }</span>
            </Link<Route>>
            <LanguageToggle tone={ToggleTone::Light} />

            <nav class="section-dots">
                { for sections.iter().enumerate().map(|(index, section)| {
                    let onclick = {
                        let go_to = go_to.clone();
                        Callback::from(move |_: MouseEvent| go_to.emit(index))
                    };
                    html! {
                        <button
                            key={section.id}
                            class={classes!("section-dot", (index == *active).then(|| "current"))}
                            aria-label={format!("{} {}", section_label, section.title)}
                            onclick={onclick}
                        />
                    }
                }) }
            </nav>
            <div class="scroll-progress" style={format!("transform: scaleX({:.4})", *progress)} />

            <div ref={container_ref} class={config::SCROLL_CONTAINER_CLASS}>
                { for sections.iter().enumerate().map(|(index, section)| html! {
                    <Section key={section.id} section={section.clone()} active={index == *active} />
                }) }
            </div>
        </div>
    }
}
