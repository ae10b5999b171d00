use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::background::DynamicBackground;
use crate::components::language_toggle::{LanguageToggle, ToggleTone};
use crate::config;
use crate::i18n::use_language;
use crate::Route;

/// Landing screen. A click draws a black curtain over the page and moves on
/// to the content page once the curtain has closed.
#[function_component(Intro)]
pub fn intro() -> Html {
    let language = use_language();
    let navigator = use_navigator().unwrap();
    let transitioning = use_state(|| false);
    // cleared on unmount so a pending redirect does not fire on another page
    let mounted: Rc<Cell<bool>> = use_memo(|_| Cell::new(true), ());

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| move || mounted.set(false),
            (),
        );
    }

    let onclick = {
        let transitioning = transitioning.clone();
        Callback::from(move |_: MouseEvent| {
            if *transitioning {
                return;
            }
            transitioning.set(true);
            info!("Leaving intro");
            let navigator = navigator.clone();
            let mounted = mounted.clone();
            Timeout::new(config::INTRO_REDIRECT_DELAY_MS, move || {
                if mounted.get() {
                    navigator.push(&Route::Site);
                }
            })
            .forget();
        })
    };

    html! {
        <div class="intro">
            <DynamicBackground color="#262626" background_color="#f8f8f8" speed={0.8} />
            <div class={classes!("intro-curtain", transitioning.then(|| "closed"))} />
            <LanguageToggle tone={ToggleTone::Dark} hidden={*transitioning} />
            <div class={classes!("intro-content", transitioning.then(|| "fade-out"))} onclick={onclick}>
                <p class="intro-prompt">{ language.t("home.click") }</p>
            </div>
        </div>
    }
}
