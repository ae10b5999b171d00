use yew::prelude::*;

use crate::i18n::use_language;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleTone {
    /// Dark text for light backdrops.
    Dark,
    #[default]
    Light,
}

#[derive(Properties, PartialEq)]
pub struct LanguageToggleProps {
    #[prop_or_default]
    pub tone: ToggleTone,
    #[prop_or_default]
    pub hidden: bool,
}

#[function_component(LanguageToggle)]
pub fn language_toggle(props: &LanguageToggleProps) -> Html {
    let language = use_language();

    let onclick = {
        let language = language.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            language.toggle();
        })
    };

    let tone = match props.tone {
        ToggleTone::Dark => "tone-dark",
        ToggleTone::Light => "tone-light",
    };

    html! {
        <button
            class={classes!("language-toggle", tone, props.hidden.then(|| "hidden"))}
            onclick={onclick}
            aria-label="Toggle language"
        >
            <span>{ language.language.toggle_label() }</span>
            <svg class="language-toggle-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M3 5h12M9 3v2m1.048 9.5A18.022 18.022 0 016.412 9m6.088 9h7M11 21l5-10 5 10M12.751 5C11.783 10.77 8.07 15.61 3 18.129"
                />
            </svg>
        </button>
    }
}
