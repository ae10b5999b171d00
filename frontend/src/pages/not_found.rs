use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::background::{BackgroundKind, DynamicBackground};
use crate::i18n::use_language;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let language = use_language();

    html! {
        <div class="not-found">
            <DynamicBackground kind={BackgroundKind::Ambient} />
            <div class="not-found-content">
                <h1>{ "404" }</h1>
                <p>{ language.t("notfound.title") }</p>
                <Link<Route> to={Route::Intro} classes="button-outline">
                    { language.t("notfound.home") }
                </Link<Route>>
            </div>
        </div>
    }
}
