use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error_boundary;
mod i18n;
mod scroll;
mod sections;
mod seo;
mod particles {
    pub mod color;
    pub mod device;
    pub mod field;
    pub mod transition;
}
mod components {
    pub mod background;
    pub mod cursor;
    pub mod icons;
    pub mod language_toggle;
    pub mod listener;
    pub mod section;
}
mod pages {
    pub mod intro;
    pub mod not_found;
    pub mod site;
}

use components::cursor::CustomCursor;
use i18n::LanguageProvider;
use pages::{
    intro::Intro,
    not_found::NotFound,
    site::Site,
};
use seo::SeoHead;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Intro,
    #[at("/site")]
    Site,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Intro => {
            info!("Rendering Intro page");
            html! { <Intro /> }
        },
        Route::Site => {
            info!("Rendering Site page");
            html! { <Site /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <LanguageProvider>
            <BrowserRouter>
                <SeoHead />
                <CustomCursor />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </LanguageProvider>
    }
}

fn main() {
    // Swap the page for a static fallback on panic
    error_boundary::install();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
