use std::panic;

use web_sys::window;

use crate::config;
use crate::i18n::{load_language, translate, BrowserStorage, Language};

/// Static page shown in place of the app after a panic. Yew cannot render
/// anymore at that point, so this is plain markup.
pub fn fallback_html(language: Language) -> String {
    format!(
        r#"<div class="error-screen">
    <div class="error-card">
        <h2>{}</h2>
        <p>{}</p>
        <button class="button-light" onclick="window.location.reload()">{}</button>
    </div>
</div>"#,
        translate(language, "error.title"),
        translate(language, "error.body"),
        translate(language, "error.reload"),
    )
}

fn show_fallback() {
    let language = load_language(&BrowserStorage).ok().flatten().unwrap_or_default();
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        body.set_inner_html(&fallback_html(language));
    }
}

/// Replaces the default panic hook. Panics are written to the console in
/// development builds only; every build swaps the page for the fallback.
pub fn install() {
    let report = config::report_errors();
    panic::set_hook(Box::new(move |info| {
        if report {
            console_error_panic_hook::hook(info);
        }
        show_fallback();
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_localized() {
        let pt = fallback_html(Language::Pt);
        assert!(pt.contains("Algo deu errado"));
        assert!(pt.contains("Recarregar Página"));

        let en = fallback_html(Language::En);
        assert!(en.contains("Something went wrong"));
        assert!(en.contains("window.location.reload()"));
        assert!(!en.contains("error."));
    }
}
