//! Document metadata for search engines and link previews.
//!
//! Trunk serves a bare `index.html`, so titles, meta tags, the canonical
//! link and the JSON-LD block are written into `<head>` whenever the route or
//! the language changes.

use log::{debug, warn};
use serde::Serialize;
use web_sys::{window, Document};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::i18n::{translate, use_language, Language};
use crate::Route;

pub const SITE_NAME: &str = "UWJOTA";
const AUTHOR: &str = "João Marcelo Venancio Ribeiro";
const OG_IMAGE_ALT: &str = "uwjota - Frontend Developer";

const KEYWORDS: &[&str] = &[
    "João Marcelo",
    "uwjota",
    "desenvolvimento de sites",
    "automações",
    "soluções audiovisuais",
    "frontend developer",
    "React",
    "TypeScript",
    "Next.js",
    "JavaScript",
    "Python",
    "C",
    "desenvolvimento web",
    "UI/UX",
    "design gráfico",
    "edição de vídeo",
    "tráfego pago",
    "WordPress",
    "e-commerce",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl MetaKey {
    fn attribute(self) -> (&'static str, &'static str) {
        match self {
            MetaKey::Name(key) => ("name", key),
            MetaKey::Property(key) => ("property", key),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

#[derive(Serialize)]
struct Person {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "alternateName")]
    alternate_name: &'static str,
    description: String,
    url: String,
    image: String,
    #[serde(rename = "jobTitle")]
    job_title: &'static str,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'static str>,
    #[serde(rename = "knowsAbout")]
    knows_about: &'static [&'static str],
}

fn absolute(path: &str) -> String {
    format!("{}{}", config::get_site_url(), path)
}

/// Canonical address for a route. Unknown paths point at the home page.
pub fn canonical_url(route: &Route) -> String {
    match route {
        Route::NotFound => config::get_site_url().to_string(),
        other => {
            let path = other.to_path();
            if path == "/" {
                config::get_site_url().to_string()
            } else {
                absolute(&path)
            }
        }
    }
}

/// Every meta tag the site publishes for `route`, with descriptions in
/// `language`.
pub fn meta_tags(language: Language, route: &Route) -> Vec<MetaTag> {
    let description = translate(language, "about.content");
    let image = absolute(config::PROFILE_PHOTO);
    let url = canonical_url(route);
    let robots = match route {
        Route::NotFound => "noindex, follow",
        _ => "index, follow, max-image-preview:large",
    };
    let locale = match language {
        Language::Pt => "pt_BR",
        Language::En => "en_US",
    };
    let tag = |key, content: &str| MetaTag {
        key,
        content: content.to_string(),
    };

    vec![
        tag(MetaKey::Name("description"), &description),
        tag(MetaKey::Name("keywords"), &KEYWORDS.join(", ")),
        tag(MetaKey::Name("author"), AUTHOR),
        tag(MetaKey::Name("creator"), AUTHOR),
        tag(MetaKey::Name("robots"), robots),
        tag(MetaKey::Property("og:type"), "website"),
        tag(MetaKey::Property("og:locale"), locale),
        tag(MetaKey::Property("og:url"), &url),
        tag(MetaKey::Property("og:site_name"), SITE_NAME),
        tag(MetaKey::Property("og:title"), SITE_NAME),
        tag(MetaKey::Property("og:description"), &description),
        tag(MetaKey::Property("og:image"), &image),
        tag(MetaKey::Property("og:image:width"), "1200"),
        tag(MetaKey::Property("og:image:height"), "630"),
        tag(MetaKey::Property("og:image:alt"), OG_IMAGE_ALT),
        tag(MetaKey::Name("twitter:card"), "summary_large_image"),
        tag(MetaKey::Name("twitter:title"), SITE_NAME),
        tag(MetaKey::Name("twitter:description"), &description),
        tag(MetaKey::Name("twitter:image"), &image),
        tag(MetaKey::Name("twitter:creator"), "@uwjota"),
    ]
}

pub fn person_json_ld(language: Language) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Person {
        context: "https://schema.org",
        kind: "Person",
        name: AUTHOR,
        alternate_name: "uwjota",
        description: translate(language, "about.content"),
        url: config::get_site_url().to_string(),
        image: absolute(config::PROFILE_PHOTO),
        job_title: "Full Stack Developer",
        same_as: vec![
            "https://github.com/uwjota",
            "https://www.instagram.com/uwjota/",
            "https://www.linkedin.com/in/joao-marcelo-venancio-ribeiro/",
        ],
        knows_about: &["JavaScript", "TypeScript", "React", "Next.js", "Node.js", "Python", "WordPress"],
    })
}

fn upsert_meta(document: &Document, meta: &MetaTag) -> Result<(), wasm_bindgen::JsValue> {
    let (attribute, key) = meta.key.attribute();
    let selector = format!("meta[{}=\"{}\"]", attribute, key);
    let element = match document.query_selector(&selector)? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("meta")?;
            created.set_attribute(attribute, key)?;
            if let Some(head) = document.head() {
                head.append_child(&created)?;
            }
            created
        }
    };
    element.set_attribute("content", &meta.content)
}

fn upsert_head_element(
    document: &Document,
    selector: &str,
    tag: &str,
    attributes: &[(&str, &str)],
) -> Result<web_sys::Element, wasm_bindgen::JsValue> {
    if let Some(existing) = document.query_selector(selector)? {
        return Ok(existing);
    }
    let created = document.create_element(tag)?;
    for (name, value) in attributes {
        created.set_attribute(name, value)?;
    }
    if let Some(head) = document.head() {
        head.append_child(&created)?;
    }
    Ok(created)
}

fn apply(document: &Document, language: Language, route: &Route) -> Result<(), wasm_bindgen::JsValue> {
    document.set_title(SITE_NAME);
    for meta in meta_tags(language, route) {
        upsert_meta(document, &meta)?;
    }

    let canonical = upsert_head_element(document, "link[rel=\"canonical\"]", "link", &[("rel", "canonical")])?;
    canonical.set_attribute("href", &canonical_url(route))?;

    match person_json_ld(language) {
        Ok(json) => {
            let script = upsert_head_element(
                document,
                "script#person-json-ld",
                "script",
                &[("id", "person-json-ld"), ("type", "application/ld+json")],
            )?;
            script.set_text_content(Some(&json));
        }
        Err(e) => warn!("could not serialize structured data: {}", e),
    }
    Ok(())
}

/// Renders nothing; keeps `<head>` in step with the route and language.
/// Must sit inside the router.
#[function_component(SeoHead)]
pub fn seo_head() -> Html {
    let language = use_language();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    use_effect_with_deps(
        |(language, route): &(Language, Route)| {
            if let Some(document) = window().and_then(|w| w.document()) {
                match apply(&document, *language, route) {
                    Ok(()) => debug!("document metadata set for {} ({:?})", route.to_path(), language),
                    Err(e) => warn!("could not update document metadata: {:?}", e),
                }
            }
            || ()
        },
        (language.language, route),
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_of(tags: &[MetaTag], key: MetaKey) -> Option<&str> {
        tags.iter().find(|t| t.key == key).map(|t| t.content.as_str())
    }

    #[test]
    fn description_follows_language() {
        let pt = meta_tags(Language::Pt, &Route::Intro);
        let en = meta_tags(Language::En, &Route::Intro);
        assert_eq!(
            content_of(&pt, MetaKey::Name("description")),
            Some("Eu sou o João, e ajudo empresas. Com sites, automações e soluções audiovisuais!")
        );
        assert_eq!(
            content_of(&en, MetaKey::Property("og:description")),
            Some("I am João, and I help companies. With websites, automations and audiovisual solutions!")
        );
        assert_eq!(content_of(&pt, MetaKey::Property("og:locale")), Some("pt_BR"));
        assert_eq!(content_of(&en, MetaKey::Property("og:locale")), Some("en_US"));
    }

    #[test]
    fn every_meta_key_is_unique() {
        let tags = meta_tags(Language::Pt, &Route::Site);
        for (i, tag) in tags.iter().enumerate() {
            assert!(tags[i + 1..].iter().all(|other| other.key != tag.key), "{:?} repeated", tag.key);
        }
    }

    #[test]
    fn json_ld_describes_a_person() {
        let json = person_json_ld(Language::En).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], AUTHOR);
        assert_eq!(value["sameAs"].as_array().map(Vec::len), Some(3));
        assert!(value["image"].as_str().unwrap().ends_with(config::PROFILE_PHOTO));
    }

    #[test]
    fn url_and_robots_follow_the_route() {
        let home = config::get_site_url();
        let site = format!("{}/site", home);
        assert_eq!(canonical_url(&Route::Intro), home);
        assert_eq!(canonical_url(&Route::Site), site);
        assert_eq!(canonical_url(&Route::NotFound), home);

        let content = meta_tags(Language::En, &Route::Site);
        assert_eq!(content_of(&content, MetaKey::Property("og:url")), Some(site.as_str()));
        assert_eq!(
            content_of(&content, MetaKey::Name("robots")),
            Some("index, follow, max-image-preview:large")
        );

        let missing = meta_tags(Language::En, &Route::NotFound);
        assert_eq!(content_of(&missing, MetaKey::Property("og:url")), Some(home));
        assert_eq!(content_of(&missing, MetaKey::Name("robots")), Some("noindex, follow"));
    }
}
