use yew::prelude::*;

/// How an icon is drawn inside a 24x24 viewBox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// Short label in a rounded badge, for language and framework marks.
    Badge(&'static str),
    /// Stroked outline paths.
    Outline(&'static [&'static str]),
}

const GIT: &[&str] = &[
    "M6 3v12",
    "M18 9a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
    "M6 21a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
    "M18 9a9 9 0 0 1-9 9",
];
const PEN_TOOL: &[&str] = &[
    "M12 19l7-7 3 3-7 7-3-3z",
    "M18 13l-1.5-7.5L2 2l3.5 14.5L13 18l5-5z",
    "M2 2l7.586 7.586",
    "M11 13a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
];
const PALETTE: &[&str] = &[
    "M12 3a9 9 0 1 0 0 18c1.1 0 2-.9 2-2 0-.5-.2-1-.5-1.3-.3-.4-.5-.8-.5-1.3 0-1.1.9-2 2-2h2.4A4.6 4.6 0 0 0 21 9.8C21 5.9 17 3 12 3z",
    "M7.5 11.5h.01",
    "M10.5 7.5h.01",
    "M15.5 7.5h.01",
];
const VIDEO: &[&str] = &["M3 5h12v14H3z", "M15 10l6-4v12l-6-4"];
const CLICK: &[&str] = &["M9 9l11 4.5-4.5 1.5-1.5 4.5z", "M5 5l2 2", "M10 2.5v3", "M2.5 10h3"];
const ROBOT: &[&str] = &[
    "M5 9h14v10H5z",
    "M12 5v4",
    "M12 4h.01",
    "M9 13h.01",
    "M15 13h.01",
    "M9.5 16h5",
    "M2.5 12v4",
    "M21.5 12v4",
];
const CART: &[&str] = &[
    "M2 3h3l2.7 11.2a1 1 0 0 0 1 .8h8.6a1 1 0 0 0 1-.8L21 7H6.2",
    "M9 20h.01",
    "M17 20h.01",
];

const GITHUB: &[&str] = &[
    "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22",
];
const LINKEDIN: &[&str] = &[
    "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
    "M2 9h4v12H2z",
    "M4 6a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
];
const WHATSAPP: &[&str] = &[
    "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z",
    "M9 9.5c0 3 2.5 5.5 5.5 5.5l1-1.5-2-1-1 1c-1 0-2.5-1.5-2.5-2.5l1-1-1-2z",
];
const INSTAGRAM: &[&str] = &[
    "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
    "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
    "M17.5 6.5h.01",
];
const ENVELOPE: &[&str] = &["M3 5h18v14H3z", "M3 6l9 7 9-7"];

const SKILL_GLYPHS: &[(&str, Glyph)] = &[
    ("c", Glyph::Badge("C")),
    ("javascript", Glyph::Badge("JS")),
    ("python", Glyph::Badge("Py")),
    ("typescript", Glyph::Badge("TS")),
    ("react", Glyph::Badge("Re")),
    ("nodejs", Glyph::Badge("Nd")),
    ("nextjs", Glyph::Badge("Nx")),
    ("wordpress", Glyph::Badge("W")),
    ("git", Glyph::Outline(GIT)),
    ("design", Glyph::Outline(PEN_TOOL)),
    ("design2", Glyph::Outline(PALETTE)),
    ("video", Glyph::Outline(VIDEO)),
    ("ads", Glyph::Outline(CLICK)),
    ("html", Glyph::Badge("H5")),
    ("css", Glyph::Badge("C3")),
    ("tailwind", Glyph::Badge("Tw")),
    ("bootstrap", Glyph::Badge("B")),
    ("ai", Glyph::Outline(ROBOT)),
    ("ecommerce", Glyph::Outline(CART)),
];

const SOCIAL_GLYPHS: &[(&str, Glyph)] = &[
    ("GitHub", Glyph::Outline(GITHUB)),
    ("LinkedIn", Glyph::Outline(LINKEDIN)),
    ("WhatsApp", Glyph::Outline(WHATSAPP)),
    ("Instagram", Glyph::Outline(INSTAGRAM)),
    ("Email", Glyph::Outline(ENVELOPE)),
];

fn lookup(table: &[(&str, Glyph)], key: &str) -> Option<Glyph> {
    table.iter().find(|(k, _)| *k == key).map(|(_, glyph)| *glyph)
}

pub fn skill_glyph(icon: &str) -> Option<Glyph> {
    lookup(SKILL_GLYPHS, icon)
}

pub fn social_glyph(name: &str) -> Option<Glyph> {
    lookup(SOCIAL_GLYPHS, name)
}

fn render_glyph(glyph: Glyph, class: Classes, label: Option<AttrValue>) -> Html {
    let hidden = label.is_none().then(|| "true");
    match glyph {
        Glyph::Badge(text) => html! {
            <svg class={classes!("icon", class)} viewBox="0 0 24 24" role="img" aria-label={label} aria-hidden={hidden}>
                <rect x="2" y="2" width="20" height="20" rx="5" fill="none" stroke="currentColor" stroke-width="1.5" />
                <text
                    x="12"
                    y="12.5"
                    text-anchor="middle"
                    dominant-baseline="middle"
                    font-size="9"
                    font-weight="700"
                    fill="currentColor"
                >
                    { text }
                </text>
            </svg>
        },
        Glyph::Outline(paths) => html! {
            <svg
                class={classes!("icon", class)}
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                role="img"
                aria-label={label}
                aria-hidden={hidden}
            >
                { for paths.iter().map(|d| html! { <path d={*d} /> }) }
            </svg>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Unknown skill icons keep their slot as an empty box so the marquee
/// spacing does not shift.
#[function_component(SkillIcon)]
pub fn skill_icon(props: &IconProps) -> Html {
    match skill_glyph(&props.name) {
        Some(glyph) => render_glyph(glyph, props.class.clone(), None),
        None => html! { <div class={classes!("icon", props.class.clone())} /> },
    }
}

#[function_component(SocialIcon)]
pub fn social_icon(props: &IconProps) -> Html {
    match social_glyph(&props.name) {
        Some(glyph) => render_glyph(glyph, props.class.clone(), Some(props.name.clone())),
        None => html! {},
    }
}
