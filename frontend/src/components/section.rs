use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, TouchEvent};
use yew::prelude::*;

use crate::components::icons::{SkillIcon, SocialIcon};
use crate::config;
use crate::i18n::use_language;
use crate::sections::{Project, SectionDescriptor, Skill, SocialLink};

static CONTACT_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(fala comigo!?|fale comigo!?|talk to me!?)").expect("valid contact phrase pattern"));

/// Horizontal travel a touch must cover to count as a swipe.
const SWIPE_THRESHOLD: f64 = 60.0;

/// Splits `content` around the call-to-action phrase, if present.
pub fn split_contact_phrase(content: &str) -> Option<(&str, &str, &str)> {
    let found = CONTACT_PHRASE.find(content)?;
    Some((
        &content[..found.start()],
        found.as_str(),
        &content[found.end()..],
    ))
}

/// +1 for a swipe to the left (next card), -1 to the right, 0 for a tap.
pub fn swipe_direction(delta_x: f64) -> i32 {
    if delta_x < -SWIPE_THRESHOLD {
        1
    } else if delta_x > SWIPE_THRESHOLD {
        -1
    } else {
        0
    }
}

pub fn wrap_index(index: usize, step: i32, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let total = total as i64;
    ((index as i64 + step as i64).rem_euclid(total)) as usize
}

fn scroll_to_section(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn open_in_new_tab(link: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(link, "_blank");
    }
}

fn render_title(title: &str) -> Html {
    let count = title.chars().count();
    html! {
        <h2 class="section-title">
            { for title.chars().enumerate().map(|(i, c)| {
                let style = format!("--char-index: {}", i);
                if c == '.' && i + 1 == count {
                    html! { <span class="title-char blink" style={style}>{ c }</span> }
                } else {
                    html! { <span class="title-char" style={style}>{ c }</span> }
                }
            }) }
        </h2>
    }
}

fn render_content(id: &str, content: &str) -> Html {
    if content.is_empty() {
        return html! {};
    }
    let body = match (id, split_contact_phrase(content)) {
        ("contact", Some((before, phrase, after))) => html! {
            <>
                { before }
                <span class="highlight">{ phrase }</span>
                { after }
            </>
        },
        _ => html! { <>{ content }</> },
    };
    html! { <p class="section-content">{ body }</p> }
}

fn render_photo() -> Html {
    html! {
        <div class="profile-photo">
            <img
                src={config::PROFILE_PHOTO}
                alt="João Marcelo Venancio Ribeiro - Desenvolvedor Full Stack especializado em automações, sites e soluções audiovisuais"
                width="500"
                height="500"
                draggable="false"
            />
        </div>
    }
}

fn render_skills(skills: &[Skill]) -> Html {
    if skills.is_empty() {
        return html! {};
    }
    // rendered twice so the CSS marquee can loop seamlessly
    let card = |skill: &Skill| html! {
        <div class="skill-card">
            <SkillIcon name={skill.icon} class="skill-icon" />
            <span class="skill-name">{ &skill.name }</span>
        </div>
    };
    html! {
        <div class="skills-marquee">
            <div class="marquee-track">
                { for skills.iter().map(card) }
                { for skills.iter().map(card) }
            </div>
        </div>
    }
}

fn project_card(project: &Project, class: &'static str) -> Html {
    let onclick = {
        let link = project.link;
        Callback::from(move |_: MouseEvent| open_in_new_tab(link))
    };
    html! {
        <div class={classes!("project-card", class)} onclick={onclick}>
            <h3>{ &project.title }</h3>
            <p>{ &project.description }</p>
            <div class="project-tech">
                { for project.tech.iter().map(|tech| html! { <span class="tech-tag">{ *tech }</span> }) }
            </div>
        </div>
    }
}

fn render_social_links(links: &[SocialLink]) -> Html {
    html! {
        <div class="social-links">
            { for links.iter().map(|link| html! {
                <a class="social-link" href={link.url} target="_blank" rel="noopener noreferrer" title={link.name}>
                    <SocialIcon name={link.icon} class="social-icon" />
                </a>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCarouselProps {
    pub projects: Rc<Vec<Project>>,
}

/// Mobile carousel: one card at a time, swipe or use the arrows.
#[function_component(ProjectCarousel)]
pub fn project_carousel(props: &ProjectCarouselProps) -> Html {
    let language = use_language();
    let index = use_state(|| 0usize);
    let direction = use_state(|| 1i32);
    let touch_start = use_mut_ref(|| None::<f64>);
    let total = props.projects.len();

    let step = {
        let index = index.clone();
        let direction = direction.clone();
        Callback::from(move |step: i32| {
            if step == 0 {
                return;
            }
            direction.set(step);
            index.set(wrap_index(*index, step, total));
        })
    };

    let ontouchstart = {
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            *touch_start.borrow_mut() = e.touches().get(0).map(|t| t.client_x() as f64);
        })
    };

    let ontouchend = {
        let touch_start = touch_start.clone();
        let step = step.clone();
        Callback::from(move |e: TouchEvent| {
            let start = touch_start.borrow_mut().take();
            let end = e.changed_touches().get(0).map(|t| t.client_x() as f64);
            if let (Some(start), Some(end)) = (start, end) {
                step.emit(swipe_direction(end - start));
            }
        })
    };

    let Some(project) = props.projects.get(*index % total.max(1)) else {
        return html! {};
    };

    let prev = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(-1))
    };
    let next = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(1))
    };

    let enter = if *direction > 0 { "enter-from-right" } else { "enter-from-left" };

    html! {
        <div class="project-carousel">
            <div key={project.title.clone()} class="carousel-stage" {ontouchstart} {ontouchend}>
                { project_card(project, enter) }
            </div>
            <div class="carousel-controls">
                <button class="carousel-arrow" onclick={prev} aria-label="Previous project">{"‹"}</button>
                <div class="carousel-dots">
                    { for (0..total).map(|i| html! {
                        <span class={classes!("carousel-dot", (i == *index).then(|| "current"))} />
                    }) }
                </div>
                <button class="carousel-arrow" onclick={next} aria-label="Next project">{"›"}</button>
            </div>
            <p class="swipe-hint">{ language.t("projects.swipe") }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub section: SectionDescriptor,
    pub active: bool,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let language = use_language();
    let section = &props.section;
    let projects = use_memo(|projects| projects.clone().unwrap_or_default(), section.projects.clone());

    let buttons = if section.show_button || section.show_contact_button {
        let contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
        let to_projects = Callback::from(|_: MouseEvent| scroll_to_section("projects"));
        html! {
            <div class="section-actions">
                if section.show_contact_button {
                    <button class="button-primary" onclick={contact}>
                        <span>{ language.t("about.contact") }</span>
                    </button>
                }
                if section.show_button {
                    <button class="button-outline" onclick={to_projects}>
                        <span>{ section.button_text.clone().unwrap_or_default() }</span>
                    </button>
                }
            </div>
        }
    } else {
        html! {}
    };

    let text = html! {
        <div class="section-text">
            { render_title(&section.title) }
            { render_content(section.id, &section.content) }
            { buttons }
        </div>
    };

    html! {
        <section
            id={section.id}
            class={classes!("section", if props.active { "is-active" } else { "is-inactive" })}
        >
            if section.show_photo {
                <div class="section-hero">
                    { render_photo() }
                    { text }
                </div>
            } else {
                { text }
            }
            if let Some(skills) = &section.skills {
                { render_skills(skills) }
            }
            if let Some(list) = &section.projects {
                <div class="projects">
                    <div class="projects-grid">
                        { for list.iter().map(|p| project_card(p, "grid-card")) }
                    </div>
                    <ProjectCarousel projects={projects.clone()} />
                </div>
            }
            if let Some(links) = &section.social_links {
                { render_social_links(links) }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_contact_phrase_in_both_languages() {
        assert_eq!(
            split_contact_phrase("Quer tirar uma ideia do papel? Fale comigo!"),
            Some(("Quer tirar uma ideia do papel? ", "Fale comigo!", ""))
        );
        assert_eq!(
            split_contact_phrase("Want to get an idea off the ground? Talk to me! Now."),
            Some(("Want to get an idea off the ground? ", "Talk to me!", " Now."))
        );
        assert_eq!(split_contact_phrase("fala comigo"), Some(("", "fala comigo", "")));
        assert_eq!(split_contact_phrase("Nothing to see here"), None);
    }

    #[test]
    fn swipes_need_to_cross_the_threshold() {
        assert_eq!(swipe_direction(-61.0), 1);
        assert_eq!(swipe_direction(61.0), -1);
        assert_eq!(swipe_direction(60.0), 0);
        assert_eq!(swipe_direction(-10.0), 0);
    }

    #[test]
    fn carousel_index_wraps_both_ways() {
        assert_eq!(wrap_index(2, 1, 3), 0);
        assert_eq!(wrap_index(0, -1, 3), 2);
        assert_eq!(wrap_index(1, 1, 3), 2);
        assert_eq!(wrap_index(0, 1, 0), 0);
    }
}
