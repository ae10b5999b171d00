use crate::i18n::{translate, Language};

#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: String,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<&'static str>,
    pub link: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub title: String,
    pub content: String,
    pub show_button: bool,
    pub button_text: Option<String>,
    pub show_contact_button: bool,
    pub show_photo: bool,
    pub skills: Option<Vec<Skill>>,
    pub projects: Option<Vec<Project>>,
    pub social_links: Option<Vec<SocialLink>>,
}

/// (display name or translation key, icon key). Names starting with
/// `skills.` are translated.
const SKILLS: &[(&str, &str)] = &[
    ("JavaScript", "javascript"),
    ("TypeScript", "typescript"),
    ("React", "react"),
    ("Next.js", "nextjs"),
    ("Node.js", "nodejs"),
    ("Python", "python"),
    ("Bootstrap", "bootstrap"),
    ("Tailwind", "tailwind"),
    ("WordPress", "wordpress"),
    ("E-commerce", "ecommerce"),
    ("I.A", "ai"),
    ("Git", "git"),
    ("UI/UX", "design"),
    ("Design", "design2"),
    ("skills.video", "video"),
    ("skills.ads", "ads"),
];

const PROJECTS: &[(&str, &[&str], &str)] = &[
    ("landing", &["React", "Node.js", "TypeScript", "Tailwind"], "https://nathan-bay.vercel.app/"),
    ("cardapio", &["CSS", "JavaScript", "HTML", "Tailwind"], "https://projeto-cardapio-pearl.vercel.app/"),
    ("visual", &["Canva", "Photoshop", "ChatGPT"], "https://www.instagram.com/pradapayoficial/"),
];

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "WhatsApp", url: "https://wa.me/5518997747933", icon: "WhatsApp" },
    SocialLink { name: "Instagram", url: "https://www.instagram.com/uwjota/", icon: "Instagram" },
    SocialLink { name: "GitHub", url: "https://github.com/uwjota", icon: "GitHub" },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/joao-marcelo-venancio-ribeiro/",
        icon: "LinkedIn",
    },
    SocialLink { name: "Email", url: "mailto:uwjota@gmail.com", icon: "Email" },
];

/// Every section of the content page, with all text in `language`.
pub fn build_sections(language: Language) -> Vec<SectionDescriptor> {
    let t = |key: &str| translate(language, key);

    let skills = SKILLS
        .iter()
        .map(|&(name, icon)| Skill {
            name: if name.starts_with("skills.") { t(name) } else { name.to_string() },
            icon,
        })
        .collect();

    let projects = PROJECTS
        .iter()
        .map(|&(key, tech, link)| Project {
            title: t(&format!("projects.{}.title", key)),
            description: t(&format!("projects.{}.description", key)),
            tech: tech.to_vec(),
            link,
        })
        .collect();

    vec![
        SectionDescriptor {
            id: "about",
            title: t("about.title"),
            content: t("about.content"),
            show_button: true,
            button_text: Some(t("about.button")),
            show_contact_button: true,
            show_photo: true,
            ..Default::default()
        },
        SectionDescriptor {
            id: "skills",
            title: t("skills.title"),
            content: t("skills.content"),
            skills: Some(skills),
            ..Default::default()
        },
        SectionDescriptor {
            id: "projects",
            title: t("projects.title"),
            content: t("projects.content"),
            projects: Some(projects),
            ..Default::default()
        },
        SectionDescriptor {
            id: "contact",
            title: t("contact.title"),
            content: t("contact.content"),
            social_links: Some(SOCIAL_LINKS.to_vec()),
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_sections_in_page_order() {
        let ids: Vec<_> = build_sections(Language::Pt).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["about", "skills", "projects", "contact"]);
    }

    #[test]
    fn text_is_rederived_per_language() {
        let pt = build_sections(Language::Pt);
        let en = build_sections(Language::En);
        assert_eq!(pt[0].title, "Olá...");
        assert_eq!(en[0].title, "Hello...");
        assert_eq!(en[0].button_text.as_deref(), Some("View Projects"));

        let pt_skills = pt[1].skills.as_ref().unwrap();
        let en_skills = en[1].skills.as_ref().unwrap();
        assert_eq!(pt_skills.len(), 16);
        assert_eq!(pt_skills[14].name, "Edição");
        assert_eq!(en_skills[14].name, "Editing");
        assert_eq!(en_skills[0].name, "JavaScript");

        let en_projects = en[2].projects.as_ref().unwrap();
        assert_eq!(en_projects[1].title, "Digital Menu");
        assert_eq!(en_projects[1].tech, vec!["CSS", "JavaScript", "HTML", "Tailwind"]);
    }

    #[test]
    fn no_translation_keys_leak_into_content() {
        for language in [Language::Pt, Language::En] {
            for section in build_sections(language) {
                assert!(!section.title.contains('.') || section.title.ends_with("..."));
                assert!(!section.content.starts_with(section.id));
                for project in section.projects.unwrap_or_default() {
                    assert!(!project.title.starts_with("projects."));
                    assert!(!project.description.starts_with("projects."));
                }
            }
        }
    }

    #[test]
    fn only_contact_has_social_links() {
        let sections = build_sections(Language::En);
        let with_links: Vec<_> = sections.iter().filter(|s| s.social_links.is_some()).map(|s| s.id).collect();
        assert_eq!(with_links, vec!["contact"]);
        assert_eq!(sections[3].social_links.as_ref().map(Vec::len), Some(5));
    }
}
