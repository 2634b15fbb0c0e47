// everything on the page that never changes at runtime
//
// the slices below render in declaration order, so reordering an entry here
// reorders the page

pub const SITE_NAME: &str = "Asha Rao";

// the brand renders as two spans so the accent color can split the name
pub const BRAND_NAME: &str = "Asha";
pub const BRAND_SUFFIX: &str = ".Rao";

pub const ROLE_BADGE: &str = "Rust & Web Engineer";

pub const TAGLINE: &str = "I build modern web apps end to end, from interactive \
    Rust and WebAssembly frontends to sturdy, well-tested APIs.";

pub const HERO_STACK_LINE: &str = "Rust, Dioxus, Axum, WASM";
pub const HERO_AVAILABILITY: &str = "Open to freelance and full-time roles";

pub const CONTACT_EMAIL: &str = "asha@asharao.dev";
pub const GITHUB_URL: &str = "https://github.com/asharao";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/asharao";

// served alongside the bundle as a plain static asset
pub const RESUME_PATH: &str = "/assets/resume.pdf";

pub const CONTACT_BLURB: &str =
    "Prefer a quick chat? Reach out and I'll get back within 24 hours.";

pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        anchor: "#home",
    },
    NavItem {
        label: "About",
        anchor: "#about",
    },
    NavItem {
        label: "Skills",
        anchor: "#skills",
    },
    NavItem {
        label: "Projects",
        anchor: "#projects",
    },
    NavItem {
        label: "Contact",
        anchor: "#contact",
    },
];

pub struct AboutCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        title: "Background",
        body: "I came to web work from systems programming, and it shows: I care \
            about the pieces under the pixels. Most of my day is Rust, whether it \
            compiles to a server binary or to WebAssembly running in your browser.",
    },
    AboutCard {
        title: "What I value",
        body: "Clean architecture, accessible UX, and software that stays fast \
            under load. I like small well-typed interfaces, honest error messages, \
            and the occasional playful touch of motion and 3D.",
    },
];

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        skills: &["Dioxus", "WebAssembly", "TypeScript", "Tailwind"],
    },
    SkillGroup {
        title: "Backend",
        skills: &["Rust", "Axum", "PostgreSQL", "Redis"],
    },
    SkillGroup {
        title: "Tools",
        skills: &["Git", "Docker", "Nix", "Grafana"],
    },
    SkillGroup {
        title: "Practices",
        skills: &["REST APIs", "Auth", "Testing", "CI/CD"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Interactive Portfolio",
        description: "This site: a single-page portfolio with a 3D hero scene, \
            scroll-aware chrome, and a persisted theme.",
        stack: &["Dioxus", "Spline", "WASM"],
        link: "#home",
    },
    Project {
        title: "Task Manager API",
        description: "JWT-authenticated task service with filtering, pagination, \
            and a full integration test suite.",
        stack: &["Axum", "PostgreSQL", "Tokio"],
        link: "https://github.com/asharao/taskboard",
    },
    Project {
        title: "Storefront UI",
        description: "Accessible e-commerce front end with product cards, a cart, \
            and a checkout flow.",
        stack: &["Dioxus", "Stripe", "Tailwind"],
        link: "https://github.com/asharao/storefront",
    },
    Project {
        title: "Relay Chat",
        description: "Websocket chat with presence, typing indicators, and \
            message reactions.",
        stack: &["Axum", "WebSockets", "Redis"],
        link: "https://github.com/asharao/relay-chat",
    },
];

// hero scene, baked in at build time so the bundle stays self-contained
pub fn hero_scene_url() -> &'static str {
    option_env!("FOLIO_SCENE_URL").unwrap_or("https://my.spline.design/VJLoxp84lCdVfdZu/")
}

// optional second scene; an empty value leaves the panel out entirely
pub fn aux_scene_url() -> &'static str {
    option_env!("FOLIO_AUX_SCENE_URL").unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn nav_covers_every_section_once() {
        let anchors: Vec<&str> = NAV_ITEMS.iter().map(|item| item.anchor).collect();
        let unique: HashSet<&str> = anchors.iter().copied().collect();

        assert_eq!(anchors.len(), unique.len());
        assert_eq!(anchors.first(), Some(&"#home"));
        assert_eq!(anchors.last(), Some(&"#contact"));
    }

    #[test]
    fn nav_entries_are_fragment_links() {
        for item in NAV_ITEMS {
            assert!(
                item.anchor.starts_with('#'),
                "{} is not a fragment link",
                item.anchor
            );
            assert!(!item.label.is_empty());
        }
    }

    #[test]
    fn every_skill_group_is_populated() {
        assert!(!SKILL_GROUPS.is_empty());

        let titles: HashSet<&str> = SKILL_GROUPS.iter().map(|group| group.title).collect();
        assert_eq!(titles.len(), SKILL_GROUPS.len());

        for group in SKILL_GROUPS {
            assert!(!group.skills.is_empty(), "{} has no entries", group.title);
        }
    }

    #[test]
    fn every_project_is_complete() {
        assert!(!PROJECTS.is_empty());

        let titles: HashSet<&str> = PROJECTS.iter().map(|project| project.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());

        for project in PROJECTS {
            assert!(!project.description.is_empty());
            assert!(!project.stack.is_empty());
            assert!(!project.link.is_empty());
        }
    }

    #[test]
    fn profile_links_are_well_formed() {
        assert!(CONTACT_EMAIL.contains('@'));
        assert!(GITHUB_URL.starts_with("https://"));
        assert!(LINKEDIN_URL.starts_with("https://"));
        assert!(RESUME_PATH.starts_with('/'));
    }

    #[test]
    fn hero_scene_defaults_on_and_aux_defaults_off() {
        assert!(!hero_scene_url().is_empty());
        assert!(aux_scene_url().is_empty());
    }
}
