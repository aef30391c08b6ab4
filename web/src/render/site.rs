//! Static site configuration: skill icons and outbound links

/// A skill shown as an icon in the side bar
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub icon: &'static str,
}

/// An outbound profile link
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { icon: "typescript" },
    Skill { icon: "react" },
    Skill { icon: "nodejs" },
    Skill { icon: "rust" },
    Skill { icon: "docker" },
];

pub const LINKS: &[Link] = &[
    Link {
        name: "GitHub",
        url: "https://github.com/novicemin",
        icon: "github",
    },
    Link {
        name: "Notion",
        url: "https://notion.isamin.kr",
        icon: "notion",
    },
    Link {
        name: "Email",
        url: "mailto:me@isamin.kr",
        icon: "email",
    },
];

/// Path of an icon served from this site's static directory
pub fn icon_path(icon: &str) -> String {
    format!("/icon/{}.svg", icon)
}
