// frontend_portfolio/src/profile.rs
//! Everything about the site owner that the pages render.
use serde::Serialize;

use crate::components::social_icons::{github_icon, linkedin_icon, mail_icon, IconFn};

pub struct Author {
    pub name: &'static str,
    pub job_title: &'static str,
    pub email: &'static str,
}

pub const AUTHOR: Author = Author {
    name: "Jose Hidalgo",
    job_title: "Software Engineer",
    email: "joseangel1196@hotmail.com",
};

/// An outbound link shown in the contact list.
pub struct SocialProfile {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconFn,
    /// Spacing and separators for this entry of the list.
    pub class: &'static str,
}

pub const SOCIAL_LINKS: [SocialProfile; 3] = [
    SocialProfile {
        label: "Follow on GitHub",
        href: "https://github.com/JoseAngel1196",
        icon: github_icon,
        class: "mt-4",
    },
    SocialProfile {
        label: "Follow on LinkedIn",
        href: "https://www.linkedin.com/in/jose-hidalgo-rosa",
        icon: linkedin_icon,
        class: "mt-4",
    },
    SocialProfile {
        label: AUTHOR.email,
        href: "mailto:joseangel1196@hotmail.com",
        icon: mail_icon,
        class: "mt-8 border-t border-zinc-100 pt-8 dark:border-zinc-700/40",
    },
];

pub struct Portrait {
    pub src: &'static str,
    pub alt: &'static str,
    pub sizes: &'static str,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

pub const PORTRAIT: Portrait = Portrait {
    src: "static/img/portrait.png",
    alt: "",
    sizes: "(min-width: 1024px) 32rem, 20rem",
    width: None,
    height: None,
};

/// schema.org `Person`, embedded in the page as JSON-LD.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub job_title: &'static str,
    pub email: String,
    pub same_as: Vec<&'static str>,
}

impl Person {
    pub fn from_profile() -> Self {
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: AUTHOR.name,
            job_title: AUTHOR.job_title,
            email: format!("mailto:{}", AUTHOR.email),
            same_as: SOCIAL_LINKS
                .iter()
                .map(|link| link.href)
                .filter(|href| href.starts_with("https://"))
                .collect(),
        }
    }

    pub fn to_json_ld(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn mail_entry_points_at_author_email() {
        let mail = &SOCIAL_LINKS[2];
        assert_eq!(mail.label, AUTHOR.email);
        assert_eq!(mail.href, format!("mailto:{}", AUTHOR.email));
    }

    #[test]
    fn json_ld_lists_web_profiles_only() {
        let json: Value = serde_json::from_str(&Person::from_profile().to_json_ld().unwrap()).unwrap();

        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "Person");
        assert_eq!(json["name"], "Jose Hidalgo");
        assert_eq!(json["jobTitle"], "Software Engineer");
        assert_eq!(json["email"], "mailto:joseangel1196@hotmail.com");
        assert_eq!(
            json["sameAs"],
            json!([
                "https://github.com/JoseAngel1196",
                "https://www.linkedin.com/in/jose-hidalgo-rosa"
            ])
        );
    }
}
