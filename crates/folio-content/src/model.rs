//! Entities deserialized from the content JSON documents.
//!
//! Every field is optional in the source JSON. Collections that gate whether
//! a section renders at all are `Option<Vec<_>>` so that "absent" and "empty"
//! stay distinguishable.

use serde::Deserialize;

/// Profile document: sidebar, about page and resume.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    pub sidebar: Option<Sidebar>,
    pub about: Option<About>,
    pub resume: Option<Resume>,
}

/// Sidebar profile card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sidebar {
    pub name: String,
    pub title: String,
    /// Avatar image URL.
    pub avatar: String,
    pub contacts: Option<Vec<Contact>>,
    pub social: Option<Vec<SocialLink>>,
}

/// Contact entry (email, phone, github, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Contact kind such as `email`, `github`, `linkedin`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Icon identifier (e.g., `mail-outline`).
    pub icon: String,
    /// Human label.
    pub title: String,
    /// Displayed value.
    pub value: String,
    /// Target URL (e.g., `mailto:` link).
    pub link: String,
}

/// Social network link.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub icon: Option<String>,
    pub link: String,
}

/// About page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct About {
    pub title: String,
    pub description: Option<Vec<String>>,
    pub services: Option<Vec<Service>>,
    pub testimonials: Option<Vec<Testimonial>>,
    pub clients: Option<Vec<Client>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    pub avatar: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Client {
    pub name: String,
    pub logo: String,
    pub link: String,
}

/// Resume page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    pub main_title: Option<String>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub skills_title: Option<String>,
    pub skills: Option<Vec<Skill>>,
    pub tools: Option<Vec<Tool>>,
}

/// Work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    /// Position, often in the form `Role at Company`.
    pub position: String,
    pub company: Option<String>,
    pub period: String,
    pub logo: Option<String>,
    /// Bullet lines; lines ending with a colon act as headings.
    pub description: Option<Vec<String>>,
    pub overview: Option<String>,
    pub my_role: Option<String>,
    pub skills_acquired: Option<String>,
    pub impact: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub period: String,
    pub description: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Fill percentage, 0-100.
    pub percentage: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub name: String,
    pub logo: String,
    pub link: String,
}

/// Media kind of a portfolio item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    /// Anything that is not a video renders as an image card.
    #[default]
    #[serde(other)]
    Image,
}

/// Portfolio grid item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: u64,
    pub title: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub image: Option<String>,
    pub video: Option<String>,
    pub alt: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub screenshots: Option<Vec<String>>,
    pub google_play_link: Option<String>,
    pub app_store_link: Option<String>,
    pub custom_link: Option<String>,
}

impl PortfolioItem {
    /// Media shown in the detail slider: the screenshots, or the video
    /// itself for a video item without screenshots.
    #[must_use]
    pub fn media(&self) -> Vec<String> {
        let screenshots = self.screenshots.clone().unwrap_or_default();
        match (&self.video, self.kind) {
            (Some(video), MediaKind::Video) if screenshots.is_empty() => vec![video.clone()],
            _ => screenshots,
        }
    }
}

/// Blog index entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    /// Publication date, `YYYY-MM-DD` or RFC 3339.
    pub date: String,
    pub category: String,
    /// Path of the markdown body, relative to the content base.
    pub markdown: String,
    pub image: String,
    pub alt: Option<String>,
    pub description: Option<String>,
}
