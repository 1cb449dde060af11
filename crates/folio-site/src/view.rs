//! Pure projection of the content store into view models.
//!
//! Nothing here touches markup. [`crate::html`] turns these structs into
//! fragments, and the CLI serializes them as JSON.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use folio_content::{
    BlogPost, CategoryFilter, ContentStore, Experience, MediaKind, PortfolioItem, Sidebar,
};
use regex::Regex;
use serde::Serialize;

use crate::pager::DiscretePager;
use crate::widgets::Theme;

/// Location shown under the sidebar title.
pub const LOCATION: &str = "Pakistan";

static COMPANY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)at\s+(.+)$").unwrap());
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•\-\*]\s*").unwrap());
static SUBHEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][^•\-*]*:$").unwrap());

/// Inputs that do not come from the content store.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    pub theme: Theme,
    pub filter: CategoryFilter,
    pub testimonial: usize,
    pub active_nav: Option<&'static str>,
    pub sidebar_visible: bool,
}

/// Every main section of the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteView {
    pub theme: Theme,
    pub active_nav: Option<&'static str>,
    pub sidebar_visible: bool,
    pub sidebar: Option<SidebarView>,
    pub about: Option<AboutView>,
    pub clients: Option<Vec<ClientView>>,
    pub portfolio: PortfolioView,
    pub resume: Option<ResumeView>,
    pub blogs: Vec<BlogCard>,
    pub testimonial: Option<TestimonialView>,
    pub contact: Option<ContactView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub avatar: String,
    pub avatar_alt: String,
    pub name: String,
    pub title: String,
    pub location: &'static str,
    pub social: Vec<SocialIcon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialIcon {
    pub link: String,
    pub platform: String,
    pub icon_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutView {
    pub title: String,
    pub stats: Statistics,
    pub services: Option<Vec<ServiceCard>>,
}

/// Fixed headline figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub years: &'static str,
    pub projects: &'static str,
    pub clients: &'static str,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            years: "+8",
            projects: "+100",
            clients: "+10",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientView {
    pub name: String,
    pub logo: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioView {
    pub filter: &'static str,
    pub items: Vec<PortfolioCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioCard {
    pub id: u64,
    pub title: String,
    pub category: String,
    /// Filter bucket, rendered as `data-category`.
    pub bucket: &'static str,
    pub media: CardMedia,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CardMedia {
    Video { src: String },
    Image { src: String, alt: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeView {
    pub main_title: Option<String>,
    pub experience: Option<Vec<ExperienceCard>>,
    pub education: Option<Vec<EducationCard>>,
    pub skills_title: Option<String>,
    pub skills: Option<Vec<SkillView>>,
    pub tools: Option<Vec<ToolView>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceCard {
    pub index: usize,
    pub company: String,
    pub logo: Option<String>,
    pub summary: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationCard {
    pub degree: String,
    pub period: String,
    pub description: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillView {
    pub name: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolView {
    pub name: String,
    pub logo: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogCard {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub category: String,
    pub image: String,
    pub alt: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestimonialView {
    pub index: usize,
    pub name: String,
    pub text: String,
    pub avatar: String,
    pub alt: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub info: Vec<ContactInfo>,
    /// Target of the "e-mail me" button.
    pub email_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub icon_path: String,
    pub icon: String,
    pub title: String,
    pub value: String,
    pub link: String,
}

/// Project detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectView {
    pub id: u64,
    pub title: String,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub screenshots: Vec<ScreenshotView>,
    /// A single screenshot is centered.
    pub centered: bool,
    pub show_nav: bool,
    /// One entry per valid start index, `true` for the current one.
    pub dots: Vec<bool>,
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenshotView {
    pub src: String,
    pub is_video: bool,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectLinks {
    pub google_play: Option<String>,
    pub app_store: Option<String>,
    pub custom: Option<String>,
}

impl ProjectLinks {
    #[must_use]
    pub fn any(&self) -> bool {
        self.google_play.is_some() || self.app_store.is_some() || self.custom.is_some()
    }
}

/// Experience detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceView {
    pub index: usize,
    pub company: String,
    pub period: String,
    pub logo: Option<String>,
    pub overview: Option<String>,
    pub role: Option<String>,
    pub skills: Option<String>,
    pub impact: Option<String>,
    pub link: Option<String>,
    /// Used only when there is no overview.
    pub description: Option<Vec<DescriptionBlock>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum DescriptionBlock {
    Heading(String),
    Paragraph(String),
}

/// Blog post page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPostView {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub alt: String,
    pub date: String,
    pub body: PostBody,
    pub related: Vec<RelatedPost>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PostBody {
    /// Rendered markdown.
    Html(String),
    /// Message from a failed body fetch.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedPost {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub alt: String,
    pub date: String,
}

/// Format a date as `Jan 5, 2024`. Unparseable input is returned as is.
#[must_use]
pub fn format_date(date: &str) -> String {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|d| d.date_naive()));
    match parsed {
        Some(day) => day.format("%b %-d, %Y").to_string(),
        None => date.to_owned(),
    }
}

/// Company of an experience entry: the explicit field, else the text after
/// `at` in the position, else the whole position.
#[must_use]
pub fn company_name(experience: &Experience) -> String {
    if let Some(company) = experience.company.as_deref().filter(|c| !c.is_empty()) {
        return company.to_owned();
    }
    COMPANY_SUFFIX
        .captures(&experience.position)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| experience.position.clone(), |m| m.as_str().to_owned())
}

fn strip_bullet(line: &str) -> String {
    BULLET.replace(line, "").trim().to_owned()
}

fn non_blank(lines: &[String]) -> impl Iterator<Item = &String> {
    lines.iter().filter(|line| !line.trim().is_empty())
}

/// Description lines joined into one paragraph without bullets.
#[must_use]
pub fn summary_description(lines: &[String]) -> String {
    non_blank(lines)
        .map(|line| strip_bullet(line))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Description lines as blocks: `Heading:` lines become headings with the
/// first colon removed, the rest become paragraphs.
#[must_use]
pub fn description_blocks(lines: &[String]) -> Vec<DescriptionBlock> {
    non_blank(lines)
        .map(|line| {
            if SUBHEADING.is_match(line) {
                DescriptionBlock::Heading(line.replacen(':', "", 1))
            } else {
                DescriptionBlock::Paragraph(strip_bullet(line))
            }
        })
        .collect()
}

/// Material Symbols icon for a service title.
#[must_use]
pub fn service_icon(title: &str) -> &'static str {
    match title {
        "Game Development" => "sports_esports",
        "AR/VR Development" => "view_in_ar",
        "Mobile Development" => "phone_android",
        "Technical Leadership" => "groups",
        _ => "code",
    }
}

/// Font Awesome class for a social platform, falling back to e-mail.
#[must_use]
pub fn social_icon_class(platform: &str) -> &'static str {
    match platform {
        "github" => "fab fa-github",
        "linkedin" => "fab fa-linkedin-in",
        "instagram" => "fab fa-instagram",
        "facebook" => "fab fa-facebook-f",
        "twitter" => "fab fa-twitter",
        "google-plus" => "fab fa-google-plus-g",
        _ => "fas fa-envelope",
    }
}

/// Image path for a contact icon.
#[must_use]
pub fn contact_icon_path(icon: &str, kind: &str) -> String {
    match icon {
        "mail-outline" => "./assets/images/email-icon.svg".to_owned(),
        "logo-github" => "./assets/images/github-icon.svg".to_owned(),
        "logo-linkedin" => "./assets/images/linkedin-icon.svg".to_owned(),
        _ => format!("./assets/images/{kind}-icon.svg"),
    }
}

/// Whether a media path names a video file.
#[must_use]
pub fn is_video_path(path: &str) -> bool {
    [".mp4", ".webm", ".mov"].iter().any(|ext| path.contains(ext))
}

/// Logo shown on a project page. A video logo is replaced by the item
/// image, or hidden when there is none.
#[must_use]
pub fn project_logo(item: &PortfolioItem) -> Option<String> {
    match item.logo.as_deref().filter(|l| !l.is_empty()) {
        Some(logo) if !is_video_path(logo) => Some(logo.to_owned()),
        _ => item.image.clone().filter(|i| !i.is_empty()),
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

fn sidebar_view(sidebar: &Sidebar) -> SidebarView {
    let mut social: Vec<SocialIcon> = sidebar
        .contacts
        .iter()
        .flatten()
        .filter(|c| matches!(c.kind.as_str(), "email" | "github" | "linkedin"))
        .map(|c| {
            let platform = c.kind.to_lowercase();
            SocialIcon {
                link: c.link.clone(),
                icon_class: social_icon_class(&platform),
                platform,
            }
        })
        .collect();
    social.extend(sidebar.social.iter().flatten().map(|s| {
        let platform = s
            .platform
            .as_deref()
            .or(s.kind.as_deref())
            .filter(|p| !p.is_empty())
            .unwrap_or("email")
            .to_lowercase();
        SocialIcon {
            link: s.link.clone(),
            icon_class: social_icon_class(&platform),
            platform,
        }
    }));

    SidebarView {
        avatar: sidebar.avatar.clone(),
        avatar_alt: format!("Profile of {}", sidebar.name),
        name: sidebar.name.clone(),
        title: sidebar.title.clone(),
        location: LOCATION,
        social,
    }
}

fn portfolio_card(item: &PortfolioItem) -> PortfolioCard {
    let media = match item.kind {
        MediaKind::Video => CardMedia::Video {
            src: item.video.clone().unwrap_or_default(),
        },
        MediaKind::Image => CardMedia::Image {
            src: item.image.clone().unwrap_or_default(),
            alt: non_empty(item.alt.as_ref()).unwrap_or_else(|| item.title.clone()),
        },
    };
    PortfolioCard {
        id: item.id,
        title: item.title.clone(),
        category: item.category.clone(),
        bucket: CategoryFilter::for_item(&item.category, item.kind).as_str(),
        media,
    }
}

fn blog_alt(post: &BlogPost) -> String {
    non_empty(post.alt.as_ref()).unwrap_or_else(|| post.title.clone())
}

fn blog_card(post: &BlogPost) -> BlogCard {
    BlogCard {
        id: post.id,
        title: post.title.clone(),
        date: format_date(&post.date),
        category: post.category.clone(),
        image: post.image.clone(),
        alt: blog_alt(post),
        description: post.description.clone().unwrap_or_default(),
    }
}

impl SiteView {
    /// Project every main section.
    #[must_use]
    pub fn build(store: &ContentStore, ctx: &ViewContext) -> Self {
        let content = store.content();
        let about = content.about.as_ref();

        Self {
            theme: ctx.theme,
            active_nav: ctx.active_nav,
            sidebar_visible: ctx.sidebar_visible,
            sidebar: content.sidebar.as_ref().map(sidebar_view),
            about: about.map(|about| AboutView {
                title: about.title.clone(),
                stats: Statistics::default(),
                services: about.services.as_ref().map(|services| {
                    services
                        .iter()
                        .map(|s| ServiceCard {
                            icon: service_icon(&s.title),
                            title: s.title.clone(),
                            description: s.description.clone(),
                        })
                        .collect()
                }),
            }),
            clients: about.and_then(|a| a.clients.as_ref()).map(|clients| {
                clients
                    .iter()
                    .map(|c| ClientView {
                        name: c.name.clone(),
                        logo: c.logo.clone(),
                        link: c.link.clone(),
                    })
                    .collect()
            }),
            portfolio: PortfolioView {
                filter: ctx.filter.as_str(),
                items: store
                    .filtered_portfolio(ctx.filter)
                    .into_iter()
                    .map(portfolio_card)
                    .collect(),
            },
            resume: content.resume.as_ref().map(|resume| ResumeView {
                main_title: non_empty(resume.main_title.as_ref()),
                experience: resume.experience.as_ref().map(|list| {
                    list.iter()
                        .enumerate()
                        .map(|(index, exp)| ExperienceCard {
                            index,
                            company: company_name(exp),
                            logo: non_empty(exp.logo.as_ref()),
                            summary: summary_description(
                                exp.description.as_deref().unwrap_or_default(),
                            ),
                            period: exp.period.clone(),
                        })
                        .collect()
                }),
                education: resume.education.as_ref().map(|list| {
                    list.iter()
                        .map(|edu| EducationCard {
                            degree: edu.degree.clone(),
                            period: edu.period.clone(),
                            description: edu.description.clone(),
                            logo: non_empty(edu.logo.as_ref()),
                        })
                        .collect()
                }),
                skills_title: non_empty(resume.skills_title.as_ref()),
                skills: resume.skills.as_ref().map(|list| {
                    list.iter()
                        .map(|s| SkillView {
                            name: s.name.clone(),
                            percentage: s.percentage,
                        })
                        .collect()
                }),
                tools: resume.tools.as_ref().map(|list| {
                    list.iter()
                        .map(|t| ToolView {
                            name: t.name.clone(),
                            logo: t.logo.clone(),
                            link: t.link.clone(),
                        })
                        .collect()
                }),
            }),
            blogs: store.blogs().iter().map(blog_card).collect(),
            testimonial: testimonial_view(store, ctx.testimonial),
            contact: content
                .sidebar
                .as_ref()
                .and_then(|s| s.contacts.as_ref())
                .map(|contacts| ContactView {
                    info: contacts
                        .iter()
                        .map(|c| ContactInfo {
                            icon_path: contact_icon_path(&c.icon, &c.kind),
                            icon: c.icon.clone(),
                            title: c.title.clone(),
                            value: c.value.clone(),
                            link: c.link.clone(),
                        })
                        .collect(),
                    email_link: store.email_contact().map(|c| c.link.clone()),
                }),
        }
    }
}

/// Testimonial at `index`, if any.
#[must_use]
pub fn testimonial_view(store: &ContentStore, index: usize) -> Option<TestimonialView> {
    let testimonial = store
        .content()
        .about
        .as_ref()?
        .testimonials
        .as_ref()?
        .get(index)?;
    Some(TestimonialView {
        index,
        name: testimonial.name.clone(),
        text: testimonial.text.clone(),
        avatar: testimonial.avatar.clone(),
        alt: format!("Client {}", testimonial.name),
        role: testimonial.role.clone(),
    })
}

impl ProjectView {
    /// Project page for `item` with the screenshot pager's current position.
    #[must_use]
    pub fn new(item: &PortfolioItem, pager: &DiscretePager) -> Self {
        let media = item.media();
        let screenshots = media
            .iter()
            .enumerate()
            .map(|(i, src)| ScreenshotView {
                is_video: is_video_path(src) || item.kind == MediaKind::Video,
                alt: format!("Screenshot {}", i + 1),
                src: src.clone(),
            })
            .collect();

        Self {
            id: item.id,
            title: item.title.clone(),
            logo: project_logo(item),
            description: non_empty(item.description.as_ref()),
            centered: media.len() == 1,
            show_nav: pager.overflows(),
            dots: pager.dots(),
            screenshots,
            links: ProjectLinks {
                google_play: non_empty(item.google_play_link.as_ref()),
                app_store: non_empty(item.app_store_link.as_ref()),
                custom: non_empty(item.custom_link.as_ref()),
            },
        }
    }
}

impl ExperienceView {
    #[must_use]
    pub fn new(index: usize, experience: &Experience) -> Self {
        let overview = non_empty(experience.overview.as_ref());
        let description = match (&overview, &experience.description) {
            (None, Some(lines)) => Some(description_blocks(lines)),
            _ => None,
        };
        Self {
            index,
            company: company_name(experience),
            period: experience.period.clone(),
            logo: non_empty(experience.logo.as_ref()),
            overview,
            role: non_empty(experience.my_role.as_ref()),
            skills: non_empty(experience.skills_acquired.as_ref()),
            impact: non_empty(experience.impact.as_ref()),
            link: non_empty(experience.link.as_ref()),
            description,
        }
    }
}

impl BlogPostView {
    #[must_use]
    pub fn new(post: &BlogPost, body: PostBody, related: &[&BlogPost]) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            image: post.image.clone(),
            alt: blog_alt(post),
            date: format_date(&post.date),
            body,
            related: related
                .iter()
                .map(|r| RelatedPost {
                    id: r.id,
                    title: r.title.clone(),
                    image: r.image.clone(),
                    alt: blog_alt(r),
                    date: format_date(&r.date),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::{About, Client, Contact, ContentDocument, SocialLink, Testimonial};
    use pretty_assertions::assert_eq;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("2023-11-20T10:00:00Z"), "Nov 20, 2023");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_company_name() {
        let mut exp = Experience {
            position: "Lead Engineer at Acme Games".to_owned(),
            ..Experience::default()
        };
        assert_eq!(company_name(&exp), "Acme Games");
        exp.position = "Freelancer".to_owned();
        assert_eq!(company_name(&exp), "Freelancer");
        exp.company = Some("Studio".to_owned());
        assert_eq!(company_name(&exp), "Studio");
    }

    #[test]
    fn test_summary_description_strips_bullets() {
        let text = summary_description(&lines(&["• Built engines", "", "- Shipped games ", "* Led"]));
        assert_eq!(text, "Built engines Shipped games Led");
    }

    #[test]
    fn test_description_blocks() {
        let blocks = description_blocks(&lines(&["Highlights:", "• Shipped 12 titles", "  "]));
        assert_eq!(
            blocks,
            vec![
                DescriptionBlock::Heading("Highlights".to_owned()),
                DescriptionBlock::Paragraph("Shipped 12 titles".to_owned()),
            ]
        );
    }

    #[test]
    fn test_icon_maps() {
        assert_eq!(service_icon("AR/VR Development"), "view_in_ar");
        assert_eq!(service_icon("Cooking"), "code");
        assert_eq!(social_icon_class("linkedin"), "fab fa-linkedin-in");
        assert_eq!(social_icon_class("myspace"), "fas fa-envelope");
        assert_eq!(
            contact_icon_path("mail-outline", "email"),
            "./assets/images/email-icon.svg"
        );
        assert_eq!(
            contact_icon_path("call", "phone"),
            "./assets/images/phone-icon.svg"
        );
    }

    #[test]
    fn test_project_logo_rules() {
        let mut item = PortfolioItem {
            logo: Some("logo.png".to_owned()),
            image: Some("cover.png".to_owned()),
            ..PortfolioItem::default()
        };
        assert_eq!(project_logo(&item).as_deref(), Some("logo.png"));
        item.logo = Some("clip.mp4".to_owned());
        assert_eq!(project_logo(&item).as_deref(), Some("cover.png"));
        item.image = None;
        assert_eq!(project_logo(&item), None);
        item.logo = None;
        item.image = Some("cover.png".to_owned());
        assert_eq!(project_logo(&item).as_deref(), Some("cover.png"));
    }

    #[test]
    fn test_project_view_for_video_without_screenshots() {
        let item = PortfolioItem {
            id: 4,
            title: "Trailer".to_owned(),
            kind: MediaKind::Video,
            video: Some("trailer.webm".to_owned()),
            ..PortfolioItem::default()
        };
        let pager = DiscretePager::new(item.media().len(), 3);
        let view = ProjectView::new(&item, &pager);
        assert_eq!(view.screenshots.len(), 1);
        assert!(view.screenshots[0].is_video);
        assert!(view.centered);
        assert!(!view.show_nav);
        assert!(view.dots.is_empty());
        assert!(!view.links.any());
    }

    #[test]
    fn test_project_view_dots_and_alts() {
        let item = PortfolioItem {
            screenshots: Some(lines(&["a.png", "b.png", "c.png", "d.png", "e.png"])),
            google_play_link: Some("https://play.example".to_owned()),
            ..PortfolioItem::default()
        };
        let pager = DiscretePager::new(5, 3);
        let view = ProjectView::new(&item, &pager);
        assert_eq!(view.screenshots[1].alt, "Screenshot 2");
        assert!(!view.screenshots[1].is_video);
        assert!(view.show_nav);
        assert_eq!(view.dots, vec![true, false, false]);
        assert!(view.links.any());
    }

    #[test]
    fn test_experience_view_uses_description_without_overview() {
        let exp = Experience {
            position: "Dev at X".to_owned(),
            description: Some(lines(&["Work:", "- code"])),
            ..Experience::default()
        };
        assert_eq!(ExperienceView::new(0, &exp).description.unwrap().len(), 2);

        let exp = Experience {
            overview: Some("Overview".to_owned()),
            ..exp
        };
        assert!(ExperienceView::new(0, &exp).description.is_none());
    }

    #[test]
    fn test_build_site_view() {
        let content = ContentDocument {
            sidebar: Some(Sidebar {
                name: "Ada".to_owned(),
                contacts: Some(vec![
                    Contact {
                        kind: "email".to_owned(),
                        icon: "mail-outline".to_owned(),
                        link: "mailto:ada@example.com".to_owned(),
                        ..Contact::default()
                    },
                    Contact {
                        kind: "phone".to_owned(),
                        link: "tel:1".to_owned(),
                        ..Contact::default()
                    },
                ]),
                social: Some(vec![SocialLink {
                    platform: Some("Instagram".to_owned()),
                    link: "https://instagram.example".to_owned(),
                    ..SocialLink::default()
                }]),
                ..Sidebar::default()
            }),
            about: Some(About {
                title: "About".to_owned(),
                testimonials: Some(vec![Testimonial {
                    name: "Bo".to_owned(),
                    ..Testimonial::default()
                }]),
                clients: Some(vec![Client::default()]),
                ..About::default()
            }),
            resume: None,
        };
        let store = ContentStore::new(content, Vec::new(), Vec::new());
        let view = SiteView::build(&store, &ViewContext::default());

        let sidebar = view.sidebar.unwrap();
        assert_eq!(sidebar.avatar_alt, "Profile of Ada");
        let platforms: Vec<&str> = sidebar.social.iter().map(|s| s.platform.as_str()).collect();
        assert_eq!(platforms, vec!["email", "instagram"]);
        assert_eq!(sidebar.social[1].icon_class, "fab fa-instagram");

        assert_eq!(view.about.unwrap().services, None);
        assert_eq!(view.clients.unwrap().len(), 1);
        assert!(view.resume.is_none());
        assert_eq!(view.testimonial.unwrap().alt, "Client Bo");
        let contact = view.contact.unwrap();
        assert_eq!(contact.info.len(), 2);
        assert_eq!(contact.email_link.as_deref(), Some("mailto:ada@example.com"));
        assert_eq!(view.portfolio.filter, "all");
    }
}
