//! HTML fragments and the surface they are applied to.
//!
//! A [`FragmentSet`] maps anchor ids to the inner HTML of those anchors.
//! [`apply`] writes a set to a [`Surface`], skipping anchors the surface
//! does not have and anchors whose HTML did not change since the previous
//! set.

use std::collections::BTreeMap;
use std::fmt::Write;

use folio_renderer::escape_html;
use serde::Serialize;
use tracing::debug;

use crate::view::{
    BlogPostView, CardMedia, DescriptionBlock, ExperienceView, PostBody, ProjectView, SiteView,
};

/// Anchor of the load error banner.
pub const ERROR_BANNER: &str = "error-banner";

/// Error writing a fragment.
#[derive(Debug, thiserror::Error)]
#[error("failed to update #{anchor}: {message}")]
pub struct SurfaceError {
    pub anchor: String,
    pub message: String,
}

/// UI layer that fragments are applied to.
pub trait Surface {
    /// Whether the anchor exists.
    fn has_anchor(&self, anchor: &str) -> bool;

    /// Replace the inner HTML of an anchor.
    fn replace(&mut self, anchor: &str, html: &str) -> Result<(), SurfaceError>;
}

/// Inner HTML per anchor id, ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FragmentSet(BTreeMap<String, String>);

impl FragmentSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, anchor: impl Into<String>, html: impl Into<String>) {
        self.0.insert(anchor.into(), html.into());
    }

    fn text(&mut self, anchor: &str, text: &str) {
        self.insert(anchor, escape_html(text));
    }

    #[must_use]
    pub fn get(&self, anchor: &str) -> Option<&str> {
        self.0.get(anchor).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add every fragment of `other`, replacing duplicates.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }
}

/// Anchors touched by [`apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub updated: Vec<String>,
    pub unchanged: Vec<String>,
    /// Anchors missing from the surface.
    pub skipped: Vec<String>,
}

/// Write `next` to `surface`.
///
/// # Errors
///
/// Returns the first [`SurfaceError`] raised by the surface.
pub fn apply(
    surface: &mut dyn Surface,
    next: &FragmentSet,
    previous: Option<&FragmentSet>,
) -> Result<ApplyReport, SurfaceError> {
    let mut report = ApplyReport::default();
    for (anchor, html) in next.iter() {
        if !surface.has_anchor(anchor) {
            debug!(anchor, "Anchor missing, skipping");
            report.skipped.push(anchor.to_owned());
        } else if previous.and_then(|p| p.get(anchor)) == Some(html) {
            report.unchanged.push(anchor.to_owned());
        } else {
            surface.replace(anchor, html)?;
            report.updated.push(anchor.to_owned());
        }
    }
    Ok(report)
}

/// In-memory surface with a fixed set of anchors.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    anchors: BTreeMap<String, String>,
    failures: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn with_anchors<I, S>(anchors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            anchors: anchors
                .into_iter()
                .map(|a| (a.into(), String::new()))
                .collect(),
            failures: 0,
        }
    }

    pub fn add_anchor(&mut self, anchor: impl Into<String>) {
        self.anchors.entry(anchor.into()).or_default();
    }

    /// Make the next `count` replacements fail.
    pub fn fail_next(&mut self, count: usize) {
        self.failures = count;
    }

    /// Current inner HTML of an anchor.
    #[must_use]
    pub fn content(&self, anchor: &str) -> Option<&str> {
        self.anchors.get(anchor).map(String::as_str)
    }
}

impl Surface for MemorySurface {
    fn has_anchor(&self, anchor: &str) -> bool {
        self.anchors.contains_key(anchor)
    }

    fn replace(&mut self, anchor: &str, html: &str) -> Result<(), SurfaceError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(SurfaceError {
                anchor: anchor.to_owned(),
                message: "surface not ready".to_owned(),
            });
        }
        match self.anchors.get_mut(anchor) {
            Some(slot) => {
                html.clone_into(slot);
                Ok(())
            }
            None => Err(SurfaceError {
                anchor: anchor.to_owned(),
                message: "no such anchor".to_owned(),
            }),
        }
    }
}

fn img(src: &str, alt: &str, class: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" class="{class}" />"#,
        escape_html(src),
        escape_html(alt)
    )
}

/// Fragments for every main section. Absent sections produce no fragment.
#[must_use]
pub fn site_fragments(view: &SiteView) -> FragmentSet {
    let mut set = FragmentSet::new();

    if let Some(sidebar) = &view.sidebar {
        set.insert("sidebar-avatar", img(&sidebar.avatar, &sidebar.avatar_alt, "avatar"));
        set.text("sidebar-name", &sidebar.name);
        set.text("sidebar-title", &sidebar.title);
        set.text("sidebar-location", sidebar.location);
        let mut html = String::from(r#"<ul class="social-icons-list">"#);
        for item in &sidebar.social {
            let _ = write!(
                html,
                r#"<li><a href="{link}" aria-label="{platform}" target="_blank" rel="noopener noreferrer" data-platform="{platform}"><i class="{class} icon"></i></a></li>"#,
                link = escape_html(&item.link),
                platform = escape_html(&item.platform),
                class = item.icon_class,
            );
        }
        html.push_str("</ul>");
        set.insert("sidebar-social", html);
    }

    if let Some(about) = &view.about {
        set.text("about-title", &about.title);
        set.text("stat-years", about.stats.years);
        set.text("stat-projects", about.stats.projects);
        set.text("stat-clients", about.stats.clients);
        if let Some(services) = &about.services {
            let mut html = String::new();
            for service in services {
                let _ = write!(
                    html,
                    r#"<div class="bg-card-light dark:bg-card-dark p-6 rounded-xl border border-gray-200 dark:border-gray-800 hover:border-primary/50 transition-all duration-300 card-hover"><div class="flex items-start gap-4"><div class="flex-shrink-0 w-14 h-14 flex items-center justify-center bg-primary/10 dark:bg-primary/20 rounded-lg"><span class="material-symbols-outlined text-primary text-3xl">{}</span></div><div class="flex-1"><h4 class="font-bold text-lg mb-2">{}</h4><p class="text-sm text-gray-600 dark:text-gray-400 leading-relaxed">{}</p></div></div></div>"#,
                    service.icon,
                    escape_html(&service.title),
                    escape_html(&service.description),
                );
            }
            set.insert("services-grid", html);
        }
    }

    if let Some(clients) = &view.clients {
        let mut html = String::new();
        for client in clients {
            let _ = write!(
                html,
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="flex items-center justify-center flex-shrink-0 opacity-60 grayscale hover:opacity-100 hover:grayscale-0 transition-all duration-300">{}</a>"#,
                escape_html(&client.link),
                img(&client.logo, &client.name, "h-20 max-w-[230px] object-contain rounded-xl"),
            );
        }
        set.insert("clients-section", html);
    }

    let mut html = String::new();
    for card in &view.portfolio.items {
        let media = match &card.media {
            CardMedia::Video { src } => format!(
                r#"<video class="w-full h-full object-cover transition duration-500 group-hover:scale-105 opacity-80 group-hover:opacity-100" muted loop><source src="{}" type="video/mp4"></video><div class="absolute inset-0 flex items-center justify-center bg-black/20 group-hover:bg-black/10 transition"><span class="material-symbols-outlined text-white text-4xl opacity-0 group-hover:opacity-100 transition">play_circle</span></div>"#,
                escape_html(src)
            ),
            CardMedia::Image { src, alt } => img(
                src,
                alt,
                "w-full h-full object-cover transition duration-500 group-hover:scale-105 opacity-80 group-hover:opacity-100",
            ),
        };
        let _ = write!(
            html,
            r#"<div class="portfolio-item group cursor-pointer card-hover bg-gray-900 dark:bg-gray-900 rounded-2xl overflow-hidden border border-gray-800 dark:border-gray-800 flex flex-col" data-category="{bucket}" data-project="{id}"><div class="bg-[#151515] rounded-t-2xl overflow-hidden relative aspect-[4/3]">{media}</div><div class="bg-gray-900 dark:bg-gray-900 p-4 flex flex-col justify-center"><h3 class="font-bold text-lg text-white dark:text-white mb-1">{title}</h3><p class="text-sm text-gray-400 dark:text-gray-400">{category}</p></div></div>"#,
            bucket = card.bucket,
            id = card.id,
            title = escape_html(&card.title),
            category = escape_html(&card.category),
        );
    }
    set.insert("portfolio-grid", html);

    if let Some(resume) = &view.resume {
        if let Some(title) = &resume.main_title {
            set.text("resume-main-title", title);
        }
        if let Some(experience) = &resume.experience {
            let mut html = String::new();
            for card in experience {
                let logo = card.logo.as_deref().map_or_else(String::new, |logo| {
                    img(
                        logo,
                        &format!("{} Logo", card.company),
                        "w-12 h-12 object-contain rounded-lg mr-4",
                    )
                });
                let _ = write!(
                    html,
                    r#"<div class="bg-card-light dark:bg-card-dark p-6 rounded-2xl border border-gray-200 dark:border-gray-800 relative cursor-pointer hover:shadow-lg transition card-hover group overflow-hidden" data-experience="{index}"><div class="flex justify-between items-start mb-4"><div class="flex items-center">{logo}<h4 class="text-2xl font-bold text-white dark:text-white">{company}</h4></div></div><p class="text-sm text-gray-300 dark:text-gray-300 mb-5 leading-relaxed">{summary}</p><div class="text-xs text-gray-400 dark:text-gray-400">{period}</div></div>"#,
                    index = card.index,
                    company = escape_html(&card.company),
                    summary = escape_html(&card.summary),
                    period = escape_html(&card.period),
                );
            }
            set.insert("experience-list", html);
        }
        if let Some(education) = &resume.education {
            let mut html = String::new();
            for card in education {
                let logo = card.logo.as_deref().map_or_else(String::new, |logo| {
                    img(logo, "Education Logo", "w-12 h-12 object-contain rounded-lg mr-4")
                });
                let _ = write!(
                    html,
                    r#"<div class="bg-card-light dark:bg-card-dark p-5 rounded-xl border border-gray-200 dark:border-gray-800 relative overflow-hidden group hover:shadow-lg transition"><div class="flex justify-between items-start mb-2"><div class="flex items-center">{logo}<h4 class="font-bold text-base">{degree}</h4></div><span class="text-xs text-gray-500 dark:text-gray-400 whitespace-nowrap ml-4">{period}</span></div><p class="text-sm text-gray-600 dark:text-gray-400">{description}</p></div>"#,
                    degree = escape_html(&card.degree),
                    period = escape_html(&card.period),
                    description = escape_html(&card.description),
                );
            }
            set.insert("education-list", html);
        }
        if let Some(title) = &resume.skills_title {
            set.text("skills-main-title", title);
        }
        if let Some(skills) = &resume.skills {
            let mut html = String::new();
            for skill in skills {
                let _ = write!(
                    html,
                    r#"<div class="bg-card-light dark:bg-card-dark p-4 rounded-xl border border-gray-200 dark:border-gray-800"><div class="flex justify-between items-center mb-2"><span class="font-medium text-sm">{name}</span><span class="skill-percentage text-xs text-gray-500 dark:text-gray-400">0%</span></div><div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2"><div class="skill-bar bg-primary h-2 rounded-full transition-all duration-1000 ease-out" style="width: 0%" data-percentage="{percentage}"></div></div></div>"#,
                    name = escape_html(&skill.name),
                    percentage = skill.percentage,
                );
            }
            set.insert("skills-list", html);
        }
        if let Some(tools) = &resume.tools {
            let mut html = String::new();
            for tool in tools {
                let _ = write!(
                    html,
                    r#"<a href="{link}" target="_blank" rel="noopener noreferrer" class="bg-card-light dark:bg-card-dark p-3 rounded-xl border border-gray-200 dark:border-gray-800 flex items-center gap-3 hover:border-primary transition group">{logo}<div><h4 class="font-bold text-sm leading-tight">{name}</h4></div></a>"#,
                    link = escape_html(&tool.link),
                    logo = img(&tool.logo, &tool.name, "w-10 h-10 object-contain flex-shrink-0"),
                    name = escape_html(&tool.name),
                );
            }
            set.insert("tools-grid", html);
        }
    }

    let mut html = String::new();
    for blog in &view.blogs {
        let _ = write!(
            html,
            r#"<article class="bg-card-light dark:bg-card-dark rounded-2xl p-4 border border-gray-200 dark:border-gray-800 cursor-pointer hover:shadow-lg transition card-hover" data-blog="{id}"><div class="rounded-xl overflow-hidden h-40 mb-4 relative">{image}<div class="absolute top-3 left-3 bg-black/50 backdrop-blur-sm text-white text-[10px] px-2 py-1 rounded">{date}</div><div class="absolute top-3 right-3 bg-primary/80 backdrop-blur-sm text-white text-[10px] px-2 py-1 rounded">{category}</div></div><h3 class="font-bold text-lg leading-snug mb-1">{title}</h3><p class="text-xs text-gray-500 dark:text-gray-400">{description}</p></article>"#,
            id = blog.id,
            image = img(&blog.image, &blog.alt, "w-full h-full object-cover"),
            date = escape_html(&blog.date),
            category = escape_html(&blog.category),
            title = escape_html(&blog.title),
            description = escape_html(&blog.description),
        );
    }
    set.insert("blog-grid", html);

    if let Some(testimonial) = &view.testimonial {
        set.text("testimonial-name", &testimonial.name);
        set.text("testimonial-text", &testimonial.text);
        set.insert(
            "testimonial-img",
            img(&testimonial.avatar, &testimonial.alt, "testimonial-avatar"),
        );
    }

    if let Some(contact) = &view.contact {
        let mut html = String::new();
        for info in &contact.info {
            let _ = write!(
                html,
                r#"<div class="flex items-center gap-3 p-3 bg-gray-50 dark:bg-gray-800/50 rounded-xl">{icon}<span class="material-symbols-outlined text-primary" style="display:none;">{symbol}</span><div><p class="text-xs text-gray-500 dark:text-gray-400">{title}</p><a href="{link}" class="text-sm font-medium hover:text-primary transition" target="_blank" rel="noopener noreferrer">{value}</a></div></div>"#,
                icon = img(&info.icon_path, &info.title, "w-5 h-5"),
                symbol = escape_html(&info.icon),
                title = escape_html(&info.title),
                link = escape_html(&info.link),
                value = escape_html(&info.value),
            );
        }
        set.insert("contact-info", html);
        if let Some(link) = &contact.email_link {
            set.insert(
                "contact-email-btn",
                format!(r#"<a href="{}">Email Me</a>"#, escape_html(link)),
            );
        }
    }

    set
}

/// Fragments of the project page. Absent parts clear their anchor.
#[must_use]
pub fn project_fragments(view: &ProjectView) -> FragmentSet {
    let mut set = FragmentSet::new();
    set.text("project-title", &view.title);
    set.insert(
        "project-logo",
        view.logo
            .as_deref()
            .map_or_else(String::new, |logo| img(logo, &view.title, "project-logo")),
    );
    set.text("project-description", view.description.as_deref().unwrap_or_default());

    let mut slides = String::new();
    for shot in &view.screenshots {
        let media = if shot.is_video {
            format!(
                r#"<video class="w-full h-auto object-cover rounded-lg" controls autoplay muted loop><source src="{}" type="video/mp4">Your browser does not support the video tag.</video>"#,
                escape_html(&shot.src)
            )
        } else {
            img(&shot.src, &shot.alt, "w-full h-auto object-cover rounded-lg")
        };
        let _ = write!(
            slides,
            r#"<div class="flex-shrink-0 rounded-lg overflow-hidden" style="width: calc(33.333333333333336% - 0.67rem); min-width: 0;">{media}</div>"#
        );
    }
    set.insert("project-screenshots-slider", slides);

    let mut dots = String::new();
    for (index, active) in view.dots.iter().enumerate() {
        let _ = write!(
            dots,
            r#"<button class="w-2 h-2 rounded-full transition {}" data-index="{index}"></button>"#,
            if *active { "bg-primary" } else { "bg-gray-600" },
        );
    }
    set.insert("project-screenshot-dots", dots);

    let mut links = String::new();
    for (id, label, href) in [
        ("project-google-play", "Google Play", &view.links.google_play),
        ("project-app-store", "App Store", &view.links.app_store),
        ("project-custom-link", "Visit", &view.links.custom),
    ] {
        if let Some(href) = href {
            let _ = write!(
                links,
                r#"<a id="{id}" href="{}" target="_blank" rel="noopener noreferrer">{label}</a>"#,
                escape_html(href)
            );
        }
    }
    set.insert("project-links-section", links);
    set
}

/// Fragments of the experience page. Absent parts clear their anchor.
#[must_use]
pub fn experience_fragments(view: &ExperienceView) -> FragmentSet {
    let mut set = FragmentSet::new();
    set.text("experience-company", &view.company);
    set.text("experience-period", &view.period);
    set.insert(
        "experience-logo",
        view.logo
            .as_deref()
            .map_or_else(String::new, |logo| img(logo, &view.company, "experience-logo")),
    );
    for (anchor, value) in [
        ("experience-overview", &view.overview),
        ("experience-role", &view.role),
        ("experience-skills", &view.skills),
        ("experience-impact", &view.impact),
    ] {
        set.text(anchor, value.as_deref().unwrap_or_default());
    }
    set.insert(
        "experience-link",
        view.link.as_deref().map_or_else(String::new, |link| {
            format!(
                r#"<a href="{0}" target="_blank" rel="noopener noreferrer">{0}</a>"#,
                escape_html(link)
            )
        }),
    );

    let mut description = String::new();
    for block in view.description.iter().flatten() {
        let _ = match block {
            DescriptionBlock::Heading(text) => write!(
                description,
                r#"<h3 class="text-xl font-bold mt-6 mb-3 text-white">{}</h3>"#,
                escape_html(text)
            ),
            DescriptionBlock::Paragraph(text) => write!(
                description,
                r#"<p class="mb-4 text-gray-300 leading-relaxed">{}</p>"#,
                escape_html(text)
            ),
        };
    }
    set.insert("experience-description", description);
    set
}

/// Inline message shown in place of a post body that failed to load.
#[must_use]
pub fn post_error_html(message: &str) -> String {
    format!(
        r#"<p class="text-red-500">Error loading blog content: {}<br/>Please try refreshing the page (Ctrl+Shift+R for hard refresh).</p>"#,
        escape_html(message)
    )
}

/// Fragments of the blog post page.
#[must_use]
pub fn post_fragments(view: &BlogPostView) -> FragmentSet {
    let mut set = FragmentSet::new();
    set.text("blog-post-title", &view.title);
    set.insert(
        "blog-post-image",
        img(&view.image, &view.alt, "w-full h-full object-cover"),
    );
    set.text("blog-post-date", &view.date);
    set.insert(
        "blog-post-content",
        match &view.body {
            PostBody::Html(html) => html.clone(),
            PostBody::Error(message) => post_error_html(message),
        },
    );

    let mut related = String::new();
    for post in &view.related {
        let _ = write!(
            related,
            r#"<article class="bg-card-light dark:bg-card-dark rounded-2xl overflow-hidden border border-gray-200 dark:border-gray-800 cursor-pointer hover:shadow-lg transition card-hover" data-blog="{id}"><div class="rounded-t-2xl overflow-hidden h-48 relative">{image}</div><div class="p-4"><div class="text-xs text-gray-400 mb-2">{date}</div><h3 class="font-bold text-lg leading-snug text-white">{title}</h3></div></article>"#,
            id = post.id,
            image = img(&post.image, &post.alt, "w-full h-full object-cover"),
            date = escape_html(&post.date),
            title = escape_html(&post.title),
        );
    }
    set.insert("blog-post-related-grid", related);
    set
}

/// Banner shown when the content documents fail to load.
#[must_use]
pub fn error_banner(message: &str) -> FragmentSet {
    let mut set = FragmentSet::new();
    set.insert(
        ERROR_BANNER,
        format!(
            r#"<div style="position: fixed; top: 0; left: 0; right: 0; background: red; color: white; padding: 20px; z-index: 9999;">Error loading data: {}. Check console for details.</div>"#,
            escape_html(message)
        ),
    );
    set
}
