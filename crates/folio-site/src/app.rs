//! Site controller.
//!
//! [`Site`] owns the loaded [`ContentStore`] and all interactive state. Every
//! timer-driven behavior advances through [`Site::tick`].

use std::thread;
use std::time::Duration;

use folio_contact::{ContactForm, FormRelay, SubmitButton};
use folio_content::{CategoryFilter, ContentPaths, ContentSource, ContentStore};
use folio_renderer::MarkdownEngine;
use tracing::{error, info, warn};

use crate::animation::{SkillBarFrame, SkillFill, TypingAnimation};
use crate::error::SiteError;
use crate::html::{
    ApplyReport, FragmentSet, Surface, apply, experience_fragments, post_fragments, project_fragments,
    site_fragments,
};
use crate::pager::{DiscretePager, Overflow, PositionUpdate, per_view_for_width};
use crate::ribbon::ScrollRibbon;
use crate::router::{Page, Router, ShowOutcome};
use crate::timer::Interval;
use crate::view::{
    BlogPostView, ExperienceView, PortfolioView, PostBody, ProjectView, SiteView,
    TestimonialView, ViewContext, testimonial_view,
};
use crate::widgets::{
    BlogPreview, BlogPreviewView, TestimonialCarousel, TestimonialModal, Theme, ThemePreference,
};

/// Delay before the hero typing animation restarts on the home page.
pub const HOME_TYPING_RESTART: Duration = Duration::from_millis(300);

/// One of the two background ribbons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ribbon {
    Clients,
    Tools,
}

/// Settings for a [`Site`].
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub engine: MarkdownEngine,
    pub theme: ThemePreference,
    pub system_prefers_dark: bool,
    pub viewport_width: u32,
    pub clients_autoplay: Duration,
    pub clients_dwell: Duration,
    pub tools_dwell: Duration,
    pub scroll_step: f64,
    pub screenshots_per_view: usize,
    pub screenshot_gap: f64,
    /// Delay before retrying a failed render pass.
    pub render_retry: Duration,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            engine: MarkdownEngine::default(),
            theme: ThemePreference::default(),
            system_prefers_dark: true,
            viewport_width: 1280,
            clients_autoplay: Duration::from_millis(3000),
            clients_dwell: Duration::from_millis(3000),
            tools_dwell: Duration::from_millis(2000),
            scroll_step: 1.0,
            screenshots_per_view: 3,
            screenshot_gap: 16.0,
            render_retry: Duration::from_millis(500),
        }
    }
}

/// Interactive state of one session.
#[derive(Debug, Clone)]
pub struct SiteState {
    pub router: Router,
    pub clients: DiscretePager,
    pub screenshots: DiscretePager,
    pub clients_ribbon: ScrollRibbon,
    pub tools_ribbon: ScrollRibbon,
    pub testimonials: TestimonialCarousel,
    pub testimonial_modal: TestimonialModal,
    pub blog_preview: BlogPreview,
    pub filter: CategoryFilter,
    pub project: Option<u64>,
    pub typing: TypingAnimation,
    pub skills: SkillFill,
    pub contact: SubmitButton,
    clients_autoplay: Interval,
}

impl SiteState {
    fn new(store: &ContentStore, settings: &SiteSettings) -> Self {
        let about = store.content().about.as_ref();
        let clients = about.and_then(|a| a.clients.as_ref()).map_or(0, Vec::len);
        let testimonials = about.and_then(|a| a.testimonials.as_ref()).map_or(0, Vec::len);
        let skills = store
            .content()
            .resume
            .as_ref()
            .and_then(|r| r.skills.as_ref())
            .map(|s| s.iter().map(|skill| skill.percentage).collect())
            .unwrap_or_default();

        Self {
            router: Router::new(),
            clients: DiscretePager::new(clients, per_view_for_width(settings.viewport_width)),
            screenshots: DiscretePager::new(0, settings.screenshots_per_view),
            clients_ribbon: ScrollRibbon::new(settings.scroll_step, settings.clients_dwell),
            tools_ribbon: ScrollRibbon::new(settings.scroll_step, settings.tools_dwell),
            testimonials: TestimonialCarousel::new(testimonials),
            testimonial_modal: TestimonialModal::default(),
            blog_preview: BlogPreview::default(),
            filter: CategoryFilter::All,
            project: None,
            typing: TypingAnimation::new(),
            skills: SkillFill::new(skills),
            contact: SubmitButton::new(),
            clients_autoplay: Interval::new(settings.clients_autoplay),
        }
    }
}

/// Portfolio site controller.
#[derive(Debug, Clone)]
pub struct Site {
    store: ContentStore,
    settings: SiteSettings,
    state: SiteState,
    rendered: Option<FragmentSet>,
}

impl Site {
    /// Create a controller over already loaded content.
    #[must_use]
    pub fn new(store: ContentStore, settings: SiteSettings) -> Self {
        let state = SiteState::new(&store, &settings);
        Self {
            store,
            settings,
            state,
            rendered: None,
        }
    }

    /// Load all content documents and create a controller.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Load`] if any document fails; nothing is
    /// rendered in that case.
    pub fn load(
        source: &dyn ContentSource,
        paths: &ContentPaths,
        settings: SiteSettings,
    ) -> Result<Self, SiteError> {
        match ContentStore::load(source, paths) {
            Ok(store) => Ok(Self::new(store, settings)),
            Err(err) => {
                error!(error = %err, "Error loading data");
                Err(err.into())
            }
        }
    }

    #[must_use]
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    #[must_use]
    pub fn state(&self) -> &SiteState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SiteState {
        &mut self.state
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::resolve(self.settings.theme, self.settings.system_prefers_dark)
    }

    /// Project the main sections from the current state.
    #[must_use]
    pub fn view(&self) -> SiteView {
        let ctx = ViewContext {
            theme: self.theme(),
            filter: self.state.filter,
            testimonial: self.state.testimonials.index(),
            active_nav: self.state.router.active_nav(),
            sidebar_visible: self
                .state
                .router
                .sidebar_visible(self.settings.viewport_width),
        };
        SiteView::build(&self.store, &ctx)
    }

    /// Render every main section to `surface`.
    ///
    /// A failed pass is retried once from scratch after
    /// [`SiteSettings::render_retry`].
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Render`] if the retry fails too.
    pub fn render_into(&mut self, surface: &mut dyn Surface) -> Result<ApplyReport, SiteError> {
        let fragments = site_fragments(&self.view());
        let report = match apply(surface, &fragments, self.rendered.as_ref()) {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "Error rendering sections, retrying");
                if !self.settings.render_retry.is_zero() {
                    thread::sleep(self.settings.render_retry);
                }
                apply(surface, &fragments, None).map_err(SiteError::Render)?
            }
        };
        info!(
            updated = report.updated.len(),
            skipped = report.skipped.len(),
            "All sections rendered"
        );
        self.rendered = Some(fragments);
        Ok(report)
    }

    /// Render everything, start the animations and show the home page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Render`] if rendering fails after the retry.
    pub fn start(&mut self, surface: &mut dyn Surface) -> Result<ApplyReport, SiteError> {
        let report = self.render_into(surface)?;
        self.state.clients_autoplay.reset();
        self.state.skills.start();
        self.show(Page::Home, surface);
        Ok(report)
    }

    /// Switch pages.
    pub fn show(&mut self, page: Page, surface: &dyn Surface) -> ShowOutcome {
        let outcome = self.state.router.show(page, surface);
        if page == Page::Home {
            self.state.typing.schedule_restart(HOME_TYPING_RESTART);
        }
        outcome
    }

    /// Advance every timer by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration, surface: &dyn Surface) -> Option<ShowOutcome> {
        // Autoplay cycles through max_index + 1 positions.
        let fired = usize::try_from(self.state.clients_autoplay.tick(elapsed)).unwrap_or(usize::MAX);
        for _ in 0..fired % (self.state.clients.max_index() + 1) {
            self.state.clients.autoplay();
        }
        self.state.clients_ribbon.tick(elapsed);
        self.state.tools_ribbon.tick(elapsed);
        self.state.typing.tick(elapsed);
        self.state.skills.tick(elapsed);
        self.state.contact.tick(elapsed);
        self.state.router.tick(elapsed, surface)
    }

    /// Viewport width changed.
    pub fn resize(&mut self, width: u32) {
        self.settings.viewport_width = width;
        self.state.clients.recompute_viewport(width);
    }

    fn ribbon_mut(&mut self, which: Ribbon) -> &mut ScrollRibbon {
        match which {
            Ribbon::Clients => &mut self.state.clients_ribbon,
            Ribbon::Tools => &mut self.state.tools_ribbon,
        }
    }

    /// Ribbon laid out: `content_width` of which `visible_width` is shown.
    ///
    /// The ribbon does not move until it has been measured.
    pub fn measure_ribbon(&mut self, which: Ribbon, content_width: f64, visible_width: f64) {
        self.ribbon_mut(which)
            .set_max_offset(content_width - visible_width);
    }

    /// Pointer entered or left a ribbon. Clients autoplay is not affected.
    pub fn hover_ribbon(&mut self, which: Ribbon, hovered: bool) {
        let ribbon = self.ribbon_mut(which);
        if hovered {
            ribbon.pause();
        } else {
            ribbon.resume();
        }
    }

    #[must_use]
    pub fn ribbon_offset(&self, which: Ribbon) -> f64 {
        match which {
            Ribbon::Clients => self.state.clients_ribbon.offset(),
            Ribbon::Tools => self.state.tools_ribbon.offset(),
        }
    }

    /// Client strip arrows. Wraps at both ends.
    pub fn scroll_clients(&mut self, forward: bool) -> usize {
        self.state
            .clients
            .advance(if forward { 1 } else { -1 }, Overflow::Wrap)
    }

    /// Offset of the client strip for measured widths.
    #[must_use]
    pub fn clients_offset(&self, item_width: f64, track_width: f64, container_width: f64) -> f64 {
        self.state
            .clients
            .strip_offset(item_width, track_width, container_width)
    }

    /// Select a portfolio filter tab.
    pub fn filter_portfolio(&mut self, filter: CategoryFilter) -> PortfolioView {
        self.state.filter = filter;
        self.view().portfolio
    }

    /// Project page for `id` at the current screenshot position.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::ProjectNotFound`] for an unknown id.
    pub fn project_view(&self, id: u64) -> Result<ProjectView, SiteError> {
        let item = self
            .store
            .portfolio_item(id)
            .ok_or(SiteError::ProjectNotFound(id))?;
        Ok(ProjectView::new(item, &self.state.screenshots))
    }

    /// Open a project page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] for an unknown id or a surface failure.
    pub fn open_project(
        &mut self,
        id: u64,
        surface: &mut dyn Surface,
    ) -> Result<ProjectView, SiteError> {
        let Some(item) = self.store.portfolio_item(id) else {
            error!(id, "Project not found");
            return Err(SiteError::ProjectNotFound(id));
        };
        info!(id, title = %item.title, "Opening project");
        self.state.screenshots.reset(item.media().len());
        self.state
            .screenshots
            .set_per_view(self.settings.screenshots_per_view);
        self.state.project = Some(id);

        let view = self.project_view(id)?;
        apply(surface, &project_fragments(&view), None)?;
        self.show(Page::Project, surface);
        Ok(view)
    }

    /// Screenshot arrows. Clamps at both ends.
    pub fn change_screenshot(&mut self, forward: bool) -> usize {
        self.state
            .screenshots
            .advance(if forward { 1 } else { -1 }, Overflow::Clamp)
    }

    /// Screenshot dots.
    pub fn go_to_screenshot(&mut self, index: usize) -> bool {
        self.state.screenshots.go_to(index)
    }

    /// Slider offset for measured widths.
    #[must_use]
    pub fn screenshot_position(&self, container_width: f64, item_width: f64) -> PositionUpdate {
        self.state
            .screenshots
            .slide_offset(container_width, item_width, self.settings.screenshot_gap)
    }

    /// Open an experience page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] for an unknown index or a surface failure.
    pub fn open_experience(
        &mut self,
        index: usize,
        surface: &mut dyn Surface,
    ) -> Result<ExperienceView, SiteError> {
        let Some(experience) = self.store.experience(index) else {
            error!(index, "Experience not found");
            return Err(SiteError::ExperienceNotFound(index));
        };
        let view = ExperienceView::new(index, experience);
        apply(surface, &experience_fragments(&view), None)?;
        self.show(Page::Experience, surface);
        Ok(view)
    }

    /// Open a blog post, fetching its body.
    ///
    /// A failed body fetch is shown inline in place of the body.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] for an unknown id or a surface failure.
    pub fn open_blog(
        &mut self,
        id: u64,
        source: &dyn ContentSource,
        surface: &mut dyn Surface,
    ) -> Result<BlogPostView, SiteError> {
        let post = self.store.blog(id).ok_or(SiteError::BlogNotFound(id))?;
        let body = match self.store.load_post_body(source, post) {
            Ok(markdown) => {
                let html = self.settings.engine.render(&markdown);
                info!(id, "Blog content rendered");
                PostBody::Html(html)
            }
            Err(err) => {
                error!(error = %err, path = %post.markdown, "Error loading markdown");
                PostBody::Error(err.to_string())
            }
        };
        let view = BlogPostView::new(post, body, &self.store.related_posts(id));
        apply(surface, &post_fragments(&view), None)?;
        self.show(Page::BlogPost, surface);
        Ok(view)
    }

    /// Testimonial arrows. Wraps at both ends.
    pub fn change_testimonial(&mut self, forward: bool) -> Option<TestimonialView> {
        let index = self.state.testimonials.change(forward)?;
        testimonial_view(&self.store, index)
    }

    /// Open or close the testimonial modal.
    pub fn toggle_testimonial_modal(&mut self, index: usize) -> Option<TestimonialView> {
        self.state.testimonial_modal.toggle(index);
        testimonial_view(&self.store, self.state.testimonial_modal.open()?)
    }

    /// Open the blog preview modal on a post.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::BlogNotFound`] for an unknown id.
    pub fn open_blog_preview(&mut self, id: u64) -> Result<BlogPreviewView, SiteError> {
        let post = self.store.blog(id).ok_or(SiteError::BlogNotFound(id))?;
        self.state.blog_preview.open(id);
        self.state
            .blog_preview
            .view(post.description.as_deref().unwrap_or_default())
            .ok_or(SiteError::BlogNotFound(id))
    }

    /// Flip the preview modal between first sentence and full text.
    pub fn toggle_read_more(&mut self) -> Option<BlogPreviewView> {
        self.state.blog_preview.toggle_read_more();
        self.blog_preview()
    }

    pub fn close_blog_preview(&mut self) {
        self.state.blog_preview.close();
    }

    /// Current preview modal, if open.
    #[must_use]
    pub fn blog_preview(&self) -> Option<BlogPreviewView> {
        let open = self.state.blog_preview.view("")?.post;
        let text = self.store.blog(open)?.description.clone().unwrap_or_default();
        self.state.blog_preview.view(&text)
    }

    /// Form fields changed.
    pub fn contact_form_changed(&mut self, form: &ContactForm) {
        self.state.contact.set_valid(form.is_valid());
    }

    /// Submit the contact form. Returns alert text on failure. The form is
    /// cleared after a successful submission.
    pub fn submit_contact(&mut self, relay: &dyn FormRelay, form: &mut ContactForm) -> Option<String> {
        if !self.state.contact.begin() {
            return None;
        }
        let result = relay.submit(form);
        if let Err(err) = &result {
            error!(error = %err, "Submission error");
        } else {
            form.reset();
            self.state.contact.set_valid(false);
        }
        self.state.contact.finish(&result)
    }

    /// Current skill bar frames.
    #[must_use]
    pub fn skill_frames(&self) -> Vec<SkillBarFrame> {
        self.state.skills.frames()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::MemorySurface;
    use folio_contact::{ContactError, RelayReply};
    use folio_content::{BlogPost, ContentDocument, PortfolioItem};
    use pretty_assertions::assert_eq;

    fn store() -> ContentStore {
        let portfolio = vec![PortfolioItem {
            id: 1,
            title: "Blocks".to_owned(),
            screenshots: Some((0..5).map(|i| format!("s{i}.png")).collect()),
            ..PortfolioItem::default()
        }];
        let blogs = vec![BlogPost {
            id: 9,
            title: "Post".to_owned(),
            description: Some("First. Second.".to_owned()),
            ..BlogPost::default()
        }];
        ContentStore::new(ContentDocument::default(), portfolio, blogs)
    }

    fn pages() -> MemorySurface {
        MemorySurface::with_anchors(Page::ALL.iter().map(|p| p.anchor()))
    }

    struct Relay(Result<(), u16>);

    impl FormRelay for Relay {
        fn submit(&self, _form: &ContactForm) -> Result<RelayReply, ContactError> {
            match self.0 {
                Ok(()) => Ok(RelayReply {
                    success: true,
                    message: "ok".to_owned(),
                }),
                Err(status) => Err(ContactError::Rejected {
                    status,
                    message: "nope".to_owned(),
                }),
            }
        }
    }

    #[test]
    fn test_screenshot_navigation() {
        let mut site = Site::new(store(), SiteSettings::default());
        let mut surface = pages();
        let view = site.open_project(1, &mut surface).unwrap();
        assert_eq!(view.dots.len(), 3);
        assert_eq!(site.state().router.visible(), Some(Page::Project));

        assert_eq!(site.change_screenshot(false), 0);
        site.change_screenshot(true);
        site.change_screenshot(true);
        assert_eq!(site.change_screenshot(true), 2);
        assert!(!site.go_to_screenshot(3));
        assert_eq!(
            site.screenshot_position(900.0, 100.0),
            PositionUpdate::Offset(-232.0)
        );
        assert!(matches!(
            site.open_project(77, &mut surface),
            Err(SiteError::ProjectNotFound(77))
        ));
    }

    #[test]
    fn test_blog_preview_flow() {
        let mut site = Site::new(store(), SiteSettings::default());
        assert_eq!(site.open_blog_preview(9).unwrap().text, "First.");
        assert_eq!(site.toggle_read_more().unwrap().text, "First. Second.");
        site.close_blog_preview();
        assert!(site.blog_preview().is_none());
    }

    #[test]
    fn test_submit_contact() {
        let mut site = Site::new(store(), SiteSettings::default());
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hi");
        assert_eq!(site.submit_contact(&Relay(Ok(())), &mut form), None);
        assert_eq!(form.name, "Ada");

        site.contact_form_changed(&form);
        assert_eq!(site.submit_contact(&Relay(Ok(())), &mut form), None);
        assert_eq!(site.state().contact.label(), "Message Sent!");

        site.tick(Duration::from_secs(5), &pages());
        assert_eq!(form, ContactForm::default());
        assert_eq!(site.state().contact.label(), "Send Message");
        assert!(site.state().contact.is_disabled());

        let mut form = ContactForm::new("Ada", "ada@example.com", "Hi");
        site.contact_form_changed(&form);
        let alert = site.submit_contact(&Relay(Err(400)), &mut form);
        assert_eq!(alert.as_deref(), Some("Error: nope"));
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_home_restarts_typing() {
        let mut site = Site::new(store(), SiteSettings::default());
        let surface = pages();
        site.tick(Duration::from_millis(1200), &surface);
        assert_eq!(site.state().typing.text(), "Rea");
        site.show(Page::Home, &surface);
        site.tick(HOME_TYPING_RESTART, &surface);
        assert_eq!(site.state().typing.text(), "Reality");
    }
}
