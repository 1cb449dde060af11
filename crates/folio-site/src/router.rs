//! Page router: one visible page at a time.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, warn};

use crate::html::Surface;
use crate::timer::Delay;

/// Delay before showing a page again when its container is missing.
pub const PAGE_RETRY: Duration = Duration::from_millis(100);

/// Viewport width from which the sidebar is shown on every page.
pub const SIDEBAR_BREAKPOINT: u32 = 1024;

/// Named pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Projects,
    Resume,
    Blog,
    BlogPost,
    Project,
    Experience,
    Contact,
}

impl Page {
    pub const ALL: [Self; 9] = [
        Self::Home,
        Self::About,
        Self::Projects,
        Self::Resume,
        Self::Blog,
        Self::BlogPost,
        Self::Project,
        Self::Experience,
        Self::Contact,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Blog => "blog",
            Self::BlogPost => "blog-post",
            Self::Project => "project",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    /// Id of the page container.
    #[must_use]
    pub fn anchor(self) -> String {
        format!("page-{}", self.id())
    }

    /// Navigation entry highlighted while this page is shown.
    #[must_use]
    pub fn nav_section(self) -> &'static str {
        match self {
            Self::BlogPost => Self::Blog.id(),
            Self::Experience => Self::Resume.id(),
            Self::Project => Self::Projects.id(),
            other => other.id(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| format!("unknown page: {s}"))
    }
}

/// Outcome of a [`Router::show`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    Shown,
    /// The container is not there yet; [`Router::tick`] will try again.
    Pending { retry_after: Duration },
}

/// Tracks the requested and the visible page.
#[derive(Debug, Clone, Default)]
pub struct Router {
    requested: Option<Page>,
    visible: Option<Page>,
    retry: Option<Delay>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `page`, hiding every other page.
    pub fn show(&mut self, page: Page, surface: &dyn Surface) -> ShowOutcome {
        self.requested = Some(page);
        if surface.has_anchor(&page.anchor()) {
            debug!(page = %page, "Showing page");
            self.visible = Some(page);
            self.retry = None;
            ShowOutcome::Shown
        } else {
            warn!(anchor = %page.anchor(), "Page element not found, retrying");
            self.retry = Some(Delay::new(PAGE_RETRY));
            ShowOutcome::Pending {
                retry_after: PAGE_RETRY,
            }
        }
    }

    /// Advance a pending retry. Returns the outcome when a retry ran.
    pub fn tick(&mut self, elapsed: Duration, surface: &dyn Surface) -> Option<ShowOutcome> {
        let expired = self.retry.as_mut().is_some_and(|delay| delay.tick(elapsed));
        match (expired, self.requested) {
            (true, Some(page)) => Some(self.show(page, surface)),
            _ => None,
        }
    }

    /// Page currently shown.
    #[must_use]
    pub fn visible(&self) -> Option<Page> {
        self.visible
    }

    /// Page most recently asked for.
    #[must_use]
    pub fn requested(&self) -> Option<Page> {
        self.requested
    }

    /// Highlighted navigation entry.
    #[must_use]
    pub fn active_nav(&self) -> Option<&'static str> {
        self.requested.map(Page::nav_section)
    }

    /// Whether the sidebar is visible at this viewport width. Narrow
    /// viewports show it on the home page only.
    #[must_use]
    pub fn sidebar_visible(&self, viewport_width: u32) -> bool {
        viewport_width >= SIDEBAR_BREAKPOINT || self.requested == Some(Page::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::MemorySurface;
    use pretty_assertions::assert_eq;

    fn pages() -> MemorySurface {
        MemorySurface::with_anchors(Page::ALL.iter().map(|p| p.anchor()))
    }

    #[test]
    fn test_parse_round_trips_ids() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>().unwrap(), page);
        }
        assert!("nope".parse::<Page>().is_err());
    }

    #[test]
    fn test_experience_keeps_resume_active() {
        let surface = pages();
        let mut router = Router::new();
        router.show(Page::Resume, &surface);
        assert_eq!(router.active_nav(), Some("resume"));
        router.show(Page::Experience, &surface);
        assert_eq!(router.active_nav(), Some("resume"));
        assert_eq!(router.visible(), Some(Page::Experience));
    }

    #[test]
    fn test_blog_post_highlights_blog() {
        let mut router = Router::new();
        router.show(Page::BlogPost, &pages());
        assert_eq!(router.active_nav(), Some("blog"));
    }

    #[test]
    fn test_missing_container_retries() {
        let mut surface = MemorySurface::with_anchors(["page-home".to_owned()]);
        let mut router = Router::new();
        router.show(Page::Home, &surface);

        let outcome = router.show(Page::Contact, &surface);
        assert_eq!(
            outcome,
            ShowOutcome::Pending {
                retry_after: PAGE_RETRY
            }
        );
        assert_eq!(router.visible(), Some(Page::Home));
        assert_eq!(router.tick(Duration::from_millis(50), &surface), None);

        surface.add_anchor("page-contact");
        assert_eq!(
            router.tick(Duration::from_millis(50), &surface),
            Some(ShowOutcome::Shown)
        );
        assert_eq!(router.visible(), Some(Page::Contact));
        assert_eq!(router.tick(Duration::from_secs(1), &surface), None);
    }

    #[test]
    fn test_sidebar_visibility() {
        let surface = pages();
        let mut router = Router::new();
        router.show(Page::Home, &surface);
        assert!(router.sidebar_visible(800));
        router.show(Page::Blog, &surface);
        assert!(!router.sidebar_visible(800));
        assert!(router.sidebar_visible(1280));
    }
}
