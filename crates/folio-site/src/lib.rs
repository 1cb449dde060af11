//! View model, interactive state and controller for the Folio portfolio.
//!
//! The site is a projection of a [`folio_content::ContentStore`]:
//! [`SiteView::build`] turns the store into serializable view models and
//! [`html`] turns those into HTML fragments keyed by anchor id. Interactive
//! widgets (pagers, ribbons, router, carousels, animations) are explicit
//! state machines owned by a [`Site`] and advanced with elapsed time.
//!
//! # Example
//!
//! ```ignore
//! use folio_content::{ContentPaths, FsSource};
//! use folio_site::{MemorySurface, Site, SiteSettings};
//!
//! let source = FsSource::new("site");
//! let mut site = Site::load(&source, &ContentPaths::default(), SiteSettings::default())?;
//! let mut surface = MemorySurface::with_anchors(["portfolio-grid", "page-home"]);
//! site.start(&mut surface)?;
//! ```

mod animation;
mod app;
mod error;
pub mod html;
mod pager;
mod ribbon;
mod router;
mod timer;
mod view;
mod widgets;

pub use animation::{SkillBarFrame, SkillFill, TYPING_WORDS, TypingAnimation};
pub use app::{HOME_TYPING_RESTART, Ribbon, Site, SiteSettings, SiteState};
pub use error::SiteError;
pub use html::{ApplyReport, FragmentSet, MemorySurface, Surface, SurfaceError};
pub use pager::{DiscretePager, MEASURE_RETRY, Overflow, PositionUpdate, per_view_for_width};
pub use ribbon::{Direction, RibbonState, ScrollRibbon};
pub use router::{PAGE_RETRY, Page, Router, SIDEBAR_BREAKPOINT, ShowOutcome};
pub use timer::{Delay, Interval};
pub use view::{
    AboutView, BlogCard, BlogPostView, CardMedia, ClientView, ContactInfo, ContactView,
    DescriptionBlock, EducationCard, ExperienceCard, ExperienceView, PortfolioCard,
    PortfolioView, PostBody, ProjectLinks, ProjectView, RelatedPost, ResumeView, ScreenshotView,
    ServiceCard, SidebarView, SiteView, SkillView, SocialIcon, Statistics, TestimonialView,
    ToolView, ViewContext, format_date,
};
pub use widgets::{
    BlogPreview, BlogPreviewView, READ_MORE, SHOW_LESS, TestimonialCarousel, TestimonialModal,
    Theme, ThemePreference,
};
