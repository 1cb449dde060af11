//! Small interactive widgets: testimonial carousel, modals and theme.

use std::fmt;

use serde::Serialize;

/// Label of the read-more toggle while the preview is shown.
pub const READ_MORE: &str = "Click to read full story";
/// Label of the read-more toggle while the full text is shown.
pub const SHOW_LESS: &str = "Show less";

/// Testimonial carousel that wraps at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestimonialCarousel {
    index: usize,
    len: usize,
}

impl TestimonialCarousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move one step forward or back. Returns the new index, or `None` when
    /// there is nothing to show.
    pub fn change(&mut self, forward: bool) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = if forward {
            (self.index + 1) % self.len
        } else {
            self.index.checked_sub(1).unwrap_or(self.len - 1)
        };
        Some(self.index)
    }
}

/// Testimonial modal: open on a specific testimonial or closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestimonialModal {
    open: Option<usize>,
}

impl TestimonialModal {
    /// Open on `index`, or close if already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = match self.open {
            Some(_) => None,
            None => Some(index),
        };
    }

    #[must_use]
    pub fn open(&self) -> Option<usize> {
        self.open
    }
}

/// Blog modal showing a first-sentence preview with a read-more toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPreview {
    open: Option<u64>,
    expanded: bool,
}

/// What the blog modal shows right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPreviewView {
    pub post: u64,
    pub text: String,
    pub toggle_label: &'static str,
    pub expanded: bool,
}

/// Preview text: everything before the first period, plus a period.
#[must_use]
pub fn first_sentence(text: &str) -> String {
    let head = text.split('.').next().unwrap_or_default();
    format!("{head}.")
}

impl BlogPreview {
    /// Open the modal on a post, collapsed.
    pub fn open(&mut self, post: u64) {
        self.open = Some(post);
        self.expanded = false;
    }

    /// Close the modal and collapse the text.
    pub fn close(&mut self) {
        self.open = None;
        self.expanded = false;
    }

    /// Flip between preview and full text.
    pub fn toggle_read_more(&mut self) {
        if self.open.is_some() {
            self.expanded = !self.expanded;
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Project the modal for `full_text` of the open post.
    #[must_use]
    pub fn view(&self, full_text: &str) -> Option<BlogPreviewView> {
        let post = self.open?;
        Some(BlogPreviewView {
            post,
            text: if self.expanded {
                full_text.to_owned()
            } else {
                first_sentence(full_text)
            },
            toggle_label: if self.expanded { SHOW_LESS } else { READ_MORE },
            expanded: self.expanded,
        })
    }
}

/// Stored theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    System,
}

/// Resolved color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Resolve a stored preference against the system setting.
    #[must_use]
    pub fn resolve(preference: ThemePreference, system_prefers_dark: bool) -> Self {
        match preference {
            ThemePreference::Dark => Self::Dark,
            ThemePreference::Light => Self::Light,
            ThemePreference::System if system_prefers_dark => Self::Dark,
            ThemePreference::System => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_carousel_wraps() {
        let mut carousel = TestimonialCarousel::new(3);
        assert_eq!(carousel.change(false), Some(2));
        assert_eq!(carousel.change(true), Some(0));
        assert_eq!(carousel.change(true), Some(1));
        assert_eq!(TestimonialCarousel::new(0).change(true), None);
    }

    #[test]
    fn test_testimonial_modal_toggles() {
        let mut modal = TestimonialModal::default();
        modal.toggle(2);
        assert_eq!(modal.open(), Some(2));
        modal.toggle(2);
        assert_eq!(modal.open(), None);
    }

    #[test]
    fn test_first_sentence() {
        assert_eq!(first_sentence("One. Two. Three"), "One.");
        assert_eq!(first_sentence("No period"), "No period.");
        assert_eq!(first_sentence(""), ".");
    }

    #[test]
    fn test_blog_preview_resets_on_close() {
        let mut preview = BlogPreview::default();
        assert!(preview.view("A. B.").is_none());

        preview.open(7);
        let view = preview.view("A. B.").unwrap();
        assert_eq!(view.text, "A.");
        assert_eq!(view.toggle_label, READ_MORE);

        preview.toggle_read_more();
        let view = preview.view("A. B.").unwrap();
        assert_eq!(view.text, "A. B.");
        assert_eq!(view.toggle_label, SHOW_LESS);

        preview.close();
        preview.open(7);
        assert!(!preview.view("A. B.").unwrap().expanded);
    }

    #[test]
    fn test_theme_resolution() {
        assert_eq!(Theme::resolve(ThemePreference::Dark, false), Theme::Dark);
        assert_eq!(Theme::resolve(ThemePreference::Light, true), Theme::Light);
        assert_eq!(Theme::resolve(ThemePreference::System, true), Theme::Dark);
        assert_eq!(Theme::resolve(ThemePreference::System, false), Theme::Light);
    }
}
