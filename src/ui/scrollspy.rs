//! Highlighting the in-page navigation link for the section being read.

/// Vertical placement of a page element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

/// A same-page navigation link and the geometry of its target.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    /// `#fragment` the link points at; links without one are not tracked
    pub hash: Option<String>,
    pub section: Extent,
    /// Element following the section heading (the section's content), if any
    pub content: Option<Extent>,
}

/// Index of the link to mark current at scroll offset `scroll_y`.
///
/// The first link wins whose heading or content has scrolled past the top of
/// the viewport while the combined heading and content still extend below it.
pub fn current_link(links: &[NavLink], scroll_y: f64) -> Option<usize> {
    links.iter().position(|link| {
        if link.hash.is_none() {
            return false;
        }
        let section = link.section;
        let content = link.content.unwrap_or(section);

        let reached = section.top <= scroll_y || content.top <= scroll_y;
        let not_passed = section.top + section.height + content.height > scroll_y;
        reached && not_passed
    })
}
