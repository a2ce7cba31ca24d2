//! Small page behaviors: docs navigation dropdown, hero video, text helpers.

/// Markup for the landing page's background video.
const HERO_VIDEO_SOURCE: &str = r#"<source src="https://media.urbit.org/site/sea30-1440.mp4" type="video/mp4"/>Your browser does not support the video tag."#;

/// URL to navigate to when a docs dropdown option is chosen on mobile.
///
/// Only absolute `http(s)` values navigate; section headings and placeholders
/// in the dropdown do not.
pub fn docs_select_target(value: &str) -> Option<&str> {
    value.starts_with("http").then_some(value)
}

/// The hero video is only embedded in landscape viewports.
pub fn hero_video_source(width: u32, height: u32) -> Option<&'static str> {
    (width > height).then_some(HERO_VIDEO_SOURCE)
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
