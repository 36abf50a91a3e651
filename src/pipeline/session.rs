//! Per-session slide state

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A generated slide and the topic it came from.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedSlide {
    pub topic: String,
    pub html: String,
    /// Formatted search text fed to the generator, kept for inspection.
    pub search_text: String,
    pub generated_at: DateTime<Utc>,
}

impl RenderedSlide {
    /// File name offered for download: whitespace becomes `_`, suffixed `_slide.html`.
    pub fn download_filename(&self) -> String {
        download_filename(&self.topic)
    }

    /// Name for writing the slide into the current directory.
    pub fn local_filename(&self) -> String {
        local_filename(&self.topic)
    }
}

pub fn download_filename(topic: &str) -> String {
    let stem: String = topic
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{stem}_slide.html")
}

/// [`download_filename`] reduced to a single path component: separators and
/// control characters become `_` and leading dots are dropped.
pub fn local_filename(topic: &str) -> String {
    let name: String = download_filename(topic)
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    name.trim_start_matches('.').to_string()
}

/// State for one user session.
///
/// Holds the most recent successful slide. Only the pipeline writes it, and
/// only after a run has fully succeeded.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<RenderedSlide>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&RenderedSlide> {
        self.current.as_ref()
    }

    pub(crate) fn replace(&mut self, slide: RenderedSlide) {
        self.current = Some(slide);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(download_filename("hello world"), "hello_world_slide.html");
    }

    #[test]
    fn all_whitespace_kinds_are_replaced() {
        assert_eq!(
            download_filename("生成AI\u{3000}活用\t事例"),
            "生成AI_活用_事例_slide.html"
        );
    }

    #[test]
    fn local_name_replaces_separators() {
        assert_eq!(local_filename("AI/ML trends"), "AI_ML_trends_slide.html");
        assert_eq!(local_filename(r"tmp\x y"), "tmp_x_y_slide.html");
        // the download name is left alone
        assert_eq!(download_filename("AI/ML trends"), "AI/ML_trends_slide.html");
    }

    #[test]
    fn local_name_cannot_leave_the_directory() {
        for topic in ["../../tmp/x", "/etc/passwd", ".hidden", "..", "a\0b"] {
            let name = local_filename(topic);
            let path = std::path::Path::new(&name);

            assert!(!name.contains('/') && !name.contains('\\'), "{name:?}");
            assert!(!name.starts_with('.'), "{name:?}");
            assert_eq!(path.components().count(), 1, "{name:?}");
            assert!(
                matches!(
                    path.components().next(),
                    Some(std::path::Component::Normal(_))
                ),
                "{name:?}"
            );
        }
        assert_eq!(local_filename("../../tmp/x"), "_.._tmp_x_slide.html");
    }

    #[test]
    fn new_session_is_empty() {
        assert!(Session::new().current().is_none());
    }
}
