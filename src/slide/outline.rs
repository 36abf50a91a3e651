//! Structured outline produced by the generation stage

use serde::{Deserialize, Serialize};

use crate::{Result, SlideError};

/// Soft limits requested from the model; exceeding them is logged, not rejected.
pub const MAX_SECTIONS: usize = 2;
pub const MAX_POINT_CHARS: usize = 20;

/// Title, subtitle, sections and footer of a single slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideOutline {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Section>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub points: Vec<String>,
}

impl SlideOutline {
    /// Parse and validate an outline from JSON text.
    ///
    /// Every field is required; a missing or mistyped key is reported as a
    /// single [`SlideError::Schema`] before anything is rendered.
    pub fn from_json(json: &str) -> Result<Self> {
        let outline: SlideOutline = serde_json::from_str(json)
            .map_err(|e| SlideError::Schema(format!("{e}. Raw: {}", preview(json))))?;
        outline.warn_on_soft_limits();
        Ok(outline)
    }

    fn warn_on_soft_limits(&self) {
        if self.sections.len() > MAX_SECTIONS {
            tracing::warn!(
                sections = self.sections.len(),
                "Outline has more sections than requested; all will be rendered"
            );
        }

        let long_points = self
            .sections
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|p| p.chars().count() > MAX_POINT_CHARS)
            .count();
        if long_points > 0 {
            tracing::debug!(long_points, "Outline points exceed the requested length");
        }
    }
}

fn preview(json: &str) -> String {
    const LIMIT: usize = 200;
    if json.chars().count() <= LIMIT {
        json.to_string()
    } else {
        let head: String = json.chars().take(LIMIT).collect();
        format!("{head}...")
    }
}
