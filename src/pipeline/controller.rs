//! Search → format → generate → render sequencing

use chrono::Utc;
use uuid::Uuid;

use crate::config::Settings;
use crate::llm::{build_generator, OutlineGenerator, OutlineRequest};
use crate::locale::Locale;
use crate::pipeline::session::{RenderedSlide, Session};
use crate::search::{build_backend, format_results, SearchProvider};
use crate::slide::SlideRenderer;
use crate::{Result, SlideError};

pub struct PipelineController {
    search: SearchProvider,
    generator: Box<dyn OutlineGenerator>,
    renderer: SlideRenderer,
    locale: Locale,
    max_results: usize,
}

impl PipelineController {
    pub fn new(
        search: SearchProvider,
        generator: Box<dyn OutlineGenerator>,
        renderer: SlideRenderer,
        locale: Locale,
        max_results: usize,
    ) -> Self {
        Self {
            search,
            generator,
            renderer,
            locale,
            max_results,
        }
    }

    /// Wire up the configured backends.
    ///
    /// Fails with [`SlideError::Config`] when the generator cannot be built,
    /// which callers treat as fatal at startup.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let generator = build_generator(settings)?;
        let backend = build_backend(settings)?;
        let locale = settings.slide.locale;

        Ok(Self::new(
            SearchProvider::new(backend, locale),
            generator,
            SlideRenderer::from_settings(settings),
            locale,
            settings.effective_max_results(),
        ))
    }

    /// Run the search and formatting stages only.
    pub async fn search_text(&self, query: &str) -> String {
        let items = self.search.search(query, self.max_results).await;
        format_results(query, &items, self.locale)
    }

    /// Produce a slide for `topic` and store it in `session`.
    ///
    /// The session is only updated once every stage has succeeded; a failed
    /// run leaves the previous slide in place.
    pub async fn run(&self, session: &mut Session, topic: &str) -> Result<RenderedSlide> {
        if topic.trim().is_empty() {
            return Err(SlideError::EmptyTopic);
        }

        let run_id = Uuid::new_v4();
        tracing::info!(%run_id, topic, "Generating slide");

        let search_text = self.search_text(topic).await;
        tracing::debug!(%run_id, chars = search_text.chars().count(), "Search text ready");

        let outline = self
            .generator
            .generate(OutlineRequest {
                topic,
                search_text: &search_text,
            })
            .await
            .inspect_err(|e| tracing::error!(%run_id, error = %e, "Outline generation failed"))?;

        let html = self.renderer.render(&outline);

        let slide = RenderedSlide {
            topic: topic.to_string(),
            html,
            search_text,
            generated_at: Utc::now(),
        };
        session.replace(slide.clone());

        tracing::info!(%run_id, sections = outline.sections.len(), "Slide generated");
        Ok(slide)
    }
}
