//! HTML rendering for a single slide
//!
//! Output is one self-contained HTML5 document: inline CSS, system fonts,
//! no scripts and no external resources, so the file opens offline.

use html_escape::encode_text;

use crate::config::Settings;
use crate::locale::Locale;
use crate::slide::outline::SlideOutline;

const SLIDE_CSS: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Segoe UI', 'Hiragino Sans', 'Hiragino Kaku Gothic ProN', Meiryo, sans-serif;
            background: white;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
            padding: 20px;
        }

        .slide {
            width: 1200px;
            height: 675px;
            background: white;
            border-radius: 12px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            padding: 60px 80px;
            position: relative;
            overflow: hidden;
        }

        .brand-mark {
            position: absolute;
            top: 40px;
            right: 80px;
            font-size: 36px;
            font-weight: bold;
            color: #2196F3;
            letter-spacing: 2px;
        }

        .slide-title {
            font-size: 56px;
            font-weight: bold;
            color: #1a1a1a;
            margin-bottom: 16px;
            line-height: 1.2;
        }

        .slide-subtitle {
            font-size: 22px;
            color: #666;
            margin-bottom: 50px;
            padding-bottom: 20px;
            border-bottom: 3px solid #2196F3;
        }

        .content-section {
            margin-bottom: 40px;
        }

        .section-heading {
            font-size: 28px;
            font-weight: bold;
            color: #2196F3;
            margin-bottom: 20px;
        }

        .points-list {
            list-style: none;
            padding-left: 0;
        }

        .points-list li {
            font-size: 24px;
            color: #333;
            margin-bottom: 16px;
            padding-left: 40px;
            position: relative;
            line-height: 1.4;
        }

        .points-list li:before {
            content: "\25B6";
            position: absolute;
            left: 0;
            color: #2196F3;
            font-size: 20px;
        }

        .slide-footer {
            position: absolute;
            bottom: 40px;
            left: 80px;
            right: 80px;
            font-size: 16px;
            color: #999;
            text-align: center;
        }
"#;

/// Renders outlines into the fixed 1200x675 slide layout.
#[derive(Debug, Clone)]
pub struct SlideRenderer {
    brand: String,
    locale: Locale,
}

impl Default for SlideRenderer {
    fn default() -> Self {
        Self::new("Tech0", Locale::default())
    }
}

impl SlideRenderer {
    pub fn new(brand: impl Into<String>, locale: Locale) -> Self {
        Self {
            brand: brand.into(),
            locale,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.slide.brand.trim(), settings.slide.locale)
    }

    /// Render an outline to a complete HTML document.
    ///
    /// Every section is emitted in order; nothing is truncated when the model
    /// returns more sections than were asked for.
    pub fn render(&self, outline: &SlideOutline) -> String {
        let mut sections_html = String::new();
        for section in &outline.sections {
            sections_html.push_str("        <div class=\"content-section\">\n");
            sections_html.push_str(&format!(
                "            <h2 class=\"section-heading\">{}</h2>\n",
                encode_text(&section.heading)
            ));
            sections_html.push_str("            <ul class=\"points-list\">\n");
            for point in &section.points {
                sections_html.push_str(&format!(
                    "                <li>{}</li>\n",
                    encode_text(point)
                ));
            }
            sections_html.push_str("            </ul>\n");
            sections_html.push_str("        </div>\n");
        }

        let brand_html = if self.brand.is_empty() {
            String::new()
        } else {
            format!(
                "        <div class=\"brand-mark\">{}</div>\n",
                encode_text(&self.brand)
            )
        };

        // The outline title is kept out of <title> so it appears once in the markup.
        let document_title = if self.brand.is_empty() {
            "Slide".to_string()
        } else {
            encode_text(&self.brand).into_owned()
        };

        let mut html = String::with_capacity(SLIDE_CSS.len() + sections_html.len() + 1024);
        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n", self.locale.html_lang()));
        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("    <title>{}</title>\n", document_title));
        html.push_str("    <style>");
        html.push_str(SLIDE_CSS);
        html.push_str("    </style>\n");
        html.push_str("</head>\n");
        html.push_str("<body>\n");
        html.push_str("    <div class=\"slide\">\n");
        html.push_str(&brand_html);
        html.push_str(&format!(
            "        <h1 class=\"slide-title\">{}</h1>\n",
            encode_text(&outline.title)
        ));
        html.push_str(&format!(
            "        <p class=\"slide-subtitle\">{}</p>\n",
            encode_text(&outline.subtitle)
        ));
        html.push_str(&sections_html);
        html.push_str(&format!(
            "        <div class=\"slide-footer\">{}</div>\n",
            encode_text(&outline.footer)
        ));
        html.push_str("    </div>\n");
        html.push_str("</body>\n");
        html.push_str("</html>\n");
        html
    }
}
