//! Single-page UI markup

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::locale::Locale;
use crate::pipeline::RenderedSlide;

/// Everything the page needs for one render.
pub struct PageView<'a> {
    pub locale: Locale,
    pub slide: Option<&'a RenderedSlide>,
    pub error: Option<String>,
    pub topic: &'a str,
}

struct PageText {
    lang: &'static str,
    heading: &'static str,
    lead: &'static str,
    input_label: &'static str,
    placeholder: &'static str,
    button: &'static str,
    result_heading: &'static str,
    download: &'static str,
    search_panel: &'static str,
    open_hint: &'static str,
    usage_heading: &'static str,
    usage_steps: [&'static str; 4],
}

static JA_TEXT: PageText = PageText {
    lang: "ja",
    heading: "Web検索→スライド自動生成",
    lead: "調べたいテーマを入力すると、Web検索結果からプレゼン資料を自動生成!",
    input_label: "調べたいテーマを入力",
    placeholder: "例: 生成AIの活用事例",
    button: "スライド生成",
    result_heading: "生成されたスライド",
    download: "HTMLダウンロード",
    search_panel: "検索結果を見る",
    open_hint: "ダウンロードしたHTMLファイルをブラウザで開くと、フルサイズで表示できます!",
    usage_heading: "使い方",
    usage_steps: [
        "調べたいテーマを入力 (例: \"生成AIの活用事例\")",
        "「スライド生成」ボタンをクリック",
        "Web検索 → OpenAI APIで整理 → スライド自動生成!",
        "HTMLダウンロードして、そのままプレゼンに使える!",
    ],
};

static EN_TEXT: PageText = PageText {
    lang: "en",
    heading: "Web search → slide generator",
    lead: "Enter a topic and get a presentation slide built from live search results.",
    input_label: "Topic to research",
    placeholder: "e.g. How companies use generative AI",
    button: "Generate slide",
    result_heading: "Generated slide",
    download: "Download HTML",
    search_panel: "Show search results",
    open_hint: "Open the downloaded HTML file in a browser to see it full size.",
    usage_heading: "How to use",
    usage_steps: [
        "Enter a topic (e.g. \"How companies use generative AI\")",
        "Click \"Generate slide\"",
        "Web search → outline via the OpenAI API → slide",
        "Download the HTML and present it as-is",
    ],
};

const PAGE_CSS: &str = r#"
        body { font-family: system-ui, sans-serif; max-width: 1280px; margin: 0 auto; padding: 24px; color: #222; }
        .main-title { font-size: 40px; font-weight: bold; text-align: center; color: #2196F3; margin-bottom: 10px; }
        .sub-title { font-size: 18px; text-align: center; color: #666; margin-bottom: 30px; }
        form { display: flex; gap: 16px; align-items: flex-end; }
        form label { flex: 2; display: flex; flex-direction: column; gap: 6px; font-weight: bold; }
        form input { padding: 12px; font-size: 16px; border: 1px solid #ccc; border-radius: 8px; }
        form button { flex: 1; background-color: #2196F3; color: white; font-size: 18px; padding: 14px; border: none; border-radius: 8px; font-weight: bold; cursor: pointer; }
        .error { background: #fdecea; color: #b71c1c; padding: 12px 16px; border-radius: 8px; margin-top: 20px; }
        .info { background: #e3f2fd; color: #0d47a1; padding: 12px 16px; border-radius: 8px; }
        .result-bar { display: flex; justify-content: space-between; align-items: center; }
        .download { background: #2196F3; color: white; padding: 10px 18px; border-radius: 8px; text-decoration: none; font-weight: bold; }
        iframe { width: 100%; height: 700px; border: 1px solid #ddd; border-radius: 8px; }
        pre { white-space: pre-wrap; background: #f7f7f7; padding: 12px; border-radius: 8px; }
        hr { margin: 32px 0; border: none; border-top: 1px solid #ddd; }
"#;

fn text_for(locale: Locale) -> &'static PageText {
    match locale {
        Locale::Ja => &JA_TEXT,
        Locale::En => &EN_TEXT,
    }
}

pub fn render_page(view: &PageView<'_>) -> String {
    let text = text_for(view.locale);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n<head>\n", text.lang));
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("    <title>{}</title>\n", text.heading));
    html.push_str("    <style>");
    html.push_str(PAGE_CSS);
    html.push_str("    </style>\n</head>\n<body>\n");

    html.push_str(&format!(
        "    <div class=\"main-title\">{}</div>\n",
        text.heading
    ));
    html.push_str(&format!("    <div class=\"sub-title\">{}</div>\n", text.lead));

    html.push_str("    <form method=\"post\" action=\"/generate\">\n");
    html.push_str(&format!(
        "        <label>{}<input type=\"text\" name=\"topic\" value=\"{}\" placeholder=\"{}\" required></label>\n",
        text.input_label,
        encode_double_quoted_attribute(view.topic),
        encode_double_quoted_attribute(text.placeholder)
    ));
    html.push_str(&format!(
        "        <button type=\"submit\">{}</button>\n",
        text.button
    ));
    html.push_str("    </form>\n");

    if let Some(error) = &view.error {
        html.push_str(&format!(
            "    <div class=\"error\">{}</div>\n",
            encode_text(error)
        ));
    }

    html.push_str("    <hr>\n");

    match view.slide {
        Some(slide) => {
            html.push_str("    <div class=\"result-bar\">\n");
            html.push_str(&format!("        <h3>{}</h3>\n", text.result_heading));
            html.push_str(&format!(
                "        <a class=\"download\" href=\"/download\" download=\"{}\">{}</a>\n",
                encode_double_quoted_attribute(&slide.download_filename()),
                text.download
            ));
            html.push_str("    </div>\n");
            html.push_str(&format!(
                "    <p><small>{} · {}</small></p>\n",
                encode_text(&slide.topic),
                slide.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
            html.push_str(
                "    <iframe src=\"/slide\" title=\"slide preview\" scrolling=\"yes\"></iframe>\n",
            );
            html.push_str(&format!(
                "    <details>\n        <summary>{}</summary>\n        <pre>{}</pre>\n    </details>\n",
                text.search_panel,
                encode_text(&slide.search_text)
            ));
            html.push_str(&format!("    <p class=\"info\">{}</p>\n", text.open_hint));
        }
        None => {
            html.push_str(&format!("    <h3>{}</h3>\n    <ol>\n", text.usage_heading));
            for step in text.usage_steps {
                html.push_str(&format!("        <li>{}</li>\n", encode_text(step)));
            }
            html.push_str("    </ol>\n");
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}
