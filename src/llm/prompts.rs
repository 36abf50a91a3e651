use crate::locale::Locale;

/// System instruction sent with every outline request.
pub fn system_instruction(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "あなたはプレゼンテーション資料作成のプロです。",
        Locale::En => "You are a professional presentation designer.",
    }
}

/// Build the outline prompt for a topic and its formatted search results.
pub fn build_outline_prompt(topic: &str, search_text: &str, locale: Locale) -> String {
    match locale {
        Locale::Ja => format!(
            "以下のWeb検索結果をもとに、「{topic}」についてのプレゼンテーションスライド(1枚)のコンテンツを生成してください。\n\
\n\
検索結果:\n\
{search_text}\n\
\n\
以下のJSON形式で出力してください:\n\
{schema}\n\
\n\
重要:\n\
- ビジネスプレゼンに適した内容に\n\
- 各ポイントは簡潔に(20文字以内)\n\
- セクションは2つまで\n\
- 数字や具体例を含める\n",
            schema = JA_SCHEMA
        ),
        Locale::En => format!(
            "Using the web search results below, write the content for a single presentation slide about \"{topic}\".\n\
\n\
Search results:\n\
{search_text}\n\
\n\
Respond with JSON in exactly this shape:\n\
{schema}\n\
\n\
Rules:\n\
- Suitable for a business presentation\n\
- Keep each point short (20 characters or fewer)\n\
- At most 2 sections\n\
- Include numbers and concrete examples\n",
            schema = EN_SCHEMA
        ),
    }
}

const JA_SCHEMA: &str = r#"{
  "title": "スライドのタイトル(短く印象的に)",
  "subtitle": "サブタイトル(1行で)",
  "sections": [
    {
      "heading": "セクション見出し1",
      "points": ["ポイント1", "ポイント2", "ポイント3"]
    },
    {
      "heading": "セクション見出し2",
      "points": ["ポイント1", "ポイント2", "ポイント3"]
    }
  ],
  "footer": "出典や補足情報"
}"#;

const EN_SCHEMA: &str = r#"{
  "title": "Slide title (short and memorable)",
  "subtitle": "Subtitle (one line)",
  "sections": [
    {
      "heading": "Section heading 1",
      "points": ["Point 1", "Point 2", "Point 3"]
    },
    {
      "heading": "Section heading 2",
      "points": ["Point 1", "Point 2", "Point 3"]
    }
  ],
  "footer": "Sources or notes"
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_topic_and_results() {
        let prompt = build_outline_prompt("生成AI", "1. 結果\n   本文", Locale::Ja);

        assert!(prompt.contains("「生成AI」"));
        assert!(prompt.contains("1. 結果\n   本文"));
        assert!(prompt.contains("\"footer\""));
        assert!(prompt.contains("セクションは2つまで"));
    }

    #[test]
    fn english_prompt_lists_constraints() {
        let prompt = build_outline_prompt("rust", "results", Locale::En);
        assert!(prompt.contains("\"rust\""));
        assert!(prompt.contains("At most 2 sections"));
        assert!(prompt.contains("20 characters"));
    }
}
