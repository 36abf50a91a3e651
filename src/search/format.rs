use crate::locale::Locale;
use crate::search::provider::SearchResultItem;

/// Flatten ranked results into the text block embedded in the outline prompt.
///
/// Total and deterministic: an empty list yields the header alone.
pub fn format_results(query: &str, items: &[SearchResultItem], locale: Locale) -> String {
    let mut text = match locale {
        Locale::Ja => format!("「{}」の検索結果:\n\n", query),
        Locale::En => format!("Search results for \"{}\":\n\n", query),
    };

    for (i, item) in items.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", i + 1, item.title));
        text.push_str(&format!("   {}\n\n", item.snippet));
    }

    text
}
