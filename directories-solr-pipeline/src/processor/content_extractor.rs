//! Plain text extraction from response HTML.

use directories_solr_shared::Response;

use crate::errors::ExtractionError;

/// Line width handed to the HTML renderer; wide enough that paragraphs are
/// not wrapped in practice.
const TEXT_WIDTH: usize = 4096;

/// Turns the raw response text of an entity into indexable text.
pub trait ContentExtractor: Send + Sync {
    fn extract(&self, html: &str) -> Result<String, ExtractionError>;
}

/// Extractor parsing the content as HTML with `html2text`.
///
/// Rendering is undecorated: emphasis, headings, list bullets and link
/// footnotes produce no extra characters, only the visible text.
#[derive(Debug, Clone, Default)]
pub struct HtmlContentExtractor {
    max_chars: Option<usize>,
}

impl HtmlContentExtractor {
    /// Create an extractor keeping at most `max_chars` characters, if set.
    pub fn new(max_chars: Option<usize>) -> Self {
        Self { max_chars }
    }
}

impl ContentExtractor for HtmlContentExtractor {
    fn extract(&self, html: &str) -> Result<String, ExtractionError> {
        if html.trim().is_empty() {
            return Ok(String::new());
        }

        let text = html2text::config::plain_no_decorate()
            .string_from_read(html.as_bytes(), TEXT_WIDTH)
            .map_err(|e| ExtractionError::parse(e.to_string()))?;
        let text = text.trim();

        Ok(match self.max_chars {
            Some(limit) => text.chars().take(limit).collect(),
            None => text.to_string(),
        })
    }
}

/// Concatenate the present, non-empty response values, each preceded by a
/// single space, in response order.
pub fn concatenate_responses(responses: &[Response]) -> String {
    let mut content = String::new();
    for value in responses
        .iter()
        .filter_map(Response::present_value)
        .filter(|v| !v.is_empty())
    {
        content.push(' ');
        content.push_str(value);
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_strips_markup() {
        let extractor = HtmlContentExtractor::default();
        let text = extractor
            .extract("<p>Opening <span>hours</span></p><div>Monday</div>")
            .unwrap();

        assert!(text.contains("Opening hours"));
        assert!(text.contains("Monday"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_extract_plain_text() {
        let extractor = HtmlContentExtractor::default();
        assert_eq!(extractor.extract(" Paris Lyon").unwrap(), "Paris Lyon");
    }

    #[test]
    fn test_extract_empty() {
        let extractor = HtmlContentExtractor::new(Some(10));
        assert_eq!(extractor.extract("").unwrap(), "");
        assert_eq!(extractor.extract("   ").unwrap(), "");
    }

    #[test]
    fn test_extract_drops_decorations() {
        let extractor = HtmlContentExtractor::default();
        let text = extractor
            .extract(
                " <b>Bold</b> <em>it</em> <a href=\"http://ex.org/page\">link</a> \
                 <h1>Title</h1><ul><li>one</li></ul>",
            )
            .unwrap();

        for word in ["Bold", "it", "link", "Title", "one"] {
            assert!(text.contains(word), "missing {:?} in {:?}", word, text);
        }
        assert!(!text.contains("http://ex.org/page"));
        for marker in ['*', '#', '[', ']'] {
            assert!(!text.contains(marker), "marker {:?} left in {:?}", marker, text);
        }
    }

    #[test]
    fn test_truncation_counts_visible_text() {
        let extractor = HtmlContentExtractor::new(Some(7));
        let text = extractor
            .extract("<em>abc</em><a href=\"http://ex.org\">defghij</a>")
            .unwrap();
        assert_eq!(text, "abcdefg");
    }

    #[test]
    fn test_truncation() {
        let extractor = HtmlContentExtractor::new(Some(5));
        let text = extractor.extract("<p>abcdefghijklmnop</p>").unwrap();
        assert_eq!(text, "abcde");

        let extractor = HtmlContentExtractor::new(Some(3));
        let text = extractor.extract("<p>été déjà</p>").unwrap();
        assert_eq!(text.chars().count(), 3);
    }

    #[test]
    fn test_no_limit() {
        let long = "word ".repeat(2000);
        let extractor = HtmlContentExtractor::new(None);
        let text = extractor.extract(&format!("<p>{}</p>", long)).unwrap();
        assert_eq!(text.split_whitespace().count(), 2000);
    }

    #[test]
    fn test_concatenate_responses() {
        let responses = vec![
            Response::new(1, Some("<b>A</b>".to_string())),
            Response::new(2, None),
            Response::new(3, Some("null".to_string())),
            Response::new(4, Some(String::new())),
            Response::new(5, Some("B".to_string())),
        ];

        assert_eq!(concatenate_responses(&responses), " <b>A</b> B");
    }

    #[test]
    fn test_concatenate_all_absent() {
        let responses = vec![
            Response::new(1, None),
            Response::new(2, Some("null".to_string())),
        ];
        assert_eq!(concatenate_responses(&responses), "");
    }
}
