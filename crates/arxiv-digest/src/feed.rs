//! Atom feed parsing for arXiv search results.
//!
//! Streams the document with `quick-xml` and produces one [`Paper`] per
//! `entry` element, in document order. The `title`, `summary` and `published`
//! text is copied verbatim — no trimming, no whitespace normalization — since
//! the display layer assumes all three fields are present as returned.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::FeedError;
use crate::models::Paper;

/// Required per-entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Summary,
    Published,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"title" => Some(Self::Title),
            b"summary" => Some(Self::Summary),
            b"published" => Some(Self::Published),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Summary => "summary",
            Self::Published => "published",
        }
    }
}

/// Accumulated text for the entry currently being read.
///
/// `None` means the element was never seen; `Some("")` means it was present
/// but empty. The distinction is what makes a missing field an error.
#[derive(Default)]
struct EntryFields {
    title: Option<String>,
    summary: Option<String>,
    published: Option<String>,
}

impl EntryFields {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Summary => &mut self.summary,
            Field::Published => &mut self.published,
        }
    }

    fn into_paper(self, entry: usize) -> Result<Paper, FeedError> {
        let title = self.title.ok_or_else(|| FeedError::missing_field(entry, Field::Title.name()))?;
        let summary =
            self.summary.ok_or_else(|| FeedError::missing_field(entry, Field::Summary.name()))?;
        let published = self
            .published
            .ok_or_else(|| FeedError::missing_field(entry, Field::Published.name()))?;
        Ok(Paper::new(title, summary, published))
    }
}

/// Parse a raw Atom document into paper records.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] if the document is not well-formed and
/// [`FeedError::MissingField`] if an entry lacks `title`, `summary` or
/// `published`. No partial record list is produced on failure.
pub fn parse_feed(xml: &str) -> Result<Vec<Paper>, FeedError> {
    let mut reader = Reader::from_str(xml);

    let mut papers = Vec::new();
    let mut entry: Option<EntryFields> = None;
    let mut current: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if e.name().as_ref() == b"entry" {
                    entry = Some(EntryFields::default());
                    current = None;
                } else if let Some(fields) = entry.as_mut() {
                    // Only capture fields directly inside the entry; nested
                    // elements like author/name must not leak into them.
                    if current.is_none() {
                        if let Some(field) = Field::from_tag(e.name().as_ref()) {
                            fields.slot(field).get_or_insert_with(String::new);
                            current = Some(field);
                        }
                    }
                }
            }
            Event::Empty(e) => {
                if let Some(fields) = entry.as_mut() {
                    if current.is_none() {
                        if let Some(field) = Field::from_tag(e.name().as_ref()) {
                            fields.slot(field).get_or_insert_with(String::new);
                        }
                    }
                }
            }
            Event::Text(e) => {
                if let (Some(fields), Some(field)) = (entry.as_mut(), current) {
                    let text = e.unescape().map_err(quick_xml::Error::from)?;
                    if let Some(value) = fields.slot(field).as_mut() {
                        value.push_str(&text);
                    }
                }
            }
            Event::CData(e) => {
                if let (Some(fields), Some(field)) = (entry.as_mut(), current) {
                    let inner = e.into_inner();
                    let text = String::from_utf8_lossy(&inner);
                    if let Some(value) = fields.slot(field).as_mut() {
                        value.push_str(&text);
                    }
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"entry" {
                    if let Some(fields) = entry.take() {
                        papers.push(fields.into_paper(papers.len())?);
                    }
                    current = None;
                } else if current.map(|f| f.name().as_bytes()) == Some(e.name().as_ref()) {
                    current = None;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(papers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>ArXiv Query: search_query=all:electron</title>
  <entry>
    <id>http://arxiv.org/abs/2401.00001v1</id>
    <title>First Paper</title>
    <summary>  An abstract with surrounding whitespace.  </summary>
    <published>2024-01-02T09:00:00Z</published>
    <author><name>Alice Example</name></author>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2401.00002v1</id>
    <title>Second Paper</title>
    <summary>Another abstract.</summary>
    <published>2024-01-03T09:00:00Z</published>
  </entry>
</feed>"#;

    #[test]
    fn test_parses_entries_in_document_order() {
        let papers = parse_feed(SAMPLE_FEED).unwrap();
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].title, "First Paper");
        assert_eq!(papers[1].title, "Second Paper");
        assert_eq!(papers[1].published, "2024-01-03T09:00:00Z");
    }

    #[test]
    fn test_text_is_copied_verbatim() {
        let papers = parse_feed(SAMPLE_FEED).unwrap();
        assert_eq!(papers[0].summary, "  An abstract with surrounding whitespace.  ");
    }

    #[test]
    fn test_feed_level_title_is_not_an_entry_field() {
        let papers = parse_feed(SAMPLE_FEED).unwrap();
        assert!(!papers[0].title.contains("ArXiv Query"));
    }

    #[test]
    fn test_author_name_does_not_leak_into_fields() {
        let papers = parse_feed(SAMPLE_FEED).unwrap();
        assert!(!papers[0].title.contains("Alice"));
        assert!(!papers[0].summary.contains("Alice"));
    }

    #[test]
    fn test_missing_field_propagates() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <title>No abstract here</title>
    <published>2024-01-02T09:00:00Z</published>
  </entry>
</feed>"#;
        let err = parse_feed(xml).unwrap_err();
        assert!(matches!(err, FeedError::MissingField { entry: 0, field: "summary" }));
    }

    #[test]
    fn test_malformed_xml_fails() {
        let err = parse_feed("<feed><entry><title>oops</feed>").unwrap_err();
        assert!(matches!(err, FeedError::Xml(_)));
    }

    #[test]
    fn test_empty_feed_yields_no_records() {
        let papers = parse_feed(r#"<feed xmlns="http://www.w3.org/2005/Atom"></feed>"#).unwrap();
        assert!(papers.is_empty());
    }
}
