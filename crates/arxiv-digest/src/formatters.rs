//! Read-only display rendering for the interactive surface.
//!
//! Labels follow the original Japanese UI wording.

use crate::models::{Paper, StructuredSummary};

/// Format the current result set as numbered blocks.
#[must_use]
pub fn format_papers(papers: &[Paper]) -> String {
    if papers.is_empty() {
        return "該当する論文が見つかりませんでした。\n".to_string();
    }

    let mut output = String::from("検索結果\n\n");
    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper(paper, i + 1));
        output.push_str("---\n");
    }
    output
}

/// Format one record with its one-based display number.
///
/// An attached structured summary is rendered beneath the record, so a
/// redisplay shows everything computed so far.
#[must_use]
pub fn format_paper(paper: &Paper, number: usize) -> String {
    let mut output = format!("論文 {number}\n");
    output.push_str(&format!("タイトル: {}\n", paper.title));
    output.push_str(&format!("投稿日時: {}\n", paper.published));
    output.push_str(&format!("要約: {}\n", paper.summary));

    if let Some(summary) = paper.cached_summary() {
        output.push('\n');
        output.push_str(&format_structured_summary(summary));
    }
    output
}

/// Format the four summary fields with their question labels.
#[must_use]
pub fn format_structured_summary(summary: &StructuredSummary) -> String {
    format!(
        "この研究を一言で表すと: {}\n\
         既存研究の問題点や課題は？: {}\n\
         この研究ではどのようなアプローチを行ったのか？: {}\n\
         どのような結果や結論が得られたか: {}\n",
        summary.short_summary, summary.problem, summary.how, summary.result
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper() -> Paper {
        Paper::new("Attention Is All You Need", "We propose the Transformer.", "2017-06-12T00:00:00Z")
    }

    #[test]
    fn test_empty_result_set_message() {
        assert!(format_papers(&[]).contains("該当する論文が見つかりませんでした"));
    }

    #[test]
    fn test_paper_block_carries_all_three_fields() {
        let block = format_paper(&paper(), 1);
        assert!(block.contains("論文 1"));
        assert!(block.contains("タイトル: Attention Is All You Need"));
        assert!(block.contains("投稿日時: 2017-06-12T00:00:00Z"));
        assert!(block.contains("要約: We propose the Transformer."));
    }

    #[test]
    fn test_attached_summary_is_rendered() {
        let mut paper = paper();
        paper.attach_summary(StructuredSummary {
            short_summary: "注意機構のみの系列変換".to_string(),
            problem: "再帰構造が並列化を妨げる".to_string(),
            how: "自己注意のみで構成".to_string(),
            result: "翻訳で最高精度".to_string(),
        });

        let block = format_paper(&paper, 2);
        assert!(block.contains("この研究を一言で表すと: 注意機構のみの系列変換"));
        assert!(block.contains("どのような結果や結論が得られたか: 翻訳で最高精度"));
    }

    #[test]
    fn test_papers_are_numbered_in_order() {
        let papers = vec![paper(), paper()];
        let output = format_papers(&papers);
        let first = output.find("論文 1").unwrap();
        let second = output.find("論文 2").unwrap();
        assert!(first < second);
    }
}
