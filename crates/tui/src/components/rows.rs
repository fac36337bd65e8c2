use lineops_search::{Category, ScoredCandidate};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

/// Locate the first case-insensitive occurrence of `needle` in `text`.
///
/// Returns a byte range into `text` on char boundaries.
#[must_use]
pub fn match_range(text: &str, needle: &str) -> Option<(usize, usize)> {
	let needle = needle.trim().to_lowercase();
	if needle.is_empty() || text.is_empty() {
		return None;
	}
	let needle_chars = needle.chars().count();

	text.char_indices().find_map(|(start, _)| {
		let rest = &text[start..];
		if !rest.to_lowercase().starts_with(&needle) {
			return None;
		}
		let end = rest
			.char_indices()
			.nth(needle_chars)
			.map_or(text.len(), |(offset, _)| start + offset);
		Some((start, end))
	})
}

/// A label cell with the matched part of the query emphasised.
#[must_use]
pub fn highlight_cell(label: String, query: &str, highlight: Style) -> Cell<'static> {
	let Some((start, end)) = match_range(&label, query) else {
		return Cell::from(label);
	};
	let line = Line::from(vec![
		Span::raw(label[..start].to_string()),
		Span::styled(label[start..end].to_string(), highlight),
		Span::raw(label[end..].to_string()),
	]);
	Cell::from(line)
}

/// Build one table row per ranked result: label, then score.
#[must_use]
pub fn build_result_rows(
	results: &[ScoredCandidate],
	category: Category,
	query: &str,
	highlight: Style,
) -> Vec<Row<'static>> {
	results
		.iter()
		.map(|result| {
			Row::new([
				highlight_cell(result.candidate.display_label(category), query, highlight),
				Cell::from(result.score.to_string()),
			])
		})
		.collect()
}
