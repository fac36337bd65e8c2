use lineops_search::Category;

/// Text rendered around the prompt and the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title in front of the query input.
	pub prompt_title: String,
	/// Title of the bordered results table.
	pub results_title: String,
	/// Shown in the table when a query produced no matches.
	pub no_results: String,
	/// Key hints on the status line while there is no error to show.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			prompt_title: "Search".to_string(),
			results_title: "Results".to_string(),
			no_results: "No results".to_string(),
			hint: "Tab switch category | Enter select | Ctrl-R retry | Esc cancel".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the prompt title, ignoring blank values.
	#[must_use]
	pub fn with_prompt_title(mut self, title: impl Into<String>) -> Self {
		let title = title.into();
		if !title.trim().is_empty() {
			self.prompt_title = title;
		}
		self
	}

	/// Placeholder shown in the empty query input.
	#[must_use]
	pub fn placeholder(&self, category: Category) -> String {
		format!("Search {}...", category.label().to_lowercase())
	}

	/// Results table title with the match count.
	#[must_use]
	pub fn results_title_with_count(&self, count: usize) -> String {
		format!(" {} ({count}) ", self.results_title)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_prompt_title_keeps_default() {
		let labels = UiLabels::default().with_prompt_title("   ");
		assert_eq!(labels.prompt_title, "Search");
		let labels = labels.with_prompt_title("Shop");
		assert_eq!(labels.prompt_title, "Shop");
	}

	#[test]
	fn placeholder_names_the_category() {
		let labels = UiLabels::default();
		assert_eq!(labels.placeholder(Category::WorkOrders), "Search work orders...");
		assert_eq!(labels.results_title_with_count(3), " Results (3) ");
	}
}
