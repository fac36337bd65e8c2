use lineops_search::{Category, Selection};
use serde::Serialize;

/// How the interactive search ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
	/// `false` when the user cancelled.
	pub accepted: bool,
	/// Query text at the moment the screen closed.
	pub query: String,
	/// Category that was active when the screen closed.
	pub category: Category,
	pub selection: Option<Selection>,
}

impl SearchOutcome {
	pub(crate) fn cancelled(query: impl Into<String>, category: Category) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			category,
			selection: None,
		}
	}

	pub(crate) fn accepted(
		query: impl Into<String>,
		category: Category,
		selection: Option<Selection>,
	) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			category,
			selection,
		}
	}
}
