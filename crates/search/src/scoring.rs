//! Client-side relevance scoring and ranking.
//!
//! The backend's own `search` filter is only a hint. Every fetched candidate is
//! re-scored here against the category's field table, zero scores are dropped
//! and the rest are ordered best first.

use serde::Serialize;

use crate::candidate::Candidate;
use crate::category::Category;

/// Upper bound on the number of ranked results handed to the caller.
pub const MAX_RESULTS: usize = 50;
/// Awarded once when the query appears inside any one of the blob fields.
pub const SUBSTRING_BONUS: u32 = 2;
/// Awarded per prefix-bonus field whose value starts with the query.
pub const PREFIX_BONUS: u32 = 3;

/// A candidate together with its relevance for one result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
	pub candidate: Candidate,
	pub score: u32,
}

/// Score a candidate against a query. Zero means no match.
///
/// Comparison is case-insensitive. Empty fields never earn a prefix bonus.
#[must_use]
pub fn score(candidate: &Candidate, query: &str, category: Category) -> u32 {
	let needle = query.to_lowercase();
	if needle.is_empty() {
		return 0;
	}

	let fields = category.fields();
	let blob = fields
		.blob
		.iter()
		.map(|name| candidate.field(name).to_lowercase())
		.collect::<Vec<_>>()
		.join("\n");

	let mut total = 0;
	if blob.contains(&needle) {
		total += SUBSTRING_BONUS;
	}

	for name in fields.prefix_bonus {
		let value = candidate.field(name).to_lowercase();
		if !value.is_empty() && value.starts_with(&needle) {
			total += PREFIX_BONUS;
		}
	}

	total
}

/// Score, filter, order and truncate a fetched candidate list.
///
/// The sort is stable, so candidates with equal scores keep the order the
/// backend returned them in.
#[must_use]
pub fn rank(candidates: Vec<Candidate>, query: &str, category: Category) -> Vec<ScoredCandidate> {
	let mut scored: Vec<ScoredCandidate> = candidates
		.into_iter()
		.filter_map(|candidate| {
			let score = score(&candidate, query, category);
			(score > 0).then_some(ScoredCandidate { candidate, score })
		})
		.collect();

	scored.sort_by(|a, b| b.score.cmp(&a.score));
	scored.truncate(MAX_RESULTS);
	scored
}

#[cfg(test)]
mod tests {
	use super::*;

	fn user(first: &str, last: &str) -> Candidate {
		Candidate::from_pairs([("firstName", first), ("lastName", last)])
	}

	#[test]
	fn car_model_prefix_scores_five() {
		let car = Candidate::from_pairs([
			("make", "Honda"),
			("model", "Civic"),
			("licensePlate", "ABC123"),
		]);
		assert_eq!(score(&car, "civ", Category::Cars), 5);
	}

	#[test]
	fn prefix_bonuses_stack() {
		let car = Candidate::from_pairs([("make", "Mini"), ("model", "Minor")]);
		assert_eq!(score(&car, "min", Category::Cars), 2 + 3 + 3);
	}

	#[test]
	fn query_spanning_two_fields_does_not_match() {
		let car = Candidate::from_pairs([
			("make", "Honda"),
			("model", "Civic"),
			("licensePlate", "ABC123"),
		]);
		assert_eq!(score(&car, "honda civic", Category::Cars), 0);
		assert_eq!(score(&user("John", "Smith"), "john smith", Category::Users), 0);
		assert!(rank(vec![car], "honda civic", Category::Cars).is_empty());
	}

	#[test]
	fn scoring_ignores_case() {
		let car = Candidate::from_pairs([("make", "Honda"), ("licensePlate", "ab-991")]);
		for category in Category::ALL {
			assert_eq!(
				score(&car, "ab", category),
				score(&car, "AB", category),
				"{category}"
			);
		}
		assert_eq!(score(&car, "HON", Category::Cars), 5);
	}

	#[test]
	fn work_orders_match_on_numeric_id_without_prefix_bonus() {
		let order =
			Candidate::from_value(serde_json::json!({ "workOrderId": 1042, "serviceType": "Brakes" }))
				.expect("object");
		assert_eq!(score(&order, "104", Category::WorkOrders), 2);
		assert_eq!(score(&order, "bra", Category::WorkOrders), 5);
	}

	#[test]
	fn unrelated_and_empty_queries_score_zero() {
		let car = Candidate::from_pairs([("make", "Honda")]);
		assert_eq!(score(&car, "ford", Category::Cars), 0);
		assert_eq!(score(&car, "", Category::Cars), 0);
		assert_eq!(score(&Candidate::default(), "a", Category::Users), 0);
	}

	#[test]
	fn ranking_keeps_server_order_for_ties() {
		let candidates = vec![
			Candidate::from_pairs([
				("firstName", "Bob"),
				("lastName", "Smith"),
				("username", "bjohnson"),
			]),
			user("John", "Smith"),
			user("Zed", "Zulu"),
			user("Joanna", "Doe"),
			user("Bob", "Johnson"),
		];

		let ranked = rank(candidates, "jo", Category::Users);
		let names: Vec<_> = ranked
			.iter()
			.map(|entry| (entry.candidate.display_label(Category::Users), entry.score))
			.collect();

		assert_eq!(
			names,
			vec![
				("John Smith (No title)".to_string(), 5),
				("Joanna Doe (No title)".to_string(), 5),
				("Bob Johnson (No title)".to_string(), 5),
				("Bob Smith (No title)".to_string(), 2),
			]
		);
	}

	#[test]
	fn ranking_is_bounded_and_positive() {
		let candidates = (0..120)
			.map(|i| user(&format!("Sam{i}"), if i % 2 == 0 { "Sample" } else { "X" }))
			.collect();

		let ranked = rank(candidates, "sam", Category::Users);
		assert_eq!(ranked.len(), MAX_RESULTS);
		assert!(ranked.iter().all(|entry| entry.score > 0));
		assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
		// Double-prefix matches (score 8) come first.
		assert_eq!(ranked[0].score, 8);
		assert_eq!(ranked[0].candidate.field("firstName"), "Sam0");
	}
}
