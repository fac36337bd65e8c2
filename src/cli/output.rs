use anyhow::Result;
use lineops_search::{Candidate, Category, ScoredCandidate};
use lineops_tui::SearchOutcome;
use serde_json::{Value, json};

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(selection) => println!("{}", selection.candidate.display_label(selection.category)),
		None => println!("No selection"),
	}
}

fn candidate_json(candidate: &Candidate, category: Category) -> Value {
	json!({
		"id": candidate.id(),
		"label": candidate.display_label(category),
		"fields": candidate.fields(),
	})
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(selection) => candidate_json(&selection.candidate, selection.category),
		None => Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"category": outcome.category.api_path(),
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// One line per result: score, then label.
pub(crate) fn format_ranked_plain(results: &[ScoredCandidate], category: Category) -> String {
	if results.is_empty() {
		return "No results".to_string();
	}
	results
		.iter()
		.map(|entry| format!("{:>3}  {}", entry.score, entry.candidate.display_label(category)))
		.collect::<Vec<_>>()
		.join("\n")
}

pub(crate) fn format_ranked_json(
	results: &[ScoredCandidate],
	query: &str,
	category: Category,
) -> Result<String> {
	let entries = results
		.iter()
		.map(|entry| {
			let mut value = candidate_json(&entry.candidate, category);
			value["score"] = json!(entry.score);
			value
		})
		.collect::<Vec<_>>();

	let payload = json!({
		"query": query,
		"category": category.api_path(),
		"results": entries,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
	use lineops_search::{Selection, rank};

	use super::*;

	fn civic() -> Candidate {
		Candidate::from_pairs([
			("_id", "car-1"),
			("make", "Honda"),
			("model", "Civic"),
			("licensePlate", "ABC123"),
		])
	}

	#[test]
	fn json_format_includes_the_selection() {
		let outcome = SearchOutcome {
			accepted: true,
			query: "civ".into(),
			category: Category::Cars,
			selection: Some(Selection {
				candidate: civic(),
				category: Category::Cars,
			}),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["category"], "cars");
		assert_eq!(value["selection"]["label"], "Honda Civic (ABC123)");
		assert_eq!(value["selection"]["fields"]["make"], "Honda");
	}

	#[test]
	fn cancelled_outcome_has_null_selection() {
		let outcome = SearchOutcome {
			accepted: false,
			query: "x".into(),
			category: Category::Users,
			selection: None,
		};

		let value: Value = serde_json::from_str(&format_outcome_json(&outcome).unwrap()).unwrap();
		assert!(value["selection"].is_null());
		assert_eq!(value["category"], "users");
	}

	#[test]
	fn ranked_results_print_score_and_label() {
		let results = rank(vec![civic()], "civ", Category::Cars);
		assert_eq!(
			format_ranked_plain(&results, Category::Cars),
			"  5  Honda Civic (ABC123)"
		);
		assert_eq!(format_ranked_plain(&[], Category::Cars), "No results");

		let value: Value =
			serde_json::from_str(&format_ranked_json(&results, "civ", Category::Cars).unwrap())
				.unwrap();
		assert_eq!(value["results"][0]["score"], 5);
		assert_eq!(value["results"][0]["id"], "car-1");
	}
}
