//! Backend records returned by a search fetch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::category::Category;

/// A single record fetched from the backend.
///
/// The client treats records as opaque JSON objects and only reads the handful
/// of fields the scorer and the result list need. Absent fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate {
	fields: Map<String, Value>,
}

impl Candidate {
	/// Wrap an already decoded JSON object.
	#[must_use]
	pub fn new(fields: Map<String, Value>) -> Self {
		Self { fields }
	}

	/// Build a candidate from `(name, value)` string pairs.
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let fields = pairs
			.into_iter()
			.map(|(key, value)| (key.into(), Value::String(value.into())))
			.collect();
		Self { fields }
	}

	/// Interpret an arbitrary JSON value as a candidate, if it is an object.
	#[must_use]
	pub fn from_value(value: Value) -> Option<Self> {
		match value {
			Value::Object(fields) => Some(Self { fields }),
			_ => None,
		}
	}

	/// Read a field as text.
	///
	/// Strings are returned verbatim, numbers and booleans through their JSON
	/// representation. Missing, `null` and structured values read as `""`.
	#[must_use]
	pub fn field(&self, name: &str) -> String {
		match self.fields.get(name) {
			Some(Value::String(text)) => text.clone(),
			Some(Value::Number(number)) => number.to_string(),
			Some(Value::Bool(flag)) => flag.to_string(),
			_ => String::new(),
		}
	}

	/// Backend identifier (`_id`), empty when absent.
	#[must_use]
	pub fn id(&self) -> String {
		self.field("_id")
	}

	/// The raw JSON fields.
	#[must_use]
	pub fn fields(&self) -> &Map<String, Value> {
		&self.fields
	}

	/// One-line description used by the result list.
	#[must_use]
	pub fn display_label(&self, category: Category) -> String {
		match category {
			Category::WorkOrders => format!(
				"#{} - {}",
				self.field("workOrderId"),
				self.field("serviceType")
			),
			Category::Cars => format!(
				"{} {} ({})",
				self.field("make"),
				self.field("model"),
				self.field("licensePlate")
			),
			Category::Users => {
				let title = self.field("jobTitle");
				let title = if title.is_empty() {
					"No title".to_string()
				} else {
					title
				};
				format!(
					"{} {} ({title})",
					self.field("firstName"),
					self.field("lastName")
				)
			}
		}
	}
}
