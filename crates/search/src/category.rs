//! Searchable entity categories and the fields each one exposes to scoring.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three entity kinds the backend can be searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	#[default]
	#[serde(rename = "workorders")]
	WorkOrders,
	Cars,
	Users,
}

/// Field names read by the relevance scorer for a single category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryFields {
	/// Fields concatenated into the text blob used for the substring check.
	pub blob: &'static [&'static str],
	/// Fields that earn a bonus when their value starts with the query.
	pub prefix_bonus: &'static [&'static str],
}

const WORK_ORDER_FIELDS: CategoryFields = CategoryFields {
	blob: &["workOrderId", "serviceType", "department"],
	prefix_bonus: &["serviceType"],
};

const CAR_FIELDS: CategoryFields = CategoryFields {
	blob: &["make", "model", "licensePlate"],
	prefix_bonus: &["make", "model"],
};

const USER_FIELDS: CategoryFields = CategoryFields {
	blob: &["firstName", "lastName", "username"],
	prefix_bonus: &["firstName", "lastName"],
};

impl Category {
	/// Every category in display order.
	pub const ALL: [Category; 3] = [Category::WorkOrders, Category::Cars, Category::Users];

	/// Human readable label, e.g. for tabs and placeholders.
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Category::WorkOrders => "Work Orders",
			Category::Cars => "Cars",
			Category::Users => "Users",
		}
	}

	/// Path segment of the backend collection, as in `/api/{path}`.
	#[must_use]
	pub fn api_path(self) -> &'static str {
		match self {
			Category::WorkOrders => "workorders",
			Category::Cars => "cars",
			Category::Users => "users",
		}
	}

	/// Scoring fields for this category.
	#[must_use]
	pub fn fields(self) -> &'static CategoryFields {
		match self {
			Category::WorkOrders => &WORK_ORDER_FIELDS,
			Category::Cars => &CAR_FIELDS,
			Category::Users => &USER_FIELDS,
		}
	}

	/// Position of the category in [`Category::ALL`].
	#[must_use]
	pub fn index(self) -> usize {
		Self::ALL
			.iter()
			.position(|category| *category == self)
			.unwrap_or_default()
	}

	/// The category after this one, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.index() + 1) % Self::ALL.len()]
	}

	/// The category before this one, wrapping around.
	#[must_use]
	pub fn previous(self) -> Self {
		let len = Self::ALL.len();
		Self::ALL[(self.index() + len - 1) % len]
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.api_path())
	}
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}` (expected one of: workorders, cars, users)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
	type Err = UnknownCategory;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let key: String = value
			.trim()
			.to_ascii_lowercase()
			.chars()
			.filter(|ch| !matches!(ch, '-' | '_' | ' '))
			.collect();
		match key.as_str() {
			"workorders" | "workorder" | "wo" => Ok(Category::WorkOrders),
			"cars" | "car" => Ok(Category::Cars),
			"users" | "user" => Ok(Category::Users),
			_ => Err(UnknownCategory(value.to_string())),
		}
	}
}
