use super::builtins::registrations;
use super::types::Theme;

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registrations()
		.iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
}

/// Names of every built-in theme, in load order.
#[must_use]
pub fn names() -> Vec<String> {
	registrations()
		.iter()
		.map(|registration| registration.name.clone())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_accepts_aliases_and_any_case() {
		assert!(by_name("SLATE").is_some());
		assert_eq!(by_name("dark"), by_name("slate"));
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn names_list_every_bundled_theme() {
		let names = names();
		for expected in ["mono", "slate", "solarized"] {
			assert!(names.iter().any(|name| name == expected), "{expected} missing");
		}
	}
}
