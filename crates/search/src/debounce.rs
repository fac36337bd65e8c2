//! Delay-and-coalesce primitive for values that change in bursts.
//!
//! [`Debouncer`] never reads the clock itself. Callers pass `now` into every
//! method, which lets an event loop drive it from its own tick and lets tests
//! step time explicitly.

use std::time::{Duration, Instant};

use tracing::warn;

/// Delay applied when a configured delay is invalid.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Delay between the last keystroke and the search request.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A validated debounce delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceDelay(Duration);

impl DebounceDelay {
	/// Validate a millisecond count, reporting `Err` with the fallback delay
	/// when the input is negative.
	pub fn try_from_millis(millis: i64) -> Result<Self, Self> {
		match u64::try_from(millis) {
			Ok(millis) => Ok(Self(Duration::from_millis(millis))),
			Err(_) => Err(Self(DEFAULT_DEBOUNCE)),
		}
	}

	/// Validate a millisecond count, substituting [`DEFAULT_DEBOUNCE`] for
	/// negative input.
	#[must_use]
	pub fn from_millis(millis: i64) -> Self {
		Self::try_from_millis(millis).unwrap_or_else(|fallback| {
			warn!(
				millis,
				fallback_ms = DEFAULT_DEBOUNCE.as_millis() as u64,
				"debounce delay must not be negative; using fallback"
			);
			fallback
		})
	}

	#[must_use]
	pub fn as_duration(self) -> Duration {
		self.0
	}
}

impl Default for DebounceDelay {
	fn default() -> Self {
		Self(SEARCH_DEBOUNCE)
	}
}

impl From<Duration> for DebounceDelay {
	fn from(value: Duration) -> Self {
		Self(value)
	}
}

#[derive(Debug, Clone)]
struct Pending<T> {
	value: T,
	deadline: Instant,
}

/// Stabilizes a changing value until it has been left alone for `delay`.
///
/// At most one pending value exists at a time: every [`update`](Self::update)
/// replaces the previous one and re-arms the deadline.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	stable: T,
	pending: Option<Pending<T>>,
	delay: Duration,
}

impl<T: Clone + PartialEq> Debouncer<T> {
	/// Create a debouncer whose stabilized value is `initial` straight away.
	pub fn new(initial: T, delay: impl Into<DebounceDelay>) -> Self {
		Self {
			stable: initial,
			pending: None,
			delay: delay.into().as_duration(),
		}
	}

	/// Record a new input value and restart the idle window.
	pub fn update(&mut self, value: T, now: Instant) {
		self.pending = Some(Pending {
			value,
			deadline: now + self.delay,
		});
	}

	/// Promote the pending value once its deadline has passed.
	///
	/// Returns the new stabilized value only when it differs from the previous
	/// one.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		let due = self
			.pending
			.as_ref()
			.is_some_and(|pending| now >= pending.deadline);
		if !due {
			return None;
		}
		self.promote()
	}

	/// Promote the pending value immediately, ignoring its deadline.
	pub fn flush(&mut self) -> Option<T> {
		self.promote()
	}

	/// Discard any pending value. Nothing will be emitted for it.
	pub fn cancel(&mut self) {
		self.pending = None;
	}

	/// Replace both the stabilized value and any pending one without emitting.
	pub fn reset(&mut self, value: T) {
		self.pending = None;
		self.stable = value;
	}

	/// The most recently stabilized value.
	pub fn stable(&self) -> &T {
		&self.stable
	}

	/// The value waiting for its deadline, if any.
	pub fn pending(&self) -> Option<&T> {
		self.pending.as_ref().map(|pending| &pending.value)
	}

	/// When the pending value is due.
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	fn promote(&mut self) -> Option<T> {
		let Pending { value, .. } = self.pending.take()?;
		if value == self.stable {
			return None;
		}
		self.stable = value;
		Some(self.stable.clone())
	}
}
