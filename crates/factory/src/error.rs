//! Factory error taxonomy.
//!
//! Every failure state is an ordinary return value. Registration conflicts in
//! particular must never abort unrelated startup code, so they surface as
//! [`FactoryError::DuplicateKey`] rather than a panic.

/// Errors reported by factory operations.
///
/// Keys are rendered with their `Debug` form when the error is built, which
/// keeps this type non-generic over the factory's key parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
	/// A constructor is already bound to this key; the existing binding wins.
	#[error("factory {registry}: key {key} is already registered")]
	DuplicateKey {
		/// Label of the factory that rejected the registration.
		registry: &'static str,
		/// The conflicting key, `Debug`-rendered.
		key: String,
	},

	/// No constructor is bound to the requested key.
	#[error("factory {registry}: no producer registered for key {key}")]
	UnknownKey {
		/// Label of the factory that was queried.
		registry: &'static str,
		/// The missing key, `Debug`-rendered.
		key: String,
	},

	/// An index-based key query fell outside the table.
	#[error("factory {registry}: index {index} out of range (len {len})")]
	IndexOutOfRange {
		/// Label of the factory that was queried.
		registry: &'static str,
		/// The requested zero-based index.
		index: usize,
		/// Number of keys registered at the time of the query.
		len: usize,
	},
}

impl FactoryError {
	/// Returns the label of the factory that produced this error.
	pub fn registry(&self) -> &'static str {
		match self {
			Self::DuplicateKey { registry, .. }
			| Self::UnknownKey { registry, .. }
			| Self::IndexOutOfRange { registry, .. } => registry,
		}
	}
}
