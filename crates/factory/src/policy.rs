//! Out-of-range policy for index-based key queries.

/// Behavior of [`Factory::key_at`](crate::Factory::key_at) when the index is
/// past the end of the table.
///
/// Resource-constrained deployments sometimes prefer a hard stop over
/// undefined continuation, so the fatal variant is a per-instance choice
/// rather than a build flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexPolicy {
	/// Out-of-range yields [`FactoryError::IndexOutOfRange`](crate::FactoryError::IndexOutOfRange).
	#[default]
	ReturnAbsent,
	/// Out-of-range panics with a labeled assertion message.
	AssertFatal,
}
