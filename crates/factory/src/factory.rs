//! The keyed factory table.
//!
//! # Role
//!
//! Owns the mapping from key to construction function and exposes the only
//! sanctioned operations on it: registration, construction, membership,
//! counting, and key enumeration.
//!
//! # Invariants
//!
//! - At most one constructor is bound to any key; the first registration wins
//!   and later attempts are rejected without mutating the table.
//! - Entries are never removed, so [`Factory::len`] is monotonically
//!   non-decreasing over the life of the instance.
//! - Enumeration order is sorted key order and stable between mutations.
//!
//! # Concurrency
//!
//! The table is guarded by a [`parking_lot::RwLock`]: many concurrent
//! readers, one writer, never both. Registration and lookup may interleave
//! across threads; the usual pattern is still to finish all registration
//! during startup before querying. Constructors run outside the lock.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use parking_lot::RwLock;

use crate::error::FactoryError;
use crate::policy::IndexPolicy;

/// Construction capability for one producer.
///
/// A plain function pointer: it carries no captured state, and every
/// invocation builds a fresh, uniquely-owned product instance.
pub type Constructor<P, A> = fn(A) -> Box<P>;

/// A keyed table of construction functions for products of a common type.
///
/// `P` is the product capability (typically a trait object type such as
/// `dyn Shape`), `A` the fixed constructor-argument tuple shared by every
/// producer in this table, and `K` the key type. Two factories with different
/// `(P, A)` parameterizations are entirely independent tables.
///
/// Keys default to static text compared by content; any other key type works
/// through its own `Ord` (integers, enums, structured identifiers).
pub struct Factory<P: ?Sized, A, K = &'static str> {
	label: &'static str,
	policy: IndexPolicy,
	table: RwLock<BTreeMap<K, Constructor<P, A>>>,
}

impl<P: ?Sized, A, K> Factory<P, A, K>
where
	K: Ord + Clone + fmt::Debug,
{
	/// Creates an empty factory with the default [`IndexPolicy`].
	///
	/// The label names this table in log events and error messages.
	pub fn new(label: &'static str) -> Self {
		Self::with_policy(label, IndexPolicy::default())
	}

	/// Creates an empty factory with an explicit out-of-range policy.
	pub fn with_policy(label: &'static str, policy: IndexPolicy) -> Self {
		Self {
			label,
			policy,
			table: RwLock::new(BTreeMap::new()),
		}
	}

	/// Returns the diagnostic label given at construction.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the configured out-of-range policy.
	pub fn index_policy(&self) -> IndexPolicy {
		self.policy
	}

	/// Binds `construct` to `key`.
	///
	/// If the key is vacant the entry is inserted. If a constructor is
	/// already bound, the table is left untouched and
	/// [`FactoryError::DuplicateKey`] is returned: registration commonly runs
	/// during uncoordinated startup, where a conflict needs a signal for the
	/// offending producer's author, not a crash.
	pub fn register(&self, key: K, construct: Constructor<P, A>) -> Result<(), FactoryError> {
		let mut table = self.table.write();
		match table.entry(key) {
			Entry::Vacant(slot) => {
				tracing::debug!(registry = self.label, key = ?slot.key(), "producer registered");
				slot.insert(construct);
				Ok(())
			}
			Entry::Occupied(slot) => {
				tracing::warn!(
					registry = self.label,
					key = ?slot.key(),
					"duplicate producer key rejected; existing binding kept"
				);
				Err(FactoryError::DuplicateKey {
					registry: self.label,
					key: format!("{:?}", slot.key()),
				})
			}
		}
	}

	/// Constructs a new product for `key`, passing `args` through to the
	/// bound constructor.
	///
	/// Ownership of the result transfers to the caller; the factory keeps no
	/// reference to it. Every call that finds the key builds a brand-new
	/// instance. A miss is [`FactoryError::UnknownKey`] — never a default
	/// instance.
	pub fn create<Q>(&self, key: &Q, args: A) -> Result<Box<P>, FactoryError>
	where
		K: Borrow<Q>,
		Q: Ord + fmt::Debug + ?Sized,
	{
		// Copy the fn pointer out so the constructor runs unlocked.
		let construct = self.table.read().get(key).copied();
		match construct {
			Some(construct) => Ok(construct(args)),
			None => Err(FactoryError::UnknownKey {
				registry: self.label,
				key: format!("{key:?}"),
			}),
		}
	}

	/// Returns true iff a constructor is bound to `key`. No side effects.
	pub fn contains<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		self.table.read().contains_key(key)
	}

	/// Returns the number of distinct keys registered.
	pub fn len(&self) -> usize {
		self.table.read().len()
	}

	/// Returns true if no producer has been registered yet.
	pub fn is_empty(&self) -> bool {
		self.table.read().is_empty()
	}

	/// Returns the key at `index` in sorted key order.
	///
	/// This walk is O(index) per call; iterating the whole table through
	/// repeated calls is quadratic — use [`Factory::keys`] for that. An
	/// out-of-range index follows the configured [`IndexPolicy`]: an
	/// [`FactoryError::IndexOutOfRange`] result under
	/// [`IndexPolicy::ReturnAbsent`], a panic under
	/// [`IndexPolicy::AssertFatal`].
	pub fn key_at(&self, index: usize) -> Result<K, FactoryError> {
		let table = self.table.read();
		match table.keys().nth(index) {
			Some(key) => Ok(key.clone()),
			None => match self.policy {
				IndexPolicy::ReturnAbsent => Err(FactoryError::IndexOutOfRange {
					registry: self.label,
					index,
					len: table.len(),
				}),
				IndexPolicy::AssertFatal => panic!(
					"factory {}: index {} out of range (len {})",
					self.label,
					index,
					table.len()
				),
			},
		}
	}

	/// Returns a snapshot of all registered keys in sorted order.
	///
	/// This is the linear-time enumeration; prefer it over walking indexes
	/// with [`Factory::key_at`].
	pub fn keys(&self) -> Vec<K> {
		self.table.read().keys().cloned().collect()
	}
}

impl<P: ?Sized, A, K: Ord + fmt::Debug> fmt::Debug for Factory<P, A, K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Factory")
			.field("label", &self.label)
			.field("policy", &self.policy)
			.field("len", &self.table.read().len())
			.finish_non_exhaustive()
	}
}
