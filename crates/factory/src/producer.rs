//! Producer self-registration via `inventory`.
//!
//! A producer contributes exactly one table entry: a key plus a constructor
//! for its own concrete type, widened to the product capability. Each
//! `producer!` invocation creates a static [`ProducerDef`] and submits it via
//! `inventory::submit!`; at startup the host collects all submitted
//! definitions through [`FactoryBuilder`](crate::FactoryBuilder) and performs
//! the actual registration deliberately, before any lookup occurs. Nothing
//! relies on static-initialization side effects running implicitly.

use std::fmt;

use crate::factory::Constructor;

/// Static registration entry contributed by one producer.
pub struct ProducerDef<P: ?Sized + 'static, A: 'static> {
	/// Unique key this producer claims within its factory.
	pub key: &'static str,
	/// Crate that defined this producer, for collision diagnostics.
	pub crate_name: &'static str,
	/// Constructor for the producer's concrete type.
	pub construct: Constructor<P, A>,
}

impl<P: ?Sized + 'static, A: 'static> ProducerDef<P, A> {
	/// Creates a new producer definition.
	pub const fn new(
		key: &'static str,
		crate_name: &'static str,
		construct: Constructor<P, A>,
	) -> Self {
		Self {
			key,
			crate_name,
			construct,
		}
	}
}

impl<P: ?Sized + 'static, A: 'static> fmt::Debug for ProducerDef<P, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProducerDef")
			.field("key", &self.key)
			.field("crate_name", &self.crate_name)
			.finish_non_exhaustive()
	}
}

/// Adapter implemented by the wrapper type `inventory::collect!` requires.
///
/// One wrapper type exists per `(product, args)` pairing, declared by
/// [`producer_collection!`](crate::producer_collection); keeping the wrapper
/// distinct is what keeps the per-pairing collections independent.
pub trait ProducerReg<P: ?Sized + 'static, A: 'static>: 'static {
	/// Returns the wrapped producer definition.
	fn def(&self) -> &'static ProducerDef<P, A>;
}
