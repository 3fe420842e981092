//! Explicit startup assembly for producer-registered factories.
//!
//! # Role
//!
//! The builder is the auditable registration routine: the host constructs it
//! once, pulls in producer definitions (directly or from the `inventory`
//! collection), and [`FactoryBuilder::build`] performs every `register` call
//! before the factory is handed out for lookups.

use crate::factory::Factory;
use crate::policy::IndexPolicy;
use crate::producer::{ProducerDef, ProducerReg};

/// Collects producer definitions and builds a [`Factory`] from them.
pub struct FactoryBuilder<P: ?Sized + 'static, A: 'static> {
	label: &'static str,
	policy: IndexPolicy,
	defs: Vec<&'static ProducerDef<P, A>>,
}

impl<P: ?Sized + 'static, A: 'static> FactoryBuilder<P, A> {
	/// Creates a new builder with the given label for log and error messages.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			policy: IndexPolicy::default(),
			defs: Vec::new(),
		}
	}

	/// Sets the out-of-range policy for the built factory.
	pub fn index_policy(mut self, policy: IndexPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Returns the number of definitions collected so far.
	pub fn len(&self) -> usize {
		self.defs.len()
	}

	/// Returns true if no definitions have been collected so far.
	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Adds a single producer definition.
	pub fn push(&mut self, def: &'static ProducerDef<P, A>) {
		self.defs.push(def);
	}

	/// Adds multiple producer definitions.
	pub fn extend<I: IntoIterator<Item = &'static ProducerDef<P, A>>>(&mut self, defs: I) {
		self.defs.extend(defs);
	}

	/// Pulls in every definition submitted to `R`'s inventory collection.
	///
	/// Link-order across crates is arbitrary, so the collected batch is
	/// sorted by key then defining crate to make the first-wins outcome of
	/// any duplicate deterministic per build.
	pub fn extend_inventory<R>(mut self) -> Self
	where
		R: ProducerReg<P, A> + inventory::Collect,
	{
		let mut batch: Vec<&'static ProducerDef<P, A>> =
			inventory::iter::<R>.into_iter().map(|reg| reg.def()).collect();
		batch.sort_by(|a, b| a.key.cmp(b.key).then_with(|| a.crate_name.cmp(b.crate_name)));
		self.defs.extend(batch);
		self
	}

	/// Registers every collected definition and returns the factory.
	///
	/// Duplicate keys keep the earliest binding; each rejection is logged by
	/// [`Factory::register`] and counted here.
	pub fn build(self) -> Factory<P, A> {
		let factory = Factory::with_policy(self.label, self.policy);
		let mut dropped = 0usize;
		for def in &self.defs {
			if factory.register(def.key, def.construct).is_err() {
				dropped += 1;
			}
		}
		tracing::debug!(
			registry = self.label,
			registered = factory.len(),
			dropped,
			"factory built"
		);
		factory
	}
}
