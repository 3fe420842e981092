//! Keyed object factory with link-time producer registration.
//!
//! # Purpose
//!
//! Independently-compiled producer types register a constructor under a
//! unique key; calling code later builds an instance of the right concrete
//! type given only the key and the constructor arguments, without ever naming
//! the concrete type. One [`Factory`] exists per `(product, args, key)`
//! parameterization — there is no global table.
//!
//! # Mental Model
//!
//! 1. **Declaration:** each producer declares a [`ProducerDef`] (key +
//!    constructor) via the [`producer!`] macro, which links it into an
//!    `inventory` collection declared by [`producer_collection!`].
//! 2. **Assembly:** at startup the host builds the factory once through
//!    [`FactoryBuilder`], which registers every collected definition before
//!    any lookup can occur. No static-initialization ordering is relied on.
//! 3. **Consumption:** callers invoke [`Factory::create`] with a key and the
//!    fixed argument tuple and receive a fresh, uniquely-owned product.
//!
//! Factories can also be populated entirely by hand with
//! [`Factory::register`] — the inventory path is a convenience, not a
//! requirement — and keys need not be text: any `Ord` type works.
//!
//! # Example
//!
//! ```
//! use fabrica_factory::Factory;
//!
//! trait Greeter {
//! 	fn greet(&self) -> String;
//! }
//!
//! struct English;
//! impl Greeter for English {
//! 	fn greet(&self) -> String {
//! 		"hello".to_string()
//! 	}
//! }
//!
//! let greeters: Factory<dyn Greeter, ()> = Factory::new("greeters");
//! greeters.register("en", |()| Box::new(English)).unwrap();
//!
//! let g = greeters.create("en", ()).unwrap();
//! assert_eq!(g.greet(), "hello");
//! assert!(greeters.create("fr", ()).is_err());
//! ```

// Referenced only from `producer!` macro expansions.
use paste as _;

mod builder;
mod error;
mod factory;
mod macros;
mod policy;
mod producer;

pub use builder::FactoryBuilder;
pub use error::FactoryError;
pub use factory::{Constructor, Factory};
pub use policy::IndexPolicy;
pub use producer::{ProducerDef, ProducerReg};
