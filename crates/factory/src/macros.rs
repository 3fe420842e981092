//! Registration macros for producers.

/// Declares the `inventory` collection for one `(product, args)` pairing.
///
/// Expands to a wrapper type around `&'static ProducerDef`, the
/// `inventory::collect!` linkage, and the [`ProducerReg`](crate::ProducerReg)
/// impl that [`FactoryBuilder::extend_inventory`](crate::FactoryBuilder::extend_inventory)
/// needs.
///
/// ```ignore
/// producer_collection!(pub struct ShapeReg: dyn Shape, args: (f64,));
/// ```
#[macro_export]
macro_rules! producer_collection {
	($vis:vis struct $reg:ident: $product:ty, args: $args:ty $(,)?) => {
		$vis struct $reg(pub &'static $crate::ProducerDef<$product, $args>);

		inventory::collect!($reg);

		impl $crate::ProducerReg<$product, $args> for $reg {
			fn def(&self) -> &'static $crate::ProducerDef<$product, $args> {
				self.0
			}
		}
	};
}

/// Declares a producer and submits it to its collection.
///
/// Creates a static [`ProducerDef`](crate::ProducerDef) holding the key and
/// constructor, then links it into the collection declared by
/// [`producer_collection!`]. The defining crate is recorded for collision
/// diagnostics. Registration itself still happens explicitly, when the host
/// builds the factory.
///
/// ```ignore
/// producer!(ShapeReg<dyn Shape, (f64,)>, circle, {
/// 	key: "circle",
/// 	construct: |(radius,): (f64,)| Box::new(Circle { radius }),
/// });
/// ```
#[macro_export]
macro_rules! producer {
	($reg:ident<$product:ty, $args:ty>, $name:ident, {
		key: $key:expr,
		construct: $construct:expr $(,)?
	}) => {
		paste::paste! {
			#[allow(non_upper_case_globals)]
			static [<PRODUCER_ $name>]: $crate::ProducerDef<$product, $args> =
				$crate::ProducerDef {
					key: $key,
					crate_name: env!("CARGO_PKG_NAME"),
					construct: $construct,
				};

			inventory::submit!($reg(&[<PRODUCER_ $name>]));
		}
	};
}
