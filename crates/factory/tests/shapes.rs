//! End-to-end producer registration scenario.
//!
//! Producers declare themselves through the macros, the inventory collection
//! gathers them at link time, and the host assembles the shared factory once
//! through the builder before any lookup runs.

use std::sync::LazyLock;

use fabrica_factory::{Factory, FactoryBuilder, FactoryError, producer, producer_collection};

trait Shape: std::fmt::Debug {
	fn kind(&self) -> &'static str;
	fn area(&self) -> f64;
}

#[derive(Debug)]
struct Circle {
	radius: f64,
}

impl Shape for Circle {
	fn kind(&self) -> &'static str {
		"circle"
	}

	fn area(&self) -> f64 {
		std::f64::consts::PI * self.radius * self.radius
	}
}

#[derive(Debug)]
struct Square {
	side: f64,
}

impl Shape for Square {
	fn kind(&self) -> &'static str {
		"square"
	}

	fn area(&self) -> f64 {
		self.side * self.side
	}
}

producer_collection!(struct ShapeReg: dyn Shape, args: (f64,));

producer!(ShapeReg<dyn Shape, (f64,)>, circle, {
	key: "circle",
	construct: |(radius,): (f64,)| Box::new(Circle { radius }),
});

producer!(ShapeReg<dyn Shape, (f64,)>, square, {
	key: "square",
	construct: |(side,): (f64,)| Box::new(Square { side }),
});

static SHAPES: LazyLock<Factory<dyn Shape, (f64,)>> =
	LazyLock::new(|| FactoryBuilder::new("shapes").extend_inventory::<ShapeReg>().build());

/// Both declared producers end up registered, and keys come back sorted.
#[test]
fn test_collection_registers_all_producers() {
	assert_eq!(SHAPES.len(), 2);
	assert_eq!(SHAPES.keys(), ["circle", "square"]);
	assert!(SHAPES.contains("circle"));
	assert!(SHAPES.contains("square"));
}

/// Lookup by key constructs the right concrete type with the given args.
#[test]
fn test_create_dispatches_to_concrete_type() {
	let circle = SHAPES.create("circle", (2.0,)).expect("circle is registered");
	assert_eq!(circle.kind(), "circle");
	assert!((circle.area() - std::f64::consts::PI * 4.0).abs() < 1e-9);

	let square = SHAPES.create("square", (3.0,)).expect("square is registered");
	assert_eq!(square.kind(), "square");
	assert_eq!(square.area(), 9.0);
}

/// An unregistered key is an explicit absent result, never a default shape.
#[test]
fn test_unknown_key_is_absent() {
	let err = SHAPES.create("triangle", (1.0,)).unwrap_err();
	assert!(matches!(err, FactoryError::UnknownKey { .. }));
}

/// Re-claiming an occupied key is rejected and changes nothing.
#[test]
fn test_late_duplicate_is_rejected() {
	let err = SHAPES
		.register("circle", |(side,): (f64,)| Box::new(Square { side }))
		.expect_err("circle is already claimed");
	assert!(matches!(err, FactoryError::DuplicateKey { .. }));

	assert_eq!(SHAPES.len(), 2);
	let still_circle = SHAPES.create("circle", (1.0,)).unwrap();
	assert_eq!(still_circle.kind(), "circle");
}

/// A factory can also be assembled by hand, without the inventory path.
#[test]
fn test_manual_assembly_without_inventory() {
	use fabrica_factory::ProducerDef;

	static UNIT_SQUARE: ProducerDef<dyn Shape, ()> =
		ProducerDef::new("unit-square", "shapes-test", |()| Box::new(Square { side: 1.0 }));

	let mut builder: FactoryBuilder<dyn Shape, ()> = FactoryBuilder::new("unit-shapes");
	builder.push(&UNIT_SQUARE);
	let factory = builder.build();

	assert_eq!(factory.len(), 1);
	assert_eq!(factory.create("unit-square", ()).unwrap().area(), 1.0);
}
