//! Owning handle: copies, moves, and type recovery

use std::any::TypeId;
use std::fmt;

use tola_erase::prelude::*;
use tola_erase::TypeMismatch;

#[derive(Clone, Debug, PartialEq, Shape)]
struct Square {
    width: i32,
}

impl Format for Square {
    fn format(&self) -> String {
        format!("square {}", self.width)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(width = {})", self.width)
    }
}

#[derive(Clone, Debug, PartialEq, Shape)]
struct Animal {
    name: String,
}

impl Format for Animal {
    fn format(&self) -> String {
        format!("animal {}", self.name)
    }
}

impl Calculate for Animal {
    fn calculate(&self) -> i32 {
        self.name.len() as i32
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Animal({})", self.name)
    }
}

#[test]
fn test_copy_does_not_alias() {
    let mut original = ShapeBox::new(Square { width: 2 });
    let copy = original.clone();

    original.downcast_mut::<Square>().unwrap().width = 9;

    assert_eq!(original.format(), "square 9");
    assert_eq!(copy.format(), "square 2");
    assert_eq!(copy.downcast_ref::<Square>(), Some(&Square { width: 2 }));
}

#[test]
fn test_move_keeps_value() {
    let shape = ShapeBox::new(Animal { name: String::from("rex") });
    let moved = shape;
    assert_eq!(moved.format(), "animal rex");
    assert_eq!(moved.calculate(), 3);
}

#[test]
fn test_type_recovery_over_mixed_list() {
    let shapes = vec![
        ShapeBox::new(Square { width: 1 }),
        ShapeBox::new(Animal { name: String::from("cat") }),
        ShapeBox::new(Square { width: 3 }),
        ShapeBox::new(Animal { name: String::from("dog") }),
    ];

    let animals: Vec<&Animal> = shapes.iter().filter_map(|s| s.downcast_ref::<Animal>()).collect();
    assert_eq!(animals.len(), 2);
    assert_eq!(animals[0].name, "cat");
    assert_eq!(animals[1].name, "dog");

    assert_eq!(shapes.iter().filter(|s| s.is::<Square>()).count(), 2);
    assert_eq!(shapes[0].type_id(), TypeId::of::<Square>());
    assert!(shapes[1].type_name().ends_with("Animal"));
}

#[test]
fn test_try_as_reports_both_types() {
    let shape = ShapeBox::new(Square { width: 4 });
    assert_eq!(shape.try_as::<Square>().map(|s| s.width), Ok(4));

    let err: TypeMismatch = shape.try_as::<Animal>().unwrap_err();
    assert!(err.expected.ends_with("Animal"));
    assert!(err.found.ends_with("Square"));

    let message = err.to_string();
    assert!(message.contains("Animal") && message.contains("Square"), "{}", message);
}

#[test]
fn test_try_as_mut_then_observe() {
    let mut shape = ShapeBox::new(Animal { name: String::from("a") });
    shape.try_as_mut::<Animal>().unwrap().name.push('b');
    assert_eq!(shape.format(), "animal ab");
    assert!(shape.try_as_mut::<Square>().is_err());
}

#[test]
fn test_print_and_display() {
    let shape = ShapeBox::new(Square { width: 5 });
    let mut out = String::new();
    shape.print(&mut out).unwrap();
    assert_eq!(out, "Square(width = 5)");
    assert_eq!(format!("{}", shape), out);
    assert!(format!("{:?}", shape).contains("Square"));
}

#[test]
fn test_wrong_downcast_is_none() {
    let mut shape = ShapeBox::new(Square { width: 1 });
    assert!(shape.downcast_ref::<Animal>().is_none());
    assert!(shape.downcast_mut::<Animal>().is_none());
    assert!(!shape.is::<Animal>());
}
