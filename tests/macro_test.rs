//! `#[derive(Shape)]` and `#[shape_fn]` on the less common shapes

use std::fmt;
use std::fmt::Write as _;

use tola_erase::prelude::*;
use tola_erase::Profile;
use tola_erase::dispatch::{Absent, Member};

// =============================================================================
// Enums and sink operations
// =============================================================================

#[derive(Clone, Shape)]
enum Token {
    Word(&'static str),
    Number(i32),
}

impl Format for Token {
    fn format(&self) -> String {
        match self {
            Token::Word(word) => word.to_string(),
            Token::Number(n) => n.to_string(),
        }
    }
}

#[shape_fn]
fn serialize(token: &Token, out: &mut dyn fmt::Write) -> fmt::Result {
    match token {
        Token::Word(word) => write!(out, "w:{};", word),
        Token::Number(n) => write!(out, "n:{};", n),
    }
}

#[shape_fn(draw)]
fn draw_token(_token: &Token, out: &mut dyn fmt::Write) -> fmt::Result {
    out.write_str("<token>")
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token")
    }
}

#[test]
fn test_enum_with_free_sinks() {
    let tokens = [ShapeBox::new(Token::Word("hi")), ShapeBox::new(Token::Number(3))];

    let mut out = String::new();
    for token in &tokens {
        token.serialize(&mut out).unwrap();
        token.draw(&mut out).unwrap();
    }
    assert_eq!(out, "w:hi;<token>n:3;<token>");
    assert_eq!(tokens[1].format(), "3");
    assert_eq!(tokens[0].strategies().serialize, Via::Free);
    assert_eq!(tokens[0].strategies().draw, Via::Free);
}

// =============================================================================
// Tuple base
// =============================================================================

#[derive(Clone, Shape)]
struct Bat(u8, #[shape(base)] ShapeBase);

impl Draw for Bat {
    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "bat#{}", self.0)
    }
}

impl fmt::Display for Bat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bat")
    }
}

#[test]
fn test_tuple_base_field() {
    let bat = Bat(7, ShapeBase::new(3, 1));
    assert_eq!(bat.shape_base(), &ShapeBase::new(3, 1));

    let shape = ShapeBox::new(bat);
    assert_eq!(shape.format(), "[X:3|Y:1]\n");

    let mut out = String::new();
    shape.draw(&mut out).unwrap();
    shape.serialize(&mut out).unwrap();
    assert_eq!(out, "bat#7BaseObject\n");
}

// =============================================================================
// Hand-written profile for a generic type
// =============================================================================

#[derive(Clone)]
struct Tagged<T> {
    tag: T,
}

impl<T: fmt::Display> Format for Tagged<T> {
    fn format(&self) -> String {
        let mut out = String::from("#");
        write!(out, "{}", self.tag).unwrap();
        out
    }
}

impl<T: fmt::Display> fmt::Display for Tagged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tagged({})", self.tag)
    }
}

impl<T: fmt::Display + Clone + 'static> Shape for Tagged<T> {
    fn profile() -> Profile<Self> {
        Profile::bind(Member, Absent, Absent, Absent)
    }
}

#[test]
fn test_generic_shape_with_bound_profile() {
    let shapes = [ShapeBox::new(Tagged { tag: 1 }), ShapeBox::new(Tagged { tag: "one" })];
    assert_eq!(shapes[0].format(), "#1");
    assert_eq!(shapes[1].format(), "#one");
    assert!(shapes[0].is::<Tagged<i32>>());
    assert!(!shapes[1].is::<Tagged<i32>>());
    assert_eq!(shapes[1].strategies().calculate, Via::Default);
}
