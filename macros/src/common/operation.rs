//! The four dispatched operations, as seen by the macros.

use proc_macro2::Span;
use syn::Ident;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Format,
    Calculate,
    Serialize,
    Draw,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Format,
        Operation::Calculate,
        Operation::Serialize,
        Operation::Draw,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Format => "format",
            Operation::Calculate => "calculate",
            Operation::Serialize => "serialize",
            Operation::Draw => "draw",
        }
    }

    /// `FreeFormat`, `FreeCalculate`, ...
    pub fn free_trait(self, span: Span) -> Ident {
        let name = self.name();
        let mut camel = String::with_capacity(name.len());
        camel.push_str(&name[..1].to_ascii_uppercase());
        camel.push_str(&name[1..]);
        Ident::new(&format!("Free{}", camel), span)
    }

    /// `free_format`, `free_calculate`, ...
    pub fn free_method(self, span: Span) -> Ident {
        Ident::new(&format!("free_{}", self.name()), span)
    }

    /// Sink operations take an extra `&mut dyn fmt::Write`.
    pub fn is_sink(self) -> bool {
        matches!(self, Operation::Serialize | Operation::Draw)
    }

    pub fn arity(self) -> usize {
        if self.is_sink() { 2 } else { 1 }
    }

    /// Last path segment of the expected return type.
    pub fn returns(self) -> &'static str {
        match self {
            Operation::Format => "String",
            Operation::Calculate => "i32",
            Operation::Serialize | Operation::Draw => "Result",
        }
    }

    /// Return type as written in error messages.
    pub fn returns_display(self) -> &'static str {
        match self {
            Operation::Format => "`String`",
            Operation::Calculate => "`i32`",
            Operation::Serialize | Operation::Draw => "`fmt::Result`",
        }
    }

    /// Human-readable list for error messages.
    pub fn expected_list() -> String {
        Self::ALL
            .iter()
            .map(|op| format!("`{}`", op.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
