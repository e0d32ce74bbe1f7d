//! Runtime errors.
//!
//! Strategy resolution fails at compile time; the only runtime failure is
//! asking a handle for the wrong concrete type.

/// A checked downcast named a type the handle does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("shape holds `{found}`, not `{expected}`")]
pub struct TypeMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_message_names_both_types() {
        let err = TypeMismatch { expected: "Circle", found: "Square" };
        assert_eq!(err.to_string(), "shape holds `Square`, not `Circle`");
    }
}
