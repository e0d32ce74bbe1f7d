//! Boolean answers to "does `T` provide surface S", usable in `const`.
//!
//! Every surface gets a fallback trait whose associated const is `false`,
//! implemented for all `Detect<T>`, plus an inherent const `true` on
//! `Detect<T>` bounded by the surface trait. Path resolution prefers the
//! inherent const when its bound holds:
//!
//! ```text
//! Detect::<Square>::MEMBER_FORMAT
//!   Square: Format  -> inherent const  (true)
//!   otherwise       -> FormatFallback  (false)
//! ```
//!
//! The answer is fixed where the path is written, so a generic `T` always
//! sees the fallback.

use core::marker::PhantomData;

use crate::capability::{
    Calculate, Draw, Extends, Format, FreeCalculate, FreeDraw, FreeFormat, FreeSerialize,
    Serialize,
};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Fallback trait plus bounded inherent const for one surface.
macro_rules! impl_detect {
    ($Trait:ident => $CONST:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const $CONST: bool = false; }
            impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
            impl<T: ?Sized + $Trait> Detect<T> { pub const $CONST: bool = true; }
        }
    };
}

impl_detect!(Extends => EXTENDS_BASE);

impl_detect!(Format => MEMBER_FORMAT);
impl_detect!(Calculate => MEMBER_CALCULATE);
impl_detect!(Serialize => MEMBER_SERIALIZE);
impl_detect!(Draw => MEMBER_DRAW);

impl_detect!(FreeFormat => FREE_FORMAT);
impl_detect!(FreeCalculate => FREE_CALCULATE);
impl_detect!(FreeSerialize => FREE_SERIALIZE);
impl_detect!(FreeDraw => FREE_DRAW);

/// Compile-time capability profile of a concrete type.
///
/// Evaluates the same priority the probes use (base, member, free, none)
/// and yields a [`Strategies`](crate::Strategies) usable in `const` position.
///
/// ```
/// use tola_erase::{capabilities, Format, Via};
///
/// struct Dot;
/// impl Format for Dot {
///     fn format(&self) -> String { String::from(".") }
/// }
///
/// const DOT: tola_erase::Strategies = capabilities!(Dot);
/// assert_eq!(DOT.format, Via::Member);
/// assert_eq!(DOT.calculate, Via::Default);
/// ```
#[macro_export]
macro_rules! capabilities {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::*;
        $crate::Strategies {
            format: $crate::Via::select(
                <$crate::detect::Detect<$T>>::EXTENDS_BASE,
                <$crate::detect::Detect<$T>>::MEMBER_FORMAT,
                <$crate::detect::Detect<$T>>::FREE_FORMAT,
            ),
            calculate: $crate::Via::select(
                <$crate::detect::Detect<$T>>::EXTENDS_BASE,
                <$crate::detect::Detect<$T>>::MEMBER_CALCULATE,
                <$crate::detect::Detect<$T>>::FREE_CALCULATE,
            ),
            serialize: $crate::Via::select(
                <$crate::detect::Detect<$T>>::EXTENDS_BASE,
                <$crate::detect::Detect<$T>>::MEMBER_SERIALIZE,
                <$crate::detect::Detect<$T>>::FREE_SERIALIZE,
            ),
            draw: $crate::Via::select(
                <$crate::detect::Detect<$T>>::EXTENDS_BASE,
                <$crate::detect::Detect<$T>>::MEMBER_DRAW,
                <$crate::detect::Detect<$T>>::FREE_DRAW,
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::ShapeBase;
    use alloc::string::String;

    struct Dotted;
    impl Format for Dotted {
        fn format(&self) -> String {
            String::from("m")
        }
    }

    struct Based(ShapeBase);
    impl Extends for Based {
        fn shape_base(&self) -> &ShapeBase {
            &self.0
        }
    }

    #[test]
    fn test_detect_member() {
        assert!(Detect::<Dotted>::MEMBER_FORMAT);
        assert!(!Detect::<Dotted>::MEMBER_CALCULATE);
        assert!(!Detect::<Dotted>::FREE_FORMAT);
        assert!(!Detect::<Dotted>::EXTENDS_BASE);
    }

    #[test]
    fn test_detect_base() {
        assert!(Detect::<Based>::EXTENDS_BASE);
        assert!(!Detect::<Based>::MEMBER_FORMAT);
    }
}
