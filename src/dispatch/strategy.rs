//! Per-operation impl traits for the strategy tags.

use alloc::string::String;
use core::fmt;

use super::{Absent, Base, Free, Inherited, Member, Via};
use crate::capability::{
    Calculate, Draw, Extends, Format, FreeCalculate, FreeDraw, FreeFormat, FreeSerialize,
    Serialize,
};

// =============================================================================
// format (mandatory)
// =============================================================================

/// `format` implementation selected for `T`.
#[diagnostic::on_unimplemented(
    message = "`{T}` has no `format` strategy",
    label = "no `format` resolved for `{T}`",
    note = "implement `Format`, register a free function with `#[shape_fn]`, or embed a `ShapeBase` with `#[shape(base)]`"
)]
pub trait FormatImpl<T: ?Sized> {
    const VIA: Via;
    fn format(value: &T) -> String;
}

impl<T: ?Sized + Format> FormatImpl<T> for Member {
    const VIA: Via = Via::Member;

    #[inline(always)]
    fn format(value: &T) -> String {
        value.format()
    }
}

impl<T: ?Sized + FreeFormat> FormatImpl<T> for Free {
    const VIA: Via = Via::Free;

    #[inline(always)]
    fn format(value: &T) -> String {
        T::free_format(value)
    }
}

impl<T: ?Sized> FormatImpl<T> for Inherited {
    const VIA: Via = Via::Default;

    #[inline(always)]
    fn format(_value: &T) -> String {
        String::new()
    }
}

impl<T: ?Sized + Extends, I: FormatImpl<T>> FormatImpl<T> for Base<I> {
    const VIA: Via = Via::Base;

    fn format(value: &T) -> String {
        let mut out = value.shape_base().describe();
        out.push_str(&I::format(value));
        out
    }
}

// No `FormatImpl` for `Absent`: a type without `format` must not compile.

// =============================================================================
// calculate
// =============================================================================

/// `calculate` implementation selected for `T`.
pub trait CalculateImpl<T: ?Sized> {
    const VIA: Via;
    fn calculate(value: &T) -> i32;
}

impl<T: ?Sized + Calculate> CalculateImpl<T> for Member {
    const VIA: Via = Via::Member;

    #[inline(always)]
    fn calculate(value: &T) -> i32 {
        value.calculate()
    }
}

impl<T: ?Sized + FreeCalculate> CalculateImpl<T> for Free {
    const VIA: Via = Via::Free;

    #[inline(always)]
    fn calculate(value: &T) -> i32 {
        T::free_calculate(value)
    }
}

impl<T: ?Sized> CalculateImpl<T> for Inherited {
    const VIA: Via = Via::Default;

    #[inline(always)]
    fn calculate(_value: &T) -> i32 {
        0
    }
}

impl<T: ?Sized> CalculateImpl<T> for Absent {
    const VIA: Via = Via::Default;

    #[inline(always)]
    fn calculate(_value: &T) -> i32 {
        0
    }
}

impl<T: ?Sized + Extends, I: CalculateImpl<T>> CalculateImpl<T> for Base<I> {
    const VIA: Via = Via::Base;

    #[inline(always)]
    fn calculate(value: &T) -> i32 {
        I::calculate(value)
    }
}

// =============================================================================
// serialize / draw (sink operations)
// =============================================================================

macro_rules! impl_sink_strategies {
    (
        $(#[$meta:meta])*
        $Impl:ident :: $method:ident,
        member = $Member:ident,
        free = $Free:ident :: $free_method:ident,
        inherited = $inherited:literal
    ) => {
        $(#[$meta])*
        pub trait $Impl<T: ?Sized> {
            const VIA: Via;
            fn $method(value: &T, out: &mut dyn fmt::Write) -> fmt::Result;
        }

        impl<T: ?Sized + $Member> $Impl<T> for Member {
            const VIA: Via = Via::Member;

            #[inline(always)]
            fn $method(value: &T, out: &mut dyn fmt::Write) -> fmt::Result {
                value.$method(out)
            }
        }

        impl<T: ?Sized + $Free> $Impl<T> for Free {
            const VIA: Via = Via::Free;

            #[inline(always)]
            fn $method(value: &T, out: &mut dyn fmt::Write) -> fmt::Result {
                T::$free_method(value, out)
            }
        }

        impl<T: ?Sized> $Impl<T> for Inherited {
            const VIA: Via = Via::Default;

            #[inline(always)]
            fn $method(_value: &T, out: &mut dyn fmt::Write) -> fmt::Result {
                out.write_str($inherited)
            }
        }

        impl<T: ?Sized> $Impl<T> for Absent {
            const VIA: Via = Via::Default;

            #[inline(always)]
            fn $method(_value: &T, _out: &mut dyn fmt::Write) -> fmt::Result {
                Ok(())
            }
        }

        impl<T: ?Sized + Extends, I: $Impl<T>> $Impl<T> for Base<I> {
            const VIA: Via = Via::Base;

            #[inline(always)]
            fn $method(value: &T, out: &mut dyn fmt::Write) -> fmt::Result {
                I::$method(value, out)
            }
        }
    };
}

impl_sink_strategies! {
    /// `serialize` implementation selected for `T`.
    SerializeImpl::serialize,
    member = Serialize,
    free = FreeSerialize::free_serialize,
    inherited = "BaseObject\n"
}

impl_sink_strategies! {
    /// `draw` implementation selected for `T`.
    DrawImpl::draw,
    member = Draw,
    free = FreeDraw::free_draw,
    inherited = "[Drawing Nothing]\n"
}
