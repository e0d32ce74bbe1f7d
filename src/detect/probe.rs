//! Autoderef probes that pick a strategy tag per operation.
//!
//! Each operation gets two chains of traits implemented on references to
//! [`Probe<T>`]. Method lookup strips one `&` per step, so the impl with the
//! most references that applies wins.
//!
//! ```text
//! outer: (&&&&probe).format_via(inner)
//!   &&&Probe<T>  T: Extends     -> Base<inner>
//!   &&Probe<T>   T: Format      -> Member
//!   &Probe<T>    T: FreeFormat  -> Free
//!   Probe<T>                    -> Absent
//!
//! inner: (&&&probe).format_inner()
//!   &&Probe<T>   T: Format      -> Member
//!   &Probe<T>    T: FreeFormat  -> Free
//!   Probe<T>                    -> Inherited
//! ```
//!
//! The inner chain has no base level, so a base can never resolve to itself.

use core::marker::PhantomData;

use crate::capability::{
    Calculate, Draw, Extends, Format, FreeCalculate, FreeDraw, FreeFormat, FreeSerialize,
    Serialize,
};
use crate::dispatch::{Absent, Base, Free, Inherited, Member};

/// Probe over a concrete type.
#[doc(hidden)]
pub struct Probe<T: ?Sized>(PhantomData<T>);

impl<T: ?Sized> Probe<T> {
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

impl<T: ?Sized> Default for Probe<T> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_probe {
    ($op:ident, member = $Member:ident, free = $Free:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$op:camel ViaBase>] {
                fn [<$op _via>]<I>(&self, inner: I) -> Base<I>;
            }
            impl<T: ?Sized + Extends> [<$op:camel ViaBase>] for &&&Probe<T> {
                fn [<$op _via>]<I>(&self, _inner: I) -> Base<I> { Base::new() }
            }

            #[doc(hidden)]
            pub trait [<$op:camel ViaMember>] {
                fn [<$op _via>]<I>(&self, inner: I) -> Member;
            }
            impl<T: ?Sized + $Member> [<$op:camel ViaMember>] for &&Probe<T> {
                fn [<$op _via>]<I>(&self, _inner: I) -> Member { Member }
            }

            #[doc(hidden)]
            pub trait [<$op:camel ViaFree>] {
                fn [<$op _via>]<I>(&self, inner: I) -> Free;
            }
            impl<T: ?Sized + $Free> [<$op:camel ViaFree>] for &Probe<T> {
                fn [<$op _via>]<I>(&self, _inner: I) -> Free { Free }
            }

            #[doc(hidden)]
            pub trait [<$op:camel ViaAbsent>] {
                fn [<$op _via>]<I>(&self, inner: I) -> Absent;
            }
            impl<T: ?Sized> [<$op:camel ViaAbsent>] for Probe<T> {
                fn [<$op _via>]<I>(&self, _inner: I) -> Absent { Absent }
            }

            #[doc(hidden)]
            pub trait [<$op:camel InnerMember>] {
                fn [<$op _inner>](&self) -> Member;
            }
            impl<T: ?Sized + $Member> [<$op:camel InnerMember>] for &&Probe<T> {
                fn [<$op _inner>](&self) -> Member { Member }
            }

            #[doc(hidden)]
            pub trait [<$op:camel InnerFree>] {
                fn [<$op _inner>](&self) -> Free;
            }
            impl<T: ?Sized + $Free> [<$op:camel InnerFree>] for &Probe<T> {
                fn [<$op _inner>](&self) -> Free { Free }
            }

            #[doc(hidden)]
            pub trait [<$op:camel InnerInherited>] {
                fn [<$op _inner>](&self) -> Inherited;
            }
            impl<T: ?Sized> [<$op:camel InnerInherited>] for Probe<T> {
                fn [<$op _inner>](&self) -> Inherited { Inherited }
            }
        }
    };
}

impl_probe!(format, member = Format, free = FreeFormat);
impl_probe!(calculate, member = Calculate, free = FreeCalculate);
impl_probe!(serialize, member = Serialize, free = FreeSerialize);
impl_probe!(draw, member = Draw, free = FreeDraw);

/// Resolve the [`Profile`](crate::Profile) of a concrete type.
///
/// Expands the probes for every operation at the call site, where the type is
/// known, and binds the selected tags. `#[derive(Shape)]` expands to this.
///
/// ```
/// use tola_erase::{resolve, Format, Via};
///
/// struct Dot;
/// impl Format for Dot {
///     fn format(&self) -> String { String::from(".") }
/// }
///
/// let profile = resolve!(Dot);
/// assert_eq!(profile.format.via(), Via::Member);
/// assert_eq!(profile.format.call(&Dot), ".");
/// assert_eq!(profile.calculate.call(&Dot), 0);
/// ```
#[macro_export]
macro_rules! resolve {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::probe::*;
        let probe = $crate::detect::Probe::<$T>::new();
        #[allow(clippy::needless_borrow)]
        let profile = $crate::Profile::<$T>::bind(
            (&&&&probe).format_via((&&&probe).format_inner()),
            (&&&&probe).calculate_via((&&&probe).calculate_inner()),
            (&&&&probe).serialize_via((&&&probe).serialize_inner()),
            (&&&&probe).draw_via((&&&probe).draw_inner()),
        );
        profile
    }};
}

#[cfg(test)]
mod tests {
    use crate::capability::{Extends, Format, FreeFormat, ShapeBase};
    use crate::Via;
    use alloc::string::String;

    struct Both;
    impl Format for Both {
        fn format(&self) -> String {
            String::from("member")
        }
    }
    impl FreeFormat for Both {
        fn free_format(_: &Self) -> String {
            String::from("free")
        }
    }

    struct OnlyFree;
    impl FreeFormat for OnlyFree {
        fn free_format(_: &Self) -> String {
            String::from("free")
        }
    }

    struct BasedMember(ShapeBase);
    impl Extends for BasedMember {
        fn shape_base(&self) -> &ShapeBase {
            &self.0
        }
    }
    impl Format for BasedMember {
        fn format(&self) -> String {
            String::from("body")
        }
    }

    #[test]
    fn test_member_beats_free() {
        let profile = resolve!(Both);
        assert_eq!(profile.format.via(), Via::Member);
        assert_eq!(profile.format.call(&Both), "member");
    }

    #[test]
    fn test_free_when_no_member() {
        let profile = resolve!(OnlyFree);
        assert_eq!(profile.format.via(), Via::Free);
        assert_eq!(profile.format.call(&OnlyFree), "free");
    }

    #[test]
    fn test_base_beats_member_and_keeps_member_inside() {
        let profile = resolve!(BasedMember);
        assert_eq!(profile.format.via(), Via::Base);
        assert_eq!(profile.format.call(&BasedMember(ShapeBase::new(1, 2))), "[X:1|Y:2]\nbody");
        assert_eq!(profile.calculate.via(), Via::Base);
    }
}
