//! # Layer 2: Dispatch
//!
//! Strategy tags are zero-sized types selected per operation by the probes in
//! [`detect`](crate::detect). Each tag implements the operation's impl trait,
//! so a selected tag can be turned into a plain function pointer.
//!
//! ```text
//! Probe<T> --autoref--> tag (Base<I> | Member | Free | Absent)
//!                         |
//!                         v
//!            Profile::bind(tags) --> fn pointers stored in the handle
//! ```
//!
//! | Tag | format | calculate | serialize | draw |
//! |-----|--------|-----------|-----------|------|
//! | `Member` | `T: Format` | `T: Calculate` | `T: Serialize` | `T: Draw` |
//! | `Free` | `T: FreeFormat` | `T: FreeCalculate` | `T: FreeSerialize` | `T: FreeDraw` |
//! | `Base<I>` | header + `I` | `I` | `I` | `I` |
//! | `Inherited` | `""` | `0` | `BaseObject` | `[Drawing Nothing]` |
//! | `Absent` | *error* | `0` | nothing | nothing |

pub mod profile;
pub mod strategy;

use core::marker::PhantomData;

pub use profile::{Binding, CalculateFn, FormatFn, Profile, SinkFn, Strategies};
pub use strategy::{CalculateImpl, DrawImpl, FormatImpl, SerializeImpl};

/// How an operation was resolved for a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Via {
    /// The type extends [`ShapeBase`](crate::ShapeBase).
    Base,
    /// Member trait implementation.
    Member,
    /// Free function registered with `#[shape_fn]`.
    Free,
    /// Nothing found: the operation's neutral default.
    Default,
}

impl Via {
    /// Priority order shared by the probes and the [`Detect`](crate::detect::Detect) consts.
    pub const fn select(extends: bool, member: bool, free: bool) -> Self {
        if extends {
            Via::Base
        } else if member {
            Via::Member
        } else if free {
            Via::Free
        } else {
            Via::Default
        }
    }
}

// =============================================================================
// Strategy Tags
// =============================================================================

/// Call the member trait method.
#[derive(Debug, Clone, Copy, Default)]
pub struct Member;

/// Call the free function registered with `#[shape_fn]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Free;

/// The base mix-in's own fallback, used underneath [`Base`] only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inherited;

/// No strategy. Neutral result for optional operations, compile error for `format`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Absent;

/// Defer to the base mix-in, which then runs the inner strategy `I`.
///
/// `I` never is a `Base` itself: the inner probe chain has no base level.
pub struct Base<I>(PhantomData<I>);

impl<I> Base<I> {
    pub const fn new() -> Self {
        Base(PhantomData)
    }
}

impl<I> Default for Base<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Clone for Base<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for Base<I> {}

impl<I> core::fmt::Debug for Base<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Base<{}>", core::any::type_name::<I>())
    }
}
