//! # Layer 1: Capability Detection
//!
//! Answers "how does concrete type `T` satisfy operation `O`" at compile time.
//!
//! - [`autoref`]: `Detect<T>` consts (`MEMBER_FORMAT`, `FREE_FORMAT`, `EXTENDS_BASE`, ...)
//!   and the `capabilities!` macro built on them.
//! - [`probe`]: autoderef chains that return a strategy *tag* per operation,
//!   and the `resolve!` macro that binds those tags into a [`Profile`](crate::Profile).
//!
//! Both follow one priority order:
//!
//! ```text
//! 1. T: Extends      (base mix-in, resolves the rest on its own)
//! 2. T: Format       (member)
//! 3. T: FreeFormat   (free function via #[shape_fn])
//! 4. nothing         (default, or a compile error for `format`)
//! ```
//!
//! ## Limitation
//!
//! Detection only sees through **concrete types**. Generic wrappers such as
//! [`Indirect`](crate::Indirect) spell out their strategies with
//! [`Profile::bind`](crate::Profile::bind).

pub mod autoref;
pub mod probe;

pub use autoref::Detect;
pub use probe::Probe;
