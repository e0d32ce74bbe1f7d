// Common utilities shared between the derive and the attribute macro
//
// This module contains:
// - operation: the dispatched operations and their generated names
// - parse_utils: Common parsing helpers

mod operation;
mod parse_utils;

pub use operation::*;
pub use parse_utils::*;
