// Common utilities shared by the derive implementations
//
// This module contains:
// - parse_utils: attribute parsing and hash seed helpers

mod parse_utils;

pub use parse_utils::*;
