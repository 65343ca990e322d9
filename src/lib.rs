#![doc = include_str!("../README.md")]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]

pub mod class;
pub mod icon;
pub mod prelude;
pub mod select;

use std::borrow::Cow;

/// A type alias for a shared string.
pub type SharedString = Cow<'static, str>;
