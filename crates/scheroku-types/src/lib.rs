#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![forbid(unsafe_code)]

mod dyno;

pub use dyno::{DynoSize, ParseDynoSizeError, ALL_DYNO_SIZES};
