#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod args;
pub mod options;

pub use args::OutbandArgs;
pub use options::*;
