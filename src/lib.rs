//! `img-filter` converts PNG and JPEG images to grayscale.
//! The library exists so that every stage of the conversion can be tested on its own;
//! its interface is not meant for use outside of the `img-filter` binary.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod format;
pub mod help;
pub mod image;
pub mod operations;
pub mod plan;
mod utils;
