//! themegen: turn a YAML terminal color theme into a Rust struct literal.
//!
//! The input is an alacritty-style document with `colors.primary`,
//! `colors.normal` and `colors.bright` groups of `#RRGGBB` strings. The output
//! is a `Theme { .. }` expression with one constructor call per color, in a
//! fixed field order.
//!
//! # Quick start
//!
//! ```no_run
//! use themegen::generate::{generate, GenerateOptions};
//! use std::path::Path;
//!
//! let mut out = std::io::stdout();
//! generate(Path::new("orig.yml"), &GenerateOptions::default(), &mut out).unwrap();
//! ```

pub mod build_info;
pub mod color;
pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod render;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
