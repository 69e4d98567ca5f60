//! Relief - The sculptured AST surface of a template.
//!
//! This crate holds the template AST handed to the Washi markup generator by the
//! upstream parser and transform passes. Directives arrive already classified:
//! conditional chains are grouped into `If` nodes and loops are annotations on
//! their element.
//!
//! ## Name Origin
//!
//! **Relief** is a sculptural technique where forms stand out from a flat
//! background. The AST is the raised surface of a template: its structure made
//! tangible for the later passes to work on.

pub mod ast;

pub use ast::*;
