//! Carton - The artist's toolbox for Washi.
//!
//! This crate provides the foundational utilities and data structures shared by
//! the Washi crates: the arena types the template AST is allocated in, the
//! compact string type used for names and source text, and the static lookup
//! tables of the mini-program markup dialects.
//!
//! # Example
//!
//! ```
//! use washi_carton::{Box, Bump, Vec};
//!
//! let allocator = Bump::new();
//!
//! let boxed = Box::new_in(42, &allocator);
//! assert_eq!(*boxed, 42);
//!
//! let mut vec = Vec::new_in(&allocator);
//! vec.push(1);
//! vec.push(2);
//! assert_eq!(vec.len(), 2);
//! ```

pub mod mp_tag_config;

// Re-export arena types. AST nodes live in a `Bump` for the lifetime of one
// template compilation.
pub use bumpalo::boxed::Box;
pub use bumpalo::collections::Vec;
pub use bumpalo::Bump;

// Re-export compact_str::CompactString for convenience
pub use compact_str::format_compact;
pub use compact_str::CompactString as String;

// Re-export smallvec for stack-optimized collections
pub use smallvec::SmallVec;

pub use mp_tag_config::*;
