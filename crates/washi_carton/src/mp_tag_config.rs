//! Tag configuration for mini-program markup.
//!
//! Mini-program runtimes have no `<template>` grouping element in the Vue
//! sense; their logical grouping container is `<block>`, which renders no node
//! of its own. Every other tag name is passed through to the target unchanged.

use phf::phf_map;

/// Template tag names rewritten for mini-program markup.
pub static TAG_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "template" => "block",
};

/// Map a template tag to its mini-program markup tag.
#[inline]
pub fn alias_tag(tag: &str) -> &str {
    match TAG_ALIASES.get(tag) {
        Some(alias) => *alias,
        None => tag,
    }
}
