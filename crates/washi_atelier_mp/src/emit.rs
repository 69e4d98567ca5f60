//! Asset emission hand-off.
//!
//! The generator never writes files. A completed template is handed as one
//! [`EmittedAsset`] to whatever implements [`EmitFile`]: a bundler plugin, a
//! file writer, or the in-memory [`MemoryEmitter`].

use serde::{Deserialize, Serialize};
use washi_carton::String;

/// Kind of emitted artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Mini-program template markup
    Markup,
}

/// One artifact handed to the emission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmittedAsset {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub file_name: String,
    pub source: std::string::String,
}

/// Receiver of completed artifacts
pub trait EmitFile {
    fn emit_file(&mut self, asset: EmittedAsset);
}

impl<F> EmitFile for F
where
    F: FnMut(EmittedAsset),
{
    fn emit_file(&mut self, asset: EmittedAsset) {
        self(asset)
    }
}

/// Collects emitted assets in memory, in emission order
#[derive(Debug, Default)]
pub struct MemoryEmitter {
    assets: Vec<EmittedAsset>,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assets(&self) -> &[EmittedAsset] {
        &self.assets
    }

    /// Last asset emitted under `file_name`.
    pub fn get(&self, file_name: &str) -> Option<&EmittedAsset> {
        self.assets.iter().rev().find(|asset| asset.file_name == file_name)
    }
}

impl EmitFile for MemoryEmitter {
    fn emit_file(&mut self, asset: EmittedAsset) {
        self.assets.push(asset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(file_name: &str, source: &str) -> EmittedAsset {
        EmittedAsset {
            kind: AssetKind::Markup,
            file_name: String::from(file_name),
            source: source.to_string(),
        }
    }

    #[test]
    fn test_memory_emitter_keeps_order() {
        let mut emitter = MemoryEmitter::new();
        emitter.emit_file(markup("a.wxml", "<view/>"));
        emitter.emit_file(markup("b.wxml", "<text/>"));
        emitter.emit_file(markup("a.wxml", "<view></view>"));

        assert_eq!(emitter.assets().len(), 3);
        assert_eq!(emitter.get("a.wxml").unwrap().source, "<view></view>");
        assert!(emitter.get("c.wxml").is_none());
    }

    #[test]
    fn test_closure_emitter() {
        let mut seen = Vec::new();
        let mut emitter = |asset: EmittedAsset| seen.push(asset.file_name);
        emitter.emit_file(markup("index.wxml", ""));
        assert_eq!(seen, ["index.wxml"]);
    }

    #[test]
    fn test_asset_serializes_like_rollup_emit_file() {
        let json = serde_json::to_string(&markup("index.wxml", "<view/>")).unwrap();
        assert_eq!(
            json,
            r#"{"type":"markup","fileName":"index.wxml","source":"<view/>"}"#
        );
    }
}
