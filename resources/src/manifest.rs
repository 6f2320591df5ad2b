//! Render objects as YAML documents ready for `kubectl apply -f -`.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::objects::KubeObject;

pub const DOCUMENT_SEPARATOR: &str = "---";

/// A single YAML document: a `---` line, then the body with one trailing newline.
/// Keys follow field declaration order, so the output is byte-for-byte stable.
pub fn render<T: Serialize>(object: &T) -> Result<String> {
    let yaml = serde_yaml::to_string(object).with_context(|| "Failed to serialize manifest")?;
    let body = yaml
        .strip_prefix(DOCUMENT_SEPARATOR)
        .map(|rest| rest.trim_start_matches('\n'))
        .unwrap_or(&yaml)
        .trim_end();
    Ok(format!("{}\n{}\n", DOCUMENT_SEPARATOR, body))
}

/// One document per object, in order. Nothing is returned if any object fails.
pub fn render_all(objects: &[KubeObject]) -> Result<String> {
    objects
        .iter()
        .map(|object| {
            render(object).with_context(|| {
                format!("Failed to render {} {}", object.kind(), object.name())
            })
        })
        .collect()
}
