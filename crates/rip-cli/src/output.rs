//! Reading inputs and writing the rewritten bundle

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use rip_engine::{RipOutput, SourceFile};

/// Read each file into a source record keyed by its path
pub fn read_sources(paths: &[PathBuf]) -> anyhow::Result<Vec<SourceFile>> {
    paths.iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(SourceFile::new(path.to_string_lossy(), text))
        })
        .collect()
}

/// Where a document with `identifier` lands under `out`.
///
/// Plain relative paths keep their directories; anything else (absolute,
/// or climbing out with `..`) is flattened to its file name.
pub fn output_path(out: &Path, identifier: &str) -> PathBuf {
    let path = Path::new(identifier);
    let plain = path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    match path.file_name() {
        Some(name) if !plain => out.join(name),
        _ => out.join(path),
    }
}

/// Write the bundle and every document; returns the written paths.
///
/// Fails before writing anything when two outputs land on the same path,
/// e.g. `/a/index.html` and `/b/index.html` both flattened to `index.html`.
pub fn write_output(out: &Path, bundle_name: &str, output: &RipOutput) -> anyhow::Result<Vec<PathBuf>> {
    let bundle_path = out.join(bundle_name);
    let mut claimed: HashMap<PathBuf, &str> = HashMap::new();
    claimed.insert(bundle_path.clone(), "the CSS bundle");

    let mut planned = Vec::with_capacity(output.html_documents.len() + 1);
    planned.push((bundle_path, output.css_bundle.text.as_str()));
    for document in &output.html_documents {
        let path = output_path(out, &document.identifier);
        if let Some(previous) = claimed.insert(path.clone(), &document.identifier) {
            anyhow::bail!(
                "output path collision: {} and {} would both be written to {}",
                previous,
                document.identifier,
                path.display()
            );
        }
        planned.push((path, document.text.as_str()));
    }

    let mut written = Vec::with_capacity(planned.len());
    for (path, text) in planned {
        write_file(&path, text)?;
        written.push(path);
    }
    Ok(written)
}

fn write_file(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!("Wrote {} ({} bytes)", path.display(), text.len());
    Ok(())
}
