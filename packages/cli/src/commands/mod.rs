mod check;
mod convert;

pub use check::{check, CheckArgs};
pub use convert::{convert, ConvertArgs};

use anyhow::{anyhow, Context, Result};
use relayout_rules::{builtin_web, Replacements, StyleSheet};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One variant's file for a logical layout.
pub(crate) struct VariantFile {
    /// Qualifier after `layout-`; the default folder contributes `""`.
    pub variant: String,
    pub path: PathBuf,
}

/// Scan the resource root for `layout` / `layout-<qualifier>` folders and
/// group their files by logical layout name.
pub(crate) fn scan_layouts(res_dir: &Path) -> Result<BTreeMap<String, Vec<VariantFile>>> {
    let mut layouts: BTreeMap<String, Vec<VariantFile>> = BTreeMap::new();

    for entry in std::fs::read_dir(res_dir)
        .with_context(|| format!("Cannot read resource directory {}", res_dir.display()))?
    {
        let entry = entry?;
        let folder = entry.path();
        if !folder.is_dir() {
            continue;
        }
        let folder_name = match folder.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let variant = if folder_name == "layout" {
            String::new()
        } else if let Some(qualifier) = folder_name.strip_prefix("layout-") {
            qualifier.to_string()
        } else {
            continue;
        };

        for file in std::fs::read_dir(&folder)? {
            let file = file?;
            let path = file.path();
            if path.extension().and_then(|e| e.to_str()) != Some("xml") {
                continue;
            }
            let name = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            layouts.entry(name).or_default().push(VariantFile {
                variant: variant.clone(),
                path,
            });
        }
    }

    for files in layouts.values_mut() {
        files.sort_by(|a, b| a.variant.cmp(&b.variant));
    }
    Ok(layouts)
}

pub(crate) fn load_replacements(path: Option<&str>) -> Result<Replacements> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read rule file {}", path))?;
            Replacements::from_json(&json).map_err(|e| anyhow!("{}: {}", path, e))
        }
        None => Replacements::from_rule_set(builtin_web()).map_err(|e| anyhow!("{}", e)),
    }
}

pub(crate) fn load_styles(path: Option<&str>) -> Result<StyleSheet> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read style file {}", path))?;
            StyleSheet::from_json(&json).map_err(|e| anyhow!("{}: {}", path, e))
        }
        None => Ok(StyleSheet::default()),
    }
}
