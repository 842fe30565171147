use std::error::Error;
use std::fs;
use std::path::Path;

use fleury_graph::{
    table_from_bytes, table_from_json, table_from_yaml, table_to_bytes, table_to_json,
    table_to_yaml, AdjacencyTable,
};
use fleury_walk::WalkConfig;

/// On-disk encodings of an adjacency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Yaml,
    Bytes,
}

impl GraphFormat {
    pub fn from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(GraphFormat::Json),
            Some("yaml") | Some("yml") => Ok(GraphFormat::Yaml),
            Some("bin") => Ok(GraphFormat::Bytes),
            _ => Err(format!(
                "cannot infer graph format of {} (expected .json, .yaml, .yml or .bin)",
                path.display()
            )
            .into()),
        }
    }
}

pub fn load_table(path: &Path) -> Result<AdjacencyTable, Box<dyn Error>> {
    let table = match GraphFormat::from_path(path)? {
        GraphFormat::Json => table_from_json(&fs::read_to_string(path)?)?,
        GraphFormat::Yaml => table_from_yaml(&fs::read_to_string(path)?)?,
        GraphFormat::Bytes => table_from_bytes(&fs::read(path)?)?,
    };
    log::debug!("loaded {} vertices from {}", table.len(), path.display());
    Ok(table)
}

pub fn write_table(path: &Path, table: &AdjacencyTable) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    match GraphFormat::from_path(path)? {
        GraphFormat::Json => fs::write(path, table_to_json(table)?)?,
        GraphFormat::Yaml => fs::write(path, table_to_yaml(table)?)?,
        GraphFormat::Bytes => fs::write(path, table_to_bytes(table)?)?,
    }
    Ok(())
}

pub fn load_config(path: Option<&Path>) -> Result<WalkConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(WalkConfig::from_yaml_str(&fs::read_to_string(path)?)?),
        None => Ok(WalkConfig::default()),
    }
}
