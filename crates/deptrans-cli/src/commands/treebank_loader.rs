use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use deptrans_core::{TreeError, Treebank, parse_treebank};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid treebank JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid treebank: {0}")]
    Tree(#[from] TreeError),
}

/// Load a treebank from a file, or from stdin when the path is `-`.
pub fn load_treebank(path: &Path) -> Result<Treebank, LoadError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::File {
            path: path.to_path_buf(),
            source,
        })?
    };
    treebank_from_str(&text)
}

pub fn treebank_from_str(text: &str) -> Result<Treebank, LoadError> {
    let raw = parse_treebank(text)?;
    Ok(Treebank::from_raw(&raw)?)
}
