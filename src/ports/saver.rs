// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! File saver implementations.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{ExportFile, FileSaver};
use crate::error::SaveError;

/// Replace characters that cannot appear in a file name with `_`.
///
/// Song titles go into export names verbatim, so a title such as
/// `AC/DC: Live` must not escape the target directory.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// `name (n).ext` for the n-th extra copy of `name`
fn numbered_name(name: &str, n: usize) -> String {
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{} ({}){}", &name[..dot], n, &name[dot..]),
        _ => format!("{} ({})", name, n),
    }
}

/// Writes exported files into a directory.
///
/// Existing files are never replaced; a repeated name gets a ` (n)` suffix.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    directory: PathBuf,
}

impl DirectorySaver {
    /// Create a saver for the given directory (created on first save)
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Target directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl FileSaver for DirectorySaver {
    fn save(&mut self, file: ExportFile) -> Result<PathBuf, SaveError> {
        let name = sanitize_file_name(&file.file_name);
        if name.is_empty() || name == "." || name == ".." {
            return Err(SaveError::EmptyFileName);
        }

        fs::create_dir_all(&self.directory).map_err(|source| SaveError::Io {
            path: self.directory.clone(),
            source,
        })?;

        let mut copy = 0;
        let path = loop {
            let candidate = if copy == 0 {
                self.directory.join(&name)
            } else {
                self.directory.join(numbered_name(&name, copy))
            };
            match OpenOptions::new().write(true).create_new(true).open(&candidate) {
                Ok(mut out) => {
                    out.write_all(&file.bytes).map_err(|source| SaveError::Io {
                        path: candidate.clone(),
                        source,
                    })?;
                    break candidate;
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => copy += 1,
                Err(source) => {
                    return Err(SaveError::Io {
                        path: candidate,
                        source,
                    })
                }
            }
        };

        tracing::info!(path = %path.display(), bytes = file.bytes.len(), mime = file.mime, "exported file");
        Ok(path)
    }
}

/// Keeps exported files in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySaver {
    files: Vec<ExportFile>,
}

impl MemorySaver {
    /// Create an empty saver
    pub fn new() -> Self {
        Self::default()
    }

    /// Files saved so far, oldest first
    pub fn files(&self) -> &[ExportFile] {
        &self.files
    }
}

impl FileSaver for MemorySaver {
    fn save(&mut self, file: ExportFile) -> Result<PathBuf, SaveError> {
        if file.file_name.is_empty() {
            return Err(SaveError::EmptyFileName);
        }
        let path = PathBuf::from(&file.file_name);
        self.files.push(file);
        Ok(path)
    }
}
