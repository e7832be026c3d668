use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glob::{MatchOptions, Pattern};
use tokio::fs;
use tracing::{debug, info};

use crate::error::Error;
use crate::table::{content_type_for, FileRecord, FileTable};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

fn load_err(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Load {
        path: path.to_path_buf(),
        source,
    }
}

/// Load every file below `root` matching `pattern` into a `FileTable`.
///
/// Relative paths are matched with `/` separators on every platform. Matched symlinks to files
/// are followed; dangling symlinks and symlinked directories are skipped.
pub(crate) async fn load(root: &Path, pattern: &Pattern, index: &str) -> Result<FileTable, Error> {
    let mut files = HashMap::new();
    let mut index_record = None;

    // Pending directories to scan, as: `(real path, relative path)`
    let mut dirs = vec![(root.to_path_buf(), String::new())];
    while let Some((dir, base)) = dirs.pop() {
        let mut iter = fs::read_dir(&dir).await.map_err(load_err(&dir))?;
        while let Some(entry) = iter.next_entry().await.map_err(load_err(&dir))? {
            let real_path = entry.path();
            let file_type = entry.file_type().await.map_err(load_err(&real_path))?;

            let name = entry.file_name();
            let relative = if base.is_empty() {
                name.to_string_lossy().into_owned()
            } else {
                format!("{}/{}", base, name.to_string_lossy())
            };

            // Only real directories are traversed, so symlink cycles cannot occur.
            if file_type.is_dir() {
                dirs.push((real_path, relative));
                continue;
            }
            if !pattern.matches_with(&relative, MATCH_OPTIONS) {
                continue;
            }
            if file_type.is_symlink() {
                match fs::metadata(&real_path).await {
                    Ok(target) if target.is_file() => {}
                    Ok(_) => {
                        debug!(path = %real_path.display(), "skipping symlink to non-file");
                        continue;
                    }
                    Err(err) if err.kind() == ErrorKind::NotFound => {
                        debug!(path = %real_path.display(), "skipping dangling symlink");
                        continue;
                    }
                    Err(err) => return Err(load_err(&real_path)(err)),
                }
            } else if !file_type.is_file() {
                continue;
            }

            let content = fs::read(&real_path).await.map_err(load_err(&real_path))?;
            let record = Arc::new(FileRecord {
                path: format!("/{}", relative),
                content_type: content_type_for(&relative),
                content: content.into(),
                is_index: relative == index,
            });
            debug!(
                path = %record.path,
                content_type = ?record.content_type,
                bytes = record.content.len(),
                "loaded file"
            );

            if record.is_index {
                index_record = Some(record.clone());
            }
            // Keys can collide on case-insensitive filesystems; the last one read wins.
            files.insert(record.path.clone(), record);
        }
    }

    let index_record = index_record.ok_or_else(|| Error::MissingIndex {
        index: index.to_owned(),
        root: PathBuf::from(root),
    })?;

    info!(root = %root.display(), files = files.len(), "loaded spa bundle");
    Ok(FileTable::new(files, index_record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_matches_nested_paths() {
        let pattern = Pattern::new("**/*").unwrap();
        assert!(pattern.matches_with("index.html", MATCH_OPTIONS));
        assert!(pattern.matches_with("assets/js/app.js", MATCH_OPTIONS));
    }

    #[test]
    fn extension_pattern_excludes_other_files() {
        let pattern = Pattern::new("**/*.css").unwrap();
        assert!(pattern.matches_with("style.css", MATCH_OPTIONS));
        assert!(pattern.matches_with("assets/style.css", MATCH_OPTIONS));
        assert!(!pattern.matches_with("index.html", MATCH_OPTIONS));
    }
}
