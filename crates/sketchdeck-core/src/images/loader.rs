//! Turn file-system paths into image references.
//!
//! Loading is all-or-nothing: either every given path resolves and at least
//! one image is found, or an error is returned and no set is produced.
//! Files are only checked through their metadata; content is never read.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::ImageRef;
use crate::error::ImageLoadError;

/// Extensions picked up when scanning directories.
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Lower-case extensions accepted from directory scans.
    pub extensions: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl LoadOptions {
    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let e = e.to_ascii_lowercase();
                self.extensions.iter().any(|x| *x == e)
            })
            .unwrap_or(false)
    }
}

/// Resolve `paths` into an ordered list of image references.
///
/// Explicit files are taken as given, in argument order. Directories are
/// scanned and their matching files appended sorted by file name.
///
/// # Errors
/// Returns [`ImageLoadError`] if any path is missing or unreadable, or if no
/// image is found at all.
pub fn load_paths<P: AsRef<Path>>(
    paths: &[P],
    options: &LoadOptions,
) -> Result<Vec<ImageRef>, ImageLoadError> {
    let mut images = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let meta = std::fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ImageLoadError::NotFound(path.to_path_buf())
            } else {
                ImageLoadError::Unreadable {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        if meta.is_dir() {
            let found = scan_dir(path, options)?;
            debug!(dir = %path.display(), count = found.len(), "scanned image directory");
            images.extend(found.into_iter().map(ImageRef::from_path));
        } else {
            images.push(ImageRef::from_path(path));
        }
    }

    if images.is_empty() {
        warn!("no images found in {} path(s)", paths.len());
        return Err(ImageLoadError::NoImages);
    }
    Ok(images)
}

fn scan_dir(dir: &Path, options: &LoadOptions) -> Result<Vec<PathBuf>, ImageLoadError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .sort_by_file_name();
    let walker = if options.recursive {
        walker
    } else {
        walker.max_depth(1)
    };

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && options.accepts(entry.path()) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"not really an image").unwrap();
    }

    #[test]
    fn directory_scan_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.jpg"));
        touch(&dir.path().join("a.PNG"));
        touch(&dir.path().join("notes.txt"));

        let images = load_paths(&[dir.path()], &LoadOptions::default()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|i| i.path().unwrap().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PNG", "b.jpg"]);
    }

    #[test]
    fn subdirectories_need_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested").join("c.webp"));

        let flat = load_paths(&[dir.path()], &LoadOptions::default());
        assert!(matches!(flat, Err(ImageLoadError::NoImages)));

        let options = LoadOptions {
            recursive: true,
            ..LoadOptions::default()
        };
        assert_eq!(load_paths(&[dir.path()], &options).unwrap().len(), 1);
    }

    #[test]
    fn missing_path_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("ok.png");
        touch(&good);
        let missing = dir.path().join("gone.png");

        let result = load_paths(&[good, missing.clone()], &LoadOptions::default());
        match result {
            Err(ImageLoadError::NotFound(p)) => assert_eq!(p, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn explicit_files_keep_argument_order() {
        let dir = tempfile::tempdir().unwrap();
        let z = dir.path().join("z.png");
        let a = dir.path().join("a.png");
        touch(&z);
        touch(&a);

        let images = load_paths(&[&z, &a], &LoadOptions::default()).unwrap();
        assert_eq!(images[0].path(), Some(z.as_path()));
        assert_eq!(images[1].path(), Some(a.as_path()));
    }
}
