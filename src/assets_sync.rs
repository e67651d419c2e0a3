// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};
use walkdir::WalkDir;

/// Copy every file of `source` into `target` whose copy is missing or older.
///
/// Return `true` if nothing had to be copied.
pub fn sync_assets<P: AsRef<Utf8Path>>(source: P, target: P) -> eyre::Result<bool> {
    let source = source.as_ref();
    let target = target.as_ref();

    if !source.exists() {
        return Ok(true);
    }

    if !target.exists() {
        std::fs::create_dir_all(target)
            .wrap_err_with(|| eyre!("failed to create directory `{}`", target))?;
    } else if !target.is_dir() {
        return Err(eyre!("target path `{}` is not a directory", target));
    }

    let mut unchanged = true;
    for entry in WalkDir::new(source).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(source_file) = Utf8PathBuf::try_from(entry.into_path()) else {
            continue;
        };
        let relative = source_file
            .strip_prefix(source)
            .wrap_err_with(|| eyre!("failed to compute relative path of `{}`", source_file))?;
        let target_file = target.join(relative);

        if !is_stale(&source_file, &target_file)? {
            continue;
        }
        unchanged = false;
        if let Some(parent) = target_file.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| eyre!("failed to create directory `{}`", parent))?;
        }
        std::fs::copy(&source_file, &target_file)
            .wrap_err_with(|| eyre!("failed to copy `{}` to `{}`", source_file, target_file))?;
    }

    Ok(unchanged)
}

fn is_stale(source: &Utf8Path, target: &Utf8Path) -> eyre::Result<bool> {
    if !target.exists() {
        return Ok(true);
    }
    let source_mtime = source.metadata()?.modified()?;
    let target_mtime = target.metadata()?.modified()?;
    Ok(source_mtime > target_mtime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_assets() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        let source = root.join("assets");
        let target = root.join("publish/assets");
        std::fs::create_dir_all(source.join("images")).unwrap();
        std::fs::write(source.join("images/avatar.png"), b"png").unwrap();
        std::fs::write(source.join("style.css"), "body {}").unwrap();

        assert!(!sync_assets(&source, &target).unwrap());
        assert_eq!(std::fs::read(target.join("images/avatar.png")).unwrap(), b"png");
        assert_eq!(std::fs::read_to_string(target.join("style.css")).unwrap(), "body {}");

        assert!(sync_assets(&source, &target).unwrap());
    }

    #[test]
    fn test_missing_source_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        assert!(sync_assets(root.join("assets"), root.join("publish/assets")).unwrap());
        assert!(!root.join("publish").exists());
    }
}
