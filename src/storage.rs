// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};
use indexmap::IndexMap;

/// Client-local string key/value store that survives reloads.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> eyre::Result<()>;

    fn remove(&mut self, key: &str) -> eyre::Result<()>;
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage(IndexMap<String, String>);

#[cfg(test)]
impl MemoryStorage {
    pub fn with<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> eyre::Result<()> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> eyre::Result<()> {
        self.0.shift_remove(key);
        Ok(())
    }
}

/// JSON object on disk, rewritten on every change.
#[derive(Debug)]
pub struct FileStorage {
    path: Utf8PathBuf,
    entries: IndexMap<String, String>,
}

impl FileStorage {
    pub fn open<P: AsRef<Utf8Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref().to_owned();
        let entries = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)
                .wrap_err_with(|| eyre!("failed to parse storage file `{}`", path))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => IndexMap::new(),
            Err(err) => {
                return Err(err).wrap_err_with(|| eyre!("failed to read storage file `{}`", path))
            }
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) -> eyre::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| eyre!("failed to create directory `{}`", parent))?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)
            .wrap_err_with(|| eyre!("failed to write storage file `{}`", self.path))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> eyre::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> eyre::Result<()> {
        if self.entries.shift_remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
