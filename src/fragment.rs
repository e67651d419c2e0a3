// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::{collections::HashMap, fmt::Display};

use camino::{Utf8Path, Utf8PathBuf};
use eyre::WrapErr;
use itertools::Itertools;
use url::Url;

use crate::{config::fragments::Fragment, container::ContainerId, document::Document, i18n::Translator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The resource answered with a non-success status.
    Status { resource: String, status: u16 },

    /// The resource could not be reached at all.
    Transport { resource: String, message: String },
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Status { resource, status } => {
                write!(f, "Failed to fetch {}: {}", resource, status)
            }
            FetchError::Transport { resource, message } => {
                write!(f, "Failed to fetch {}: {}", resource, message)
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Where fragments come from. Fetches run on worker threads.
pub trait FragmentSource: Sync {
    fn fetch(&self, resource: &str) -> Result<String, FetchError>;
}

/// Fetches `http(s)://` resources over the network and reads everything
/// else relative to the site root.
pub struct SiteSource {
    root: Utf8PathBuf,
    client: reqwest::blocking::Client,
}

impl SiteSource {
    pub fn new<P: AsRef<Utf8Path>>(root: P) -> eyre::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .wrap_err("failed to create HTTP client")?;
        Ok(Self {
            root: root.as_ref().to_owned(),
            client,
        })
    }

    fn fetch_url(&self, url: Url, resource: &str) -> Result<String, FetchError> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            resource: resource.to_string(),
            message: e.to_string(),
        };
        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(transport)
    }

    fn fetch_file(&self, path: &Utf8Path, resource: &str) -> Result<String, FetchError> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FetchError::Status {
                resource: resource.to_string(),
                status: 404,
            },
            _ => FetchError::Transport {
                resource: resource.to_string(),
                message: e.to_string(),
            },
        })
    }
}

impl FragmentSource for SiteSource {
    fn fetch(&self, resource: &str) -> Result<String, FetchError> {
        match Url::parse(resource) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self.fetch_url(url, resource),
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .ok()
                    .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
                    .ok_or_else(|| FetchError::Transport {
                        resource: resource.to_string(),
                        message: "not a local UTF-8 path".to_string(),
                    })?;
                self.fetch_file(&path, resource)
            }
            Ok(url) => Err(FetchError::Transport {
                resource: resource.to_string(),
                message: format!("unsupported scheme `{}`", url.scheme()),
            }),
            Err(_) => self.fetch_file(&self.root.join(resource), resource),
        }
    }
}

/// Markup shown in place of a fragment that failed to load.
pub fn error_html(resource: &str) -> String {
    format!(
        r#"<p class="text-red-500">Failed to load {}</p>"#,
        htmlize::escape_text(resource)
    )
}

/// Loads a declarative list of fragments into their containers.
pub struct FragmentLoader<'a> {
    fragments: &'a [Fragment],
}

impl<'a> FragmentLoader<'a> {
    pub fn new(fragments: &'a [Fragment]) -> Self {
        Self { fragments }
    }

    /// Load a single fragment into its container. A missing container
    /// only logs a warning.
    pub fn load_component(
        document: &mut Document,
        id: ContainerId,
        resource: &str,
        source: &dyn FragmentSource,
        translator: Option<&dyn Translator>,
    ) {
        if !document.has_container(id) {
            color_print::ceprintln!("<y>Warning: Container element not found: {}</>", id);
            return;
        }
        match source.fetch(resource) {
            Ok(html) => {
                document.set_content(id, html);
                if let Some(translator) = translator {
                    document.rehydrate_container(id, translator);
                }
            }
            Err(err) => {
                color_print::ceprintln!("<r>Error loading component {}: {}</>", resource, err);
                document.set_content(id, error_html(resource));
            }
        }
    }

    /// Fetch every fragment concurrently, then load them into their
    /// containers in declaration order. A failure only affects its own
    /// container. Containers for which `skip` holds are left untouched.
    pub fn load_all<F>(
        &self,
        document: &mut Document,
        source: &dyn FragmentSource,
        translator: Option<&dyn Translator>,
        skip: F,
    ) where
        F: Fn(ContainerId) -> bool,
    {
        let pending: Vec<&Fragment> = self.fragments.iter().filter(|fragment| !skip(fragment.id)).collect();
        let fetched = Prefetched::new(
            pending
                .iter()
                .copied()
                .filter(|fragment| document.has_container(fragment.id))
                .map(|fragment| fragment.resource.as_str()),
            source,
        );

        for fragment in pending {
            Self::load_component(document, fragment.id, &fragment.resource, &fetched, translator);
        }
    }
}

/// Responses fetched ahead of time, one worker thread per resource.
struct Prefetched<'a>(HashMap<&'a str, Result<String, FetchError>>);

impl<'a> Prefetched<'a> {
    fn new<I>(resources: I, source: &dyn FragmentSource) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let resources: Vec<&str> = resources.into_iter().unique().collect();
        let responses: HashMap<&'a str, Result<String, FetchError>> = std::thread::scope(|scope| {
            let handles: Vec<_> = resources
                .into_iter()
                .map(|resource| (resource, scope.spawn(move || source.fetch(resource))))
                .collect();

            handles
                .into_iter()
                .map(|(resource, handle)| {
                    let result = handle.join().unwrap_or_else(|_| {
                        Err(FetchError::Transport {
                            resource: resource.to_string(),
                            message: "fetch panicked".to_string(),
                        })
                    });
                    (resource, result)
                })
                .collect()
        });
        Self(responses)
    }
}

impl FragmentSource for Prefetched<'_> {
    fn fetch(&self, resource: &str) -> Result<String, FetchError> {
        self.0.get(resource).cloned().unwrap_or_else(|| {
            Err(FetchError::Transport {
                resource: resource.to_string(),
                message: "not fetched".to_string(),
            })
        })
    }
}

/// Resolve the local directories fragments are read from, for watching.
pub fn local_dirs(root: &Utf8Path, fragments: &[Fragment]) -> Vec<Utf8PathBuf> {
    let mut dirs: Vec<Utf8PathBuf> = vec![];
    for fragment in fragments {
        if Url::parse(&fragment.resource).is_ok() {
            continue;
        }
        let Some(dir) = root.join(&fragment.resource).parent().map(Utf8Path::to_owned) else {
            continue;
        };
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}
