// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};

use crate::{
    html_flake::{self, Shell},
    i18n::Locale,
    page::Page,
};

pub const INDEX_FILE_NAME: &str = "index.html";

/// Site-relative location of the page for `locale`. The default locale
/// lives at the root, the other one under its code.
pub fn page_path(locale: Locale, default: Locale) -> Utf8PathBuf {
    if locale == default {
        Utf8PathBuf::from(INDEX_FILE_NAME)
    } else {
        Utf8Path::new(locale.code()).join(INDEX_FILE_NAME)
    }
}

/// Relative link from the page of `from` to the page of `to`.
pub fn page_href(from: Locale, to: Locale, default: Locale) -> String {
    let target = page_path(to, default);
    let depth = page_path(from, default).components().count() - 1;
    format!("{}{}", "../".repeat(depth), target)
}

pub struct PageWriter<'a> {
    output: &'a Utf8Path,
    title: &'a str,
    head: &'a str,
    default: Locale,
}

impl<'a> PageWriter<'a> {
    pub fn new(output: &'a Utf8Path, title: &'a str, head: &'a str, default: Locale) -> Self {
        Self {
            output,
            title,
            head,
            default,
        }
    }

    /// Serialize `page` in its current locale. Return the written path.
    pub fn write(&self, page: &Page) -> eyre::Result<Utf8PathBuf> {
        let locale = page.current_lang();
        let lang_href = page_href(locale, locale.next(), self.default);
        let shell = Shell {
            title: self.title,
            head: self.head,
            lang_href: &lang_href,
        };
        let html = html_flake::html_doc(page, &shell);

        let path = self.output.join(page_path(locale, self.default));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| eyre!("failed to create directory `{}`", parent))?;
        }
        std::fs::write(&path, html).wrap_err_with(|| eyre!("failed to write page `{}`", path))?;
        Ok(path)
    }
}
