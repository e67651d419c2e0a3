// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use itertools::Itertools;

use crate::{
    html,
    html_macro::html_attr,
    i18n::Translator,
    markup::I18N_ATTRIBUTE,
    page::Page,
    render::Section,
    toggle::{LANG_TOGGLE_CLASS, MOBILE_MENU_CLASS, MOBILE_MENU_TOGGLE_CLASS, THEME_TOGGLE_CLASS},
};

/// Values of the page shell that come from the site rather than the page state.
pub struct Shell<'a> {
    pub title: &'a str,

    /// Extra markup appended to `<head>`.
    pub head: &'a str,

    /// Where the lang toggle leads: the page of the other locale.
    pub lang_href: &'a str,
}

fn nav_key(section: Section) -> String {
    format!("nav.{}", section.key())
}

fn html_nav_links(translator: &dyn Translator, class_name: &str) -> String {
    Section::ALL
        .iter()
        .map(|&section| {
            let key = nav_key(section);
            html!(a href = format!("#{}", section.key()), class = class_name, data_i18n = key =>
              (translator.get(&key).text()))
        })
        .join("\n")
}

fn html_header(page: &Page, shell: &Shell) -> String {
    let translator = page.translator();
    let lang_label = page.document.control_label(LANG_TOGGLE_CLASS).unwrap_or_default();

    let mut menu_class = vec![MOBILE_MENU_CLASS, "md:hidden", "px-6", "pb-4", "space-y-2"];
    if page.menu.hidden {
        menu_class.push("hidden");
    }

    let controls = format!(
        "{}{}{}",
        html!(button class = format!("{} p-2 rounded-full", THEME_TOGGLE_CLASS), aria_label = "Toggle theme" =>
          (html!(i class = "fa-solid fa-circle-half-stroke" =>))),
        html!(a href = shell.lang_href, class = format!("{} px-3 py-1 rounded-full border", LANG_TOGGLE_CLASS) =>
          (htmlize::escape_text(lang_label))),
        html!(button class = format!("{} md:hidden p-2", MOBILE_MENU_TOGGLE_CLASS), aria_label = "Menu" =>
          (html!(i class = "fa-solid fa-bars" =>))),
    );

    html!(header class = "fixed top-0 inset-x-0 z-50 backdrop-blur bg-white/80 dark:bg-darkBg/80" =>
      (html!(nav class = "max-w-5xl mx-auto px-6 h-16 flex items-center justify-between" =>
        (html!(a href = "#about", class = "font-bold text-lg" => (htmlize::escape_text(shell.title))))
        (html!(div class = "hidden md:flex space-x-6 text-sm" => (html_nav_links(translator, "nav-link"))))
        (html!(div class = "flex items-center space-x-2" => (controls)))))
      (html!(div class = menu_class.join(" ") => (html_nav_links(translator, "block py-1")))))
}

fn html_main(page: &Page) -> String {
    page.document
        .containers()
        .map(|(id, content)| {
            let container = html!(div id = id => "\n" (content) "\n");
            match Section::from_container_id(id) {
                Some(Section::About) => html!(section id = Section::About.key(),
                    class = "flex flex-col md:flex-row items-center gap-12 mb-24" => (container)),
                _ => container,
            }
        })
        .join("\n")
}

fn html_root_attrs(page: &Page) -> String {
    let root = &page.document.root;
    let mut attrs = root
        .attributes()
        .map(|(name, value)| html_attr(name, value))
        .join("");
    let classes = root.class_list();
    if !classes.is_empty() {
        attrs.push_str(&html_attr("class", &classes));
    }
    attrs
}

/// Serialize the composed page into a complete HTML document.
pub fn html_doc(page: &Page, shell: &Shell) -> String {
    let head = html!(head => r#"
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
"#
      (html!(title => (htmlize::escape_text(shell.title))))
      "\n"
      (shell.head));

    let body = html!(body class = "bg-white dark:bg-darkBg text-gray-900 dark:text-gray-100",
        data_header_offset = page.scroll.header_offset =>
      (html_header(page, shell))
      (html!(main class = "max-w-5xl mx-auto px-6 pt-28 pb-16 space-y-24" => (html_main(page))))
      (html!(script => (include_str!("include/page.js")))));

    format!("<!DOCTYPE html>\n<html{}>\n{}\n{}\n</html>\n", html_root_attrs(page), head, body)
}

/// Translation key attribute, spelled out for hand-written fragments.
pub fn i18n_attr(key: &str) -> String {
    html_attr(I18N_ATTRIBUTE, key)
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;

    use super::*;
    use crate::{config::Config, render::tests::{EN, ZH}, storage::MemoryStorage};

    fn page(storage: MemoryStorage) -> (tempfile::TempDir, Page) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), EN).unwrap();
        std::fs::write(dir.path().join("zh.json"), ZH).unwrap();
        let page = Page::new(
            &Config::default(),
            Utf8Path::from_path(dir.path()).unwrap(),
            Box::new(storage),
        );
        (dir, page)
    }

    fn shell() -> Shell<'static> {
        Shell {
            title: "Jane & Co",
            head: r#"<link rel="stylesheet" href="style.css">"#,
            lang_href: "zh/",
        }
    }

    #[test]
    fn test_doc_reflects_state() {
        let (_dir, mut page) = page(MemoryStorage::with([("theme", "dark")]));
        page.load_dictionary().unwrap();
        let html = html_doc(&page, &shell());

        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains(r#"lang="en""#));
        assert!(html.contains(r#"class="dark""#));
        assert!(html.contains("<title>Jane &amp; Co</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="style.css">"#));
        assert!(html.contains(r#"data-header-offset="80""#));
        assert!(html.contains(r##"<a href="#projects" class="nav-link" data-i18n="nav.projects">Projects</a>"##));
        assert!(html.contains(r#"href="zh/" class="lang-toggle"#));
        assert!(html.contains(">中</a>"));
        assert!(html.contains(r#"class="mobile-menu md:hidden px-6 pb-4 space-y-2 hidden""#));
        for section in Section::ALL {
            assert!(html.contains(&format!(r#"<div id="{}">"#, section.container_id())));
        }
        assert!(html.contains(r#"<section id="about""#));
    }

    #[test]
    fn test_script_uses_emitted_hooks() {
        let (_dir, page) = page(MemoryStorage::default());
        let html = html_doc(&page, &shell());
        assert!(html.contains("dataset.headerOffset"));
        for class in [THEME_TOGGLE_CLASS, MOBILE_MENU_TOGGLE_CLASS, MOBILE_MENU_CLASS] {
            assert!(html.contains(&format!("'.{}'", class)), "script does not bind {}", class);
        }
    }

    #[test]
    fn test_doc_light_open_menu() {
        let (_dir, mut page) = page(MemoryStorage::default());
        page.menu.hidden = false;
        page.switch_locale(crate::i18n::Locale::Zh).unwrap();
        let html = html_doc(&page, &shell());

        assert!(html.contains(r#"<html data-theme="light" lang="zh-CN">"#));
        assert!(html.contains(r#"class="mobile-menu md:hidden px-6 pb-4 space-y-2""#));
        assert!(html.contains(">EN</a>"));
    }

    #[test]
    fn test_i18n_attr() {
        assert_eq!(i18n_attr("about.title"), r#" data-i18n="about.title""#);
    }
}
