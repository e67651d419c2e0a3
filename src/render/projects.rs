// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use itertools::Itertools;

use crate::{
    config::projects::ProjectDecoration,
    html,
    i18n::{Record, Translator},
};

use super::{tags::TagPalette, Renderer, Section};

fn html_project(project: &Record, decoration: &ProjectDecoration, palette: &TagPalette) -> String {
    let points = project
        .items("points")
        .iter()
        .map(|point| html!(li => (point.as_text())))
        .join("");
    let tags = project
        .items("tags")
        .iter()
        .map(|tag| palette.html_tag(&tag.as_text()))
        .join("");

    format!(
        r#"
      <div class="group flex flex-col md:flex-row rounded-3xl overflow-hidden border dark:border-gray-800 hover:shadow-2xl transition duration-300">
        <div class="md:w-1/3 bg-gray-100 dark:bg-gray-800 flex items-center justify-center p-4">
          <div class="text-center">
            <i class="fa-solid {icon} text-6xl text-{color}-500 mb-4"></i>
            <p class="text-xs font-mono text-gray-400">{tech}</p>
          </div>
        </div>
        <div class="p-8 md:w-2/3 bg-white dark:bg-darkCard">
          <h3 class="text-xl font-bold mb-3 group-hover:text-{color}-500 transition">{title}</h3>
          <p class="text-sm text-gray-500 mb-4 leading-relaxed">{description}</p>
          <ul class="text-xs space-y-2 text-gray-600 dark:text-gray-400 mb-6">
            {points}
          </ul>
          <div class="flex flex-wrap gap-2">
            {tags}
          </div>
        </div>
      </div>
    "#,
        icon = htmlize::escape_attribute(&decoration.icon),
        color = htmlize::escape_attribute(&decoration.color),
        tech = htmlize::escape_text(&decoration.tech),
        title = project.text("title"),
        description = project.text("description"),
        points = points,
        tags = tags,
    )
}

pub fn render(renderer: &Renderer, translator: &dyn Translator) -> String {
    let projects = translator.record(Section::Projects.key());

    let items = renderer
        .projects
        .iter()
        .map(|decoration| html_project(&projects.field(&decoration.key), decoration, &renderer.tags))
        .join("");

    format!(
        r#"
    <section id="projects">
      <h2 class="text-2xl font-bold mb-10 flex items-center border-l-4 border-purple-500 pl-4">{}</h2>
      <div class="space-y-10">
  {}</div></section>"#,
        projects.text("title"),
        items
    )
}
