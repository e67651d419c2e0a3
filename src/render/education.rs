// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use crate::{html, i18n::Translator};

use super::{Renderer, Section};

pub fn render(renderer: &Renderer, translator: &dyn Translator) -> String {
    let edu = translator.record(Section::Education.key());
    let item = edu.field("item1");
    let decoration = &renderer.education;

    let logo = format!(
        r#"<div class="w-48 shrink-0 flex justify-center">
              <img src="{}" class="max-h-24 w-auto object-contain transition-transform duration-300 hover:scale-105" alt="">
            </div>"#,
        htmlize::escape_attribute(&decoration.logo)
    );

    let department = html!(a href = decoration.link, target = "_blank", rel = "noopener noreferrer",
      class = "hover:text-blue-800 dark:hover:text-blue-300 underline-offset-2 hover:underline transition" =>
      (item.text("department")));

    format!(
        r#"
    <section id="education">
      <h2 class="text-2xl font-bold mb-10 flex items-center border-l-4 border-blue-500 pl-4">{title}</h2>
      <div class="timeline-container space-y-16">
        <div class="relative">
          <div class="timeline-dot"></div>
          <div class="text-sm font-mono text-gray-500 mb-4 tracking-wide">{period}</div>
          <div class="flex flex-row items-center gap-8">
            {logo}
            <div class="flex-1 space-y-1">
              <h3 class="font-bold text-xl text-gray-900 dark:text-gray-100">{school}</h3>
              <p class="text-blue-600 dark:text-blue-400 font-medium">
                {degree}
                {department}{degree_end}
              </p>
              <p class="text-sm text-gray-600 dark:text-gray-400">
                <i class="fa-solid fa-medal mr-1 text-orange-400"></i>{honor}
              </p>
            </div>
          </div>
        </div>
      </div>
    </section>
  "#,
        title = edu.text("title"),
        period = item.text("period"),
        logo = logo,
        school = item.text("school"),
        degree = item.text("degree"),
        department = department,
        degree_end = item.text("degreeEnd"),
        honor = item.text("honor"),
    )
}
