// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use itertools::Itertools;

use crate::{html, i18n::Translator};

use super::{Renderer, Section};

pub fn render(renderer: &Renderer, translator: &dyn Translator) -> String {
    let about = translator.record(Section::About.key());

    let links = renderer
        .links
        .iter()
        .map(|link| {
            let class_name = format!("{} transition", link.hover);
            html!(a href = link.href, class = class_name.trim_start() =>
              (html!(i class = link.icon =>)))
        })
        .join("\n");

    format!(
        r#"
    <div class="w-44 h-44 rounded-full bg-gradient-to-tr from-blue-600 to-purple-600 p-1.5 shadow-2xl shrink-0">
      <img src="{avatar}" alt="{alt}" class="w-full h-full rounded-full object-cover border-4 border-white dark:border-darkBg">
    </div>
    <div class="flex-1 text-center md:text-left">
      <h1 class="text-4xl font-extrabold mb-4 tracking-tight">{name}</h1>
      <div class="text-lg leading-relaxed text-gray-700 dark:text-gray-300 space-y-4">
        <p class="text-justify leading-8">{title}</p>
      </div>
      <div class="flex justify-center md:justify-start space-x-6 mt-8 text-2xl text-gray-400">
        {links}
      </div>
    </div>
  "#,
        avatar = htmlize::escape_attribute(&renderer.avatar),
        alt = htmlize::escape_attribute(&renderer.author),
        name = about.text("name_full"),
        title = about.text("title"),
        links = links,
    )
}
