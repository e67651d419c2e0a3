// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use crate::i18n::Translator;

use super::Section;

pub fn render(translator: &dyn Translator) -> String {
    let publications = translator.record(Section::Publications.key());

    format!(
        r#"
    <section id="publications">
      <h2 class="text-2xl font-bold mb-10 flex items-center border-l-4 border-orange-500 pl-4">{}</h2>
      <div class="bg-gray-50 dark:bg-darkCard/50 p-8 rounded-3xl border border-dashed border-gray-300 dark:border-gray-700 text-center">
        <div class="inline-flex items-center justify-center w-12 h-12 rounded-full bg-orange-100 dark:bg-orange-900/30 text-orange-500 mb-4">
          <i class="fa-solid fa-feather-pointed text-xl"></i>
        </div>
        <p class="text-lg font-medium text-gray-700 dark:text-gray-300">{}</p>
        <p class="text-sm text-gray-500 mt-2">{}</p>
      </div>
    </section>
  "#,
        publications.text("title"),
        publications.text("comingSoon"),
        publications.text("focus")
    )
}
