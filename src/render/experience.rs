// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use itertools::Itertools;

use crate::{
    html,
    i18n::{Record, Translator},
};

use super::{Renderer, Section};

fn html_task(task: &Record) -> String {
    format!(
        r#"
                  <li class="flex gap-2">
                    <span class="text-blue-500">•</span>
                    <span>
                      <strong class="text-gray-800 dark:text-gray-100">{}</strong>
                      {}
                    </span>
                  </li>
                "#,
        task.text("title"),
        task.text("desc")
    )
}

pub fn render(renderer: &Renderer, translator: &dyn Translator) -> String {
    let exp = translator.record(Section::Experience.key());
    let item = exp.field("item1");
    let decoration = &renderer.experience;

    let company = html!(a href = decoration.link, target = "_blank", rel = "noopener noreferrer",
      class = "hover:underline decoration-2 underline-offset-4 transition-all duration-300" =>
      (item.text("company")));

    let logo = format!(
        r#"<div class="w-48 shrink-0 flex justify-center">
              <img src="{}" class="max-h-24 w-auto object-contain" alt="">
            </div>"#,
        htmlize::escape_attribute(&decoration.logo)
    );

    let tasks = item.items("tasks").iter().map(html_task).join("");

    format!(
        r#"
    <section id="experience">
      <h2 class="text-2xl font-bold mb-10 flex items-center border-l-4 border-green-500 pl-4">{title}</h2>
      <div class="timeline-container space-y-16">
        <div class="relative">
          <div class="timeline-dot timeline-dot-green"></div>
          <div class="text-sm font-mono text-gray-500 mb-4 tracking-wide">{period}</div>
          <div class="flex flex-row items-center gap-8">
            {logo}
            <div class="flex-1">
              <h3 class="font-bold text-xl text-gray-900 dark:text-gray-100 mb-1">{company}</h3>
              <p class="text-green-600 dark:text-green-400 font-medium text-sm mb-4">{position}</p>
              <ul class="text-sm space-y-3 text-gray-600 dark:text-gray-400">
                {tasks}
              </ul>
            </div>
          </div>
        </div>
      </div>
    </section>
  "#,
        title = exp.text("title"),
        period = item.text("period"),
        logo = logo,
        company = company,
        position = item.text("position"),
        tasks = tasks,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        i18n::{Dictionary, Locale},
        render::tests::structure,
    };

    fn renderer() -> Renderer {
        Renderer::from_config(&Config::default())
    }

    #[test]
    fn test_tasks_in_stored_order() {
        let dict = Dictionary::from_json(
            Locale::En,
            r#"{ "experience": { "title": "Experience", "item1": {
                "company": "Lab", "position": "Intern",
                "tasks": [
                    { "title": "Second:", "desc": "b" },
                    { "title": "First:", "desc": "a" },
                    { "title": "Third:" }
                ]
            } } }"#,
        )
        .unwrap();
        let html = render(&renderer(), &dict);

        let second = html.find("Second:").unwrap();
        let first = html.find("First:").unwrap();
        let third = html.find("Third:").unwrap();
        assert!(second < first && first < third);
        assert_eq!(html.matches("<li ").count(), 3);
        assert!(html.contains("experience.item1.tasks.2.desc"));
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
        assert!(html.contains(">Lab</a></h3>"));
    }

    #[test]
    fn test_no_tasks() {
        let dict = Dictionary::from_json(Locale::En, r#"{ "experience": { "title": "Experience" } }"#).unwrap();
        let html = render(&renderer(), &dict);
        assert_eq!(html.matches("<li ").count(), 0);
        assert!(html.contains(">experience.item1.company</a></h3>"));
    }

    #[test]
    fn test_structure_ignores_dictionary_extras() {
        let en = Dictionary::from_json(
            Locale::En,
            r#"{ "experience": { "item1": { "company": "Lab", "link": "https://lab.example/" } } }"#,
        )
        .unwrap();
        let zh = Dictionary::from_json(Locale::Zh, r#"{ "experience": { "item1": { "company": "实验室" } } }"#).unwrap();

        let english = render(&renderer(), &en);
        let chinese = render(&renderer(), &zh);
        assert!(!english.contains("https://lab.example/"));
        assert!(english.contains(r#"<img src="./assets/images/lab.png""#));
        assert_eq!(structure(&english), structure(&chinese));
    }
}
