//! Knowledge tree: questions branch out by subject, then by topic, with each
//! leaf coloured by whether it was answered correctly.

use crate::registry::Category;
use crate::views::markup::Markup;
use crate::views::model::{accuracy, format_percent, group_by_subject, group_by_topic};
use crate::views::{RenderError, Renderable, ViewData};

pub const CATEGORY: Category = Category::Question;
pub const TITLE: &str = "View 3: Knowledge Tree";
pub const VIEW_ID: u32 = 3;

pub struct KnowledgeTreeView;

impl Renderable for KnowledgeTreeView {
    fn render(&self, data: &ViewData) -> Result<Markup, RenderError> {
        let questions = data.questions()?;
        let mut markup = Markup::section(VIEW_ID, "knowledge-tree", TITLE);

        if questions.is_empty() {
            markup.element("p", "empty", "No questions to grow a tree from yet.");
            return Ok(markup.end_section());
        }

        markup.open("ul", "tree");
        for (subject, subject_questions) in group_by_subject(questions) {
            markup.open("li", "branch");
            markup.element("span", "branch-label", subject);
            markup.element(
                "span",
                "branch-accuracy",
                &format_percent(accuracy(subject_questions.iter().copied())),
            );

            markup.open("ul", "twigs");
            for (topic, topic_questions) in group_by_topic(subject_questions) {
                markup.open("li", "twig");
                markup.element("span", "twig-label", topic);
                markup.open("ul", "leaves");
                for question in topic_questions {
                    let state = match (question.answered, question.correct) {
                        (false, _) => "leaf pending",
                        (true, true) => "leaf correct",
                        (true, false) => "leaf missed",
                    };
                    markup
                        .open_with(
                            "li",
                            state,
                            &[("data-difficulty", question.difficulty.as_str().to_string())],
                        )
                        .text(&format!("Q{}", question.id))
                        .close("li");
                }
                markup.close("ul").close("li");
            }
            markup.close("ul").close("li");
        }
        markup.close("ul");

        Ok(markup.end_section())
    }
}
