//! Constellation: each topic is a cluster of stars, one star per question.
//! Harder questions shine brighter; missed ones flicker.

use crate::registry::Category;
use crate::views::markup::Markup;
use crate::views::model::{group_by_topic, Difficulty};
use crate::views::{RenderError, Renderable, ViewData};

pub const CATEGORY: Category = Category::Question;
pub const TITLE: &str = "View 4: Constellation";
pub const VIEW_ID: u32 = 4;

pub struct ConstellationView;

fn magnitude(difficulty: Difficulty) -> u8 {
    match difficulty {
        Difficulty::Easy => 1,
        Difficulty::Medium => 2,
        Difficulty::Hard => 3,
    }
}

impl Renderable for ConstellationView {
    fn render(&self, data: &ViewData) -> Result<Markup, RenderError> {
        let questions = data.questions()?;
        let mut markup = Markup::section(VIEW_ID, "constellation", TITLE);

        markup.open("div", "sky");
        for (index, (topic, stars)) in group_by_topic(questions).into_iter().enumerate() {
            markup.open_with("figure", "cluster", &[("data-cluster", index.to_string())]);
            markup.element("figcaption", "cluster-name", topic);
            for star in stars {
                let class = if star.answered && !star.correct {
                    "star flicker"
                } else if star.answered {
                    "star lit"
                } else {
                    "star dim"
                };
                markup
                    .open_with(
                        "span",
                        class,
                        &[
                            ("data-question", star.id.to_string()),
                            ("data-magnitude", magnitude(star.difficulty).to_string()),
                        ],
                    )
                    .close("span");
            }
            markup.close("figure");
        }
        markup.close("div");

        Ok(markup.end_section())
    }
}
