//! Accuracy heatmap: one row per practice set, one cell per topic, shaded by
//! how often the topic's questions were answered correctly.

use crate::registry::Category;
use crate::views::markup::Markup;
use crate::views::model::{accuracy, format_percent, group_by_topic};
use crate::views::{RenderError, Renderable, ViewData};
use std::collections::BTreeSet;

pub const CATEGORY: Category = Category::Set;
pub const TITLE: &str = "View 2: Accuracy Heatmap";
pub const VIEW_ID: u32 = 2;

pub struct AccuracyHeatmapView;

fn heat(value: Option<f64>) -> &'static str {
    match value {
        None => "cell heat-none",
        Some(v) if v >= 80.0 => "cell heat-high",
        Some(v) if v >= 50.0 => "cell heat-mid",
        Some(_) => "cell heat-low",
    }
}

impl Renderable for AccuracyHeatmapView {
    fn render(&self, data: &ViewData) -> Result<Markup, RenderError> {
        let sets = data.sets()?;
        let mut markup = Markup::section(VIEW_ID, "accuracy-heatmap", TITLE);

        let topics: BTreeSet<&str> = sets
            .iter()
            .flat_map(|set| set.questions.iter().map(|q| q.topic.as_str()))
            .collect();

        markup.open("table", "heatmap");
        markup.open("tr", "").element("th", "", "Set");
        for topic in &topics {
            markup.element("th", "topic", topic);
        }
        markup.close("tr");

        for set in sets {
            let by_topic = group_by_topic(&set.questions);
            markup.open_with("tr", "", &[("data-set", set.id.to_string())]);
            markup.element("th", "set-title", &set.title);
            for topic in &topics {
                let value = by_topic
                    .get(topic)
                    .and_then(|questions| accuracy(questions.iter().copied()));
                markup.element("td", heat(value), &format_percent(value));
            }
            markup.close("tr");
        }
        markup.close("table");

        Ok(markup.end_section())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::model::{Difficulty, PracticeSet, Question};

    fn answered(id: u32, topic: &str, correct: bool) -> Question {
        Question {
            id,
            subject: "Math".to_string(),
            topic: topic.to_string(),
            difficulty: Difficulty::Medium,
            answered: true,
            correct,
        }
    }

    #[test]
    fn test_heat_buckets() {
        assert_eq!(heat(None), "cell heat-none");
        assert_eq!(heat(Some(95.0)), "cell heat-high");
        assert_eq!(heat(Some(50.0)), "cell heat-mid");
        assert_eq!(heat(Some(10.0)), "cell heat-low");
    }

    #[test]
    fn test_topic_columns_shared_across_sets() {
        let data = ViewData::Set {
            sets: vec![
                PracticeSet {
                    id: 1,
                    title: "Diagnostic".to_string(),
                    subject: "Math".to_string(),
                    questions: vec![answered(1, "Algebra", true), answered(2, "Geometry", false)],
                },
                PracticeSet {
                    id: 2,
                    title: "Drill".to_string(),
                    subject: "Math".to_string(),
                    questions: vec![answered(3, "Algebra", false)],
                },
            ],
        };
        let html = AccuracyHeatmapView.render(&data).unwrap().into_string();

        assert_eq!(html.matches("class=\"topic\"").count(), 2);
        assert!(html.contains("<td class=\"cell heat-none\">-</td>"));
        assert!(html.contains("<td class=\"cell heat-high\">100%</td>"));
    }
}
