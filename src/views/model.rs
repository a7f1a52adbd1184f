//! Practice data consumed by view variants

use super::RenderError;
use crate::registry::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub answered: bool,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSet {
    pub id: u32,
    pub title: String,
    pub subject: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl PracticeSet {
    pub fn accuracy(&self) -> Option<f64> {
        accuracy(&self.questions)
    }

    pub fn answered(&self) -> usize {
        self.questions.iter().filter(|q| q.answered).count()
    }
}

/// One completed practice session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub set_id: u32,
    pub title: String,
    pub correct: u32,
    pub total: u32,
}

impl TimelineEntry {
    pub fn percent(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(f64::from(self.correct) * 100.0 / f64::from(self.total))
    }
}

/// Input handed to a renderable, tagged by the category it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum ViewData {
    Question { questions: Vec<Question> },
    Set { sets: Vec<PracticeSet> },
    Timeline { entries: Vec<TimelineEntry> },
}

impl ViewData {
    pub fn category(&self) -> Category {
        match self {
            ViewData::Question { .. } => Category::Question,
            ViewData::Set { .. } => Category::Set,
            ViewData::Timeline { .. } => Category::Timeline,
        }
    }

    pub fn questions(&self) -> Result<&[Question], RenderError> {
        match self {
            ViewData::Question { questions } => Ok(questions),
            other => Err(other.mismatch(Category::Question)),
        }
    }

    pub fn sets(&self) -> Result<&[PracticeSet], RenderError> {
        match self {
            ViewData::Set { sets } => Ok(sets),
            other => Err(other.mismatch(Category::Set)),
        }
    }

    pub fn timeline(&self) -> Result<&[TimelineEntry], RenderError> {
        match self {
            ViewData::Timeline { entries } => Ok(entries),
            other => Err(other.mismatch(Category::Timeline)),
        }
    }

    fn mismatch(&self, expected: Category) -> RenderError {
        RenderError::CategoryMismatch {
            expected,
            actual: self.category(),
        }
    }
}

/// Percentage of answered questions answered correctly
pub fn accuracy<'a>(questions: impl IntoIterator<Item = &'a Question>) -> Option<f64> {
    let (answered, correct) = questions
        .into_iter()
        .filter(|q| q.answered)
        .fold((0usize, 0usize), |(answered, correct), q| {
            (answered + 1, correct + usize::from(q.correct))
        });
    if answered == 0 {
        return None;
    }
    Some(correct as f64 * 100.0 / answered as f64)
}

pub fn group_by_topic<'a>(
    questions: impl IntoIterator<Item = &'a Question>,
) -> BTreeMap<&'a str, Vec<&'a Question>> {
    let mut groups: BTreeMap<&str, Vec<&Question>> = BTreeMap::new();
    for question in questions {
        groups.entry(question.topic.as_str()).or_default().push(question);
    }
    groups
}

pub fn group_by_subject<'a>(
    questions: impl IntoIterator<Item = &'a Question>,
) -> BTreeMap<&'a str, Vec<&'a Question>> {
    let mut groups: BTreeMap<&str, Vec<&Question>> = BTreeMap::new();
    for question in questions {
        groups
            .entry(question.subject.as_str())
            .or_default()
            .push(question);
    }
    groups
}

/// Formats an accuracy value for display, `-` when nothing was answered
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.0}%", v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, topic: &str, answered: bool, correct: bool) -> Question {
        Question {
            id,
            subject: "Math".to_string(),
            topic: topic.to_string(),
            difficulty: Difficulty::Medium,
            answered,
            correct,
        }
    }

    #[test]
    fn test_accuracy_ignores_unanswered() {
        let questions = vec![
            question(1, "Algebra", true, true),
            question(2, "Algebra", true, false),
            question(3, "Geometry", false, false),
            question(4, "Geometry", true, true),
        ];
        let value = accuracy(&questions).unwrap();
        assert!((value - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_accuracy_none_when_nothing_answered() {
        assert_eq!(accuracy(&[question(1, "Algebra", false, false)]), None);
        assert_eq!(format_percent(None), "-");
    }

    #[test]
    fn test_group_by_topic_sorted() {
        let questions = vec![
            question(1, "Geometry", true, true),
            question(2, "Algebra", true, false),
            question(3, "Geometry", false, false),
        ];
        let groups = group_by_topic(&questions);
        let topics: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(topics, vec!["Algebra", "Geometry"]);
        assert_eq!(groups["Geometry"].len(), 2);
    }

    #[test]
    fn test_view_data_json_tagged_by_category() {
        let json = r#"{
            "category": "timeline",
            "entries": [
                {"date": "2026-03-14", "set_id": 2, "title": "Linear equations", "correct": 8, "total": 10}
            ]
        }"#;
        let data: ViewData = serde_json::from_str(json).unwrap();
        assert_eq!(data.category(), Category::Timeline);
        assert_eq!(data.timeline().unwrap()[0].percent(), Some(80.0));
    }

    #[test]
    fn test_view_data_mismatch() {
        let data = ViewData::Set { sets: vec![] };
        let err = data.questions().unwrap_err();
        assert_eq!(
            err,
            RenderError::CategoryMismatch {
                expected: Category::Question,
                actual: Category::Set,
            }
        );
    }
}
