//! Bookshelf: practice sets as books on a shelf, spine height by question
//! count, one shelf per subject.

use crate::registry::Category;
use crate::views::markup::Markup;
use crate::views::model::{format_percent, PracticeSet};
use crate::views::{RenderError, Renderable, ViewData};
use std::collections::BTreeMap;

pub const CATEGORY: Category = Category::Set;
pub const TITLE: &str = "View 1: Bookshelf";
pub const VIEW_ID: u32 = 1;

pub struct BookshelfView;

impl Renderable for BookshelfView {
    fn render(&self, data: &ViewData) -> Result<Markup, RenderError> {
        let sets = data.sets()?;
        let mut markup = Markup::section(VIEW_ID, "bookshelf", TITLE);

        let mut shelves: BTreeMap<&str, Vec<&PracticeSet>> = BTreeMap::new();
        for set in sets {
            shelves.entry(set.subject.as_str()).or_default().push(set);
        }

        for (subject, books) in shelves {
            markup.open_with("div", "shelf", &[("data-subject", subject.to_string())]);
            markup.element("h3", "shelf-label", subject);
            for book in books {
                let progress = format!("{}/{}", book.answered(), book.questions.len());
                markup.open_with(
                    "article",
                    "book",
                    &[
                        ("data-set", book.id.to_string()),
                        ("data-height", book.questions.len().to_string()),
                    ],
                );
                markup.element("span", "spine", &book.title);
                markup.element("span", "progress", &progress);
                markup.element("span", "accuracy", &format_percent(book.accuracy()));
                markup.close("article");
            }
            markup.close("div");
        }

        Ok(markup.end_section())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(id: u32, title: &str, subject: &str) -> PracticeSet {
        PracticeSet {
            id,
            title: title.to_string(),
            subject: subject.to_string(),
            questions: vec![],
        }
    }

    #[test]
    fn test_one_shelf_per_subject() {
        let data = ViewData::Set {
            sets: vec![
                set(1, "Heart of Algebra", "Math"),
                set(2, "Command of Evidence", "Reading"),
                set(3, "Problem Solving", "Math"),
            ],
        };
        let html = BookshelfView.render(&data).unwrap().into_string();

        assert_eq!(html.matches("class=\"shelf\"").count(), 2);
        assert_eq!(html.matches("<article").count(), 3);
        assert!(html.contains("<span class=\"progress\">0/0</span>"));
    }
}
