//! Study timeline: practice sessions in date order with their scores.

use crate::registry::Category;
use crate::views::markup::Markup;
use crate::views::model::{format_percent, TimelineEntry};
use crate::views::{RenderError, Renderable, ViewData};

pub const CATEGORY: Category = Category::Timeline;
pub const TITLE: &str = "View 5: Study Timeline";
pub const VIEW_ID: u32 = 5;

pub struct StudyTimelineView;

impl Renderable for StudyTimelineView {
    fn render(&self, data: &ViewData) -> Result<Markup, RenderError> {
        let mut entries: Vec<&TimelineEntry> = data.timeline()?.iter().collect();
        entries.sort_by_key(|entry| entry.date);

        let mut markup = Markup::section(VIEW_ID, "study-timeline", TITLE);
        markup.open("ol", "timeline");
        for entry in entries {
            markup.open_with(
                "li",
                "session",
                &[
                    ("data-set", entry.set_id.to_string()),
                    ("datetime", entry.date.format("%Y-%m-%d").to_string()),
                ],
            );
            markup.element("time", "", &entry.date.format("%b %-d, %Y").to_string());
            markup.element("span", "session-title", &entry.title);
            markup.element("span", "score", &format_percent(entry.percent()));
            markup.close("li");
        }
        markup.close("ol");

        Ok(markup.end_section())
    }
}
