// src/modules/page/application/services/templates.rs

//! Per-item shapes. Each card is a typed record built from one entity and
//! turned into an element tree; no template ever sees raw markup.

use chrono::DateTime;

use crate::page::domain::Section;
use crate::profile::domain::entities::{CompletedTask, Testimonial, WorkSample};
use crate::profile::domain::rating::StarRating;
use crate::shared::dom::Element;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+image";
pub const NO_COMMENT: &str = "No comment";
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Unix seconds to `dd.mm.yyyy` in UTC. Out-of-range timestamps render empty.
pub fn format_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkSampleCard {
    pub image_url: String,
    pub title: String,
    pub description: String,
}

impl From<&WorkSample> for WorkSampleCard {
    fn from(item: &WorkSample) -> Self {
        Self {
            image_url: item
                .images
                .first()
                .filter(|url| !url.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            title: item.title.clone(),
            description: item.description.clone(),
        }
    }
}

impl WorkSampleCard {
    pub fn into_element(self) -> Element {
        Element::new("div")
            .class("portfolio__item")
            .child(
                Element::new("img")
                    .class("portfolio__image")
                    .attr("src", self.image_url)
                    .attr("alt", self.title.clone()),
            )
            .child(
                Element::new("div")
                    .class("portfolio__content")
                    .child(Element::new("h3").class("portfolio__title").text(self.title))
                    .child(
                        Element::new("p")
                            .class("portfolio__description")
                            .text(self.description),
                    ),
            )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialCard {
    pub comment: String,
    pub date: String,
    pub stars: StarRating,
    pub score: f64,
}

impl From<&Testimonial> for TestimonialCard {
    fn from(item: &Testimonial) -> Self {
        Self {
            comment: item
                .comment
                .as_deref()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or(NO_COMMENT)
                .to_string(),
            date: format_date(item.created_at),
            stars: StarRating::from_score(item.score),
            score: item.score,
        }
    }
}

impl TestimonialCard {
    pub fn into_element(self) -> Element {
        Element::new("div")
            .class("testimonial__item")
            .child(
                Element::new("div")
                    .class("testimonial__text")
                    .text(self.comment),
            )
            .child(Element::new("div").class("testimonial__date").text(self.date))
            .child(
                Element::new("div")
                    .class("testimonial__rating")
                    .text(format!("{} ({})", self.stars, self.score)),
            )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedTaskCard {
    pub title: String,
    pub date: String,
    pub description: String,
    pub skills: String,
    pub price: String,
}

impl From<&CompletedTask> for CompletedTaskCard {
    fn from(task: &CompletedTask) -> Self {
        Self {
            title: task.title.clone(),
            date: format_date(task.created_at),
            description: task.description.clone(),
            skills: task.skills.clone(),
            price: task
                .price
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

impl CompletedTaskCard {
    pub fn into_element(self) -> Element {
        Element::new("div")
            .class("completed-task__item")
            .child(
                Element::new("div")
                    .class("completed-task__header")
                    .child(
                        Element::new("h3")
                            .class("completed-task__title")
                            .text(self.title),
                    )
                    .child(
                        Element::new("div")
                            .class("completed-task__date")
                            .text(self.date),
                    ),
            )
            .child(
                Element::new("div")
                    .class("completed-task__description")
                    .text(self.description),
            )
            .child(
                Element::new("div")
                    .class("completed-task__footer")
                    .child(
                        Element::new("div")
                            .class("completed-task__skills")
                            .text(self.skills),
                    )
                    .child(
                        Element::new("div")
                            .class("completed-task__price")
                            .text(self.price),
                    ),
            )
    }
}

pub fn work_sample(item: &WorkSample) -> Element {
    WorkSampleCard::from(item).into_element()
}

pub fn testimonial(item: &Testimonial) -> Element {
    TestimonialCard::from(item).into_element()
}

pub fn completed_task(item: &CompletedTask) -> Element {
    CompletedTaskCard::from(item).into_element()
}

/// The "show more" button appended after a partially revealed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowMoreControl {
    pub section: Section,
    pub shown: usize,
    pub remaining: usize,
}

impl ShowMoreControl {
    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }

    pub fn into_element(self) -> Element {
        Element::new("button")
            .class("show-more")
            .attr("type", "button")
            .attr("data-section", self.section.slug())
            .attr("data-shown", self.shown.to_string())
            .attr("data-href", self.section.reveal_path(self.shown))
            .text(self.label())
    }
}
