// src/modules/page/application/services/field_projector.rs

//! One-shot projection of scalar profile fields onto the skeleton.
//!
//! A binding is applied only when its target exists and its value is
//! non-empty; otherwise the skeleton's placeholder stays.

use tracing::debug;

use crate::profile::domain::entities::Profile;
use crate::shared::dom::{Document, Element};

pub const CATEGORY_SEPARATOR: &str = ", ";

pub const AVATAR: &str = ".header__avatar img";
pub const NAME: &str = ".header__name";
pub const SPECIALIZATION: &str = ".header__specialization";
pub const EXPERIENCE_VALUE: &str = ".about__meta-item:nth-child(1) .about__meta-value";
pub const PROJECTS_VALUE: &str = ".about__meta-item:nth-child(2) .about__meta-value";
pub const FEEDBACK_VALUE: &str = ".about__meta-item:nth-child(3) .about__meta-value";
pub const CATEGORIES_VALUE: &str = ".about__meta-item:nth-child(4) .about__meta-value";
pub const EMAIL_LINK: &str = ".contacts__item:nth-child(1) .contacts__value a";
pub const PHONE_LINK: &str = ".contacts__item:nth-child(2) .contacts__value a";
pub const SKILLS_LIST: &str = ".skills__list";
pub const ABOUT_TEXT: &str = ".about__text";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Text,
    Attr(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub selector: &'static str,
    pub target: Target,
    pub value: Option<String>,
}

impl Binding {
    fn text(selector: &'static str, value: Option<String>) -> Self {
        Self {
            selector,
            target: Target::Text,
            value,
        }
    }

    fn attr(selector: &'static str, name: &'static str, value: Option<String>) -> Self {
        Self {
            selector,
            target: Target::Attr(name),
            value,
        }
    }
}

fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn nonzero(count: u64) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

pub fn bindings(profile: &Profile) -> Vec<Binding> {
    let performer = &profile.performer;
    let mut out = vec![
        Binding::attr(AVATAR, "src", present(profile.avatar.as_deref())),
        Binding::text(NAME, present(Some(&profile.full_name()))),
        Binding::text(SPECIALIZATION, present(profile.specialization.as_deref())),
        Binding::text(
            EXPERIENCE_VALUE,
            profile
                .experience
                .as_ref()
                .filter(|v| !v.is_blank())
                .map(ToString::to_string),
        ),
        Binding::text(PROJECTS_VALUE, nonzero(performer.completed_tasks.total_count)),
        Binding::text(FEEDBACK_VALUE, nonzero(performer.feedback.total_count)),
        Binding::text(
            CATEGORIES_VALUE,
            present(Some(&profile.categories.join(CATEGORY_SEPARATOR))),
        ),
    ];

    if let Some(contacts) = &profile.contacts {
        let email = present(contacts.email.as_deref());
        let phone = present(contacts.phone.as_deref());
        out.push(Binding::attr(
            EMAIL_LINK,
            "href",
            email.as_ref().map(|e| format!("mailto:{}", e)),
        ));
        out.push(Binding::text(EMAIL_LINK, email));
        out.push(Binding::attr(
            PHONE_LINK,
            "href",
            phone.as_ref().map(|p| format!("tel:{}", p)),
        ));
        out.push(Binding::text(PHONE_LINK, phone));
    }

    out
}

/// Applies every binding that has both a target and a value. Returns the
/// number applied.
pub fn apply_bindings(doc: &mut Document, bindings: Vec<Binding>) -> usize {
    let mut applied = 0;
    for binding in bindings {
        let Some(value) = binding.value else {
            continue;
        };
        let Some(node) = doc.query_selector(binding.selector) else {
            debug!("No element for {}, keeping placeholder", binding.selector);
            continue;
        };
        match binding.target {
            Target::Text => doc.set_text(node, value),
            Target::Attr(name) => doc.set_attr(node, name, value),
        }
        applied += 1;
    }
    applied
}

pub fn project_profile(doc: &mut Document, profile: &Profile) -> usize {
    apply_bindings(doc, bindings(profile))
}

/// Replaces the skills list with one chip per skill. An empty list keeps
/// the placeholder chips.
pub fn render_skills(doc: &mut Document, skills: &[String]) -> bool {
    if skills.is_empty() {
        return false;
    }
    let Some(container) = doc.query_selector(SKILLS_LIST) else {
        return false;
    };
    doc.replace_children(
        container,
        skills
            .iter()
            .map(|skill| Element::new("div").class("skills__item fade-in").text(skill.trim())),
    );
    true
}

pub fn render_about(doc: &mut Document, about: Option<&str>) -> bool {
    let Some(text) = present(about) else {
        return false;
    };
    let Some(container) = doc.query_selector(ABOUT_TEXT) else {
        return false;
    };
    doc.replace_children(container, [Element::new("p").text(text)]);
    true
}
