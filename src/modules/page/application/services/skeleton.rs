// src/modules/page/application/services/skeleton.rs

//! Default page markup. Every element the renderers address exists here
//! with placeholder content that stays visible when data is missing.

use crate::page::domain::Section;
use crate::shared::dom::{Document, Element};

const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/150?text=Avatar";
const LOADING: &str = "Loading…";

/// Swaps a section's mount content for the fragment behind its control.
const SHOW_MORE_SCRIPT: &str = r#"
document.addEventListener('click', function (event) {
    var button = event.target.closest('.show-more');
    if (!button) return;
    var mount = button.parentElement;
    button.disabled = true;
    fetch(button.dataset.href)
        .then(function (response) {
            return response.text().then(function (html) {
                if (!response.ok && response.status !== 503) throw new Error(response.statusText);
                return html;
            });
        })
        .then(function (html) { mount.innerHTML = html; })
        .catch(function () { button.disabled = false; });
});
"#;

fn meta_item(label: &str) -> Element {
    Element::new("div")
        .class("about__meta-item")
        .child(Element::new("span").class("about__meta-label").text(label))
        .child(Element::new("span").class("about__meta-value").text("—"))
}

fn contact_item(label: &str, placeholder: &str) -> Element {
    Element::new("div")
        .class("contacts__item")
        .child(Element::new("span").class("contacts__label").text(label))
        .child(
            Element::new("div")
                .class("contacts__value")
                .child(Element::new("a").attr("href", "#").text(placeholder)),
        )
}

fn list_section(class: &str, heading: &str, section: Section, mount_class: &str) -> Element {
    Element::new("section")
        .class(class)
        .child(Element::new("h2").class("section__title").text(heading))
        .child(
            Element::new("div")
                .id(section.mount_id())
                .class(mount_class)
                .child(Element::new("p").text(LOADING)),
        )
}

pub fn default_skeleton() -> Document {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text("Portfolio"))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", "styles.css"),
        );

    let header = Element::new("header")
        .class("header")
        .child(
            Element::new("div").class("header__avatar").child(
                Element::new("img")
                    .attr("src", PLACEHOLDER_AVATAR)
                    .attr("alt", "Avatar"),
            ),
        )
        .child(
            Element::new("div")
                .class("header__info")
                .child(Element::new("h1").class("header__name").text("Your Name"))
                .child(
                    Element::new("p")
                        .class("header__specialization")
                        .text("Specialization"),
                ),
        );

    let about = Element::new("section")
        .id("about")
        .class("about fade-in")
        .child(Element::new("h2").class("section__title").text("About"))
        .child(
            Element::new("div")
                .class("about__text")
                .child(Element::new("p").text("A few words about me.")),
        )
        .child(
            Element::new("div")
                .class("about__meta")
                .child(meta_item("Experience"))
                .child(meta_item("Completed projects"))
                .child(meta_item("Reviews"))
                .child(meta_item("Categories")),
        );

    let skills = Element::new("section")
        .class("skills")
        .child(Element::new("h2").class("section__title").text("Skills"))
        .child(
            Element::new("div")
                .class("skills__list")
                .child(Element::new("div").class("skills__item fade-in").text("Skill")),
        );

    let contacts = Element::new("section")
        .class("contacts")
        .child(Element::new("h2").class("section__title").text("Contacts"))
        .child(
            Element::new("div")
                .class("contacts__list")
                .child(contact_item("Email", "email@example.com"))
                .child(contact_item("Phone", "+0 000 000-00-00")),
        );

    let body = Element::new("body")
        .child(header)
        .child(
            Element::new("main")
                .child(about)
                .child(skills)
                .child(list_section(
                    "portfolio",
                    "Portfolio",
                    Section::Portfolio,
                    "portfolio__grid",
                ))
                .child(list_section(
                    "testimonials",
                    "Testimonials",
                    Section::Testimonials,
                    "testimonials__slider",
                ))
                .child(list_section(
                    "completed-tasks",
                    "Completed projects",
                    Section::CompletedTasks,
                    "completed-tasks__list",
                ))
                .child(contacts),
        )
        .child(Element::new("script").text(SHOW_MORE_SCRIPT));

    Document::new(Element::new("html").attr("lang", "en").child(head).child(body))
}
