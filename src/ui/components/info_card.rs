use dioxus::prelude::*;

use crate::domain::entities::card::{CardSection, InfoCard};

#[component]
pub fn InfoCardView(card: InfoCard, expanded: bool, on_toggle: EventHandler<String>) -> Element {
    let container_id = card.container_id.clone();
    let toggle_label = if expanded { "הצג פחות" } else { "הצג עוד" };
    let has_more = !card.sections.is_empty();

    rsx! {
        div {
            id: "{card.container_id}",
            style: "background: white; border-radius: 12px; padding: 2rem; margin-bottom: 2rem; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1); border: 1px solid #e0e0e0;",
            h3 { style: "color: #1a472a; font-size: 1.3rem; margin-bottom: 1rem;", "{card.title}" }
            p { style: "color: #333; font-size: 1.1rem; line-height: 1.6; white-space: pre-line;", "{card.summary}" }
            if has_more {
                button {
                    style: "background-color: #4CAF50; color: white; border: none; padding: 0.8rem 1.5rem; border-radius: 8px; cursor: pointer;",
                    onclick: move |_| on_toggle.call(container_id.clone()),
                    "{toggle_label}"
                }
            }
            if expanded {
                for (idx, section) in card.sections.iter().enumerate() {
                    SectionView { key: "{idx}", section: section.clone(), alt: card.title.clone() }
                }
            }
        }
    }
}

#[component]
fn SectionView(section: CardSection, alt: String) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 2rem; align-items: flex-start; margin-top: 2rem; padding-top: 1.5rem; border-top: 1px solid #eee;",
            if let Some(picture) = section.picture.as_ref() {
                img {
                    src: "{picture}",
                    alt: "{alt}",
                    style: "max-width: 240px; border-radius: 8px;",
                }
            }
            div {
                style: "flex: 1; display: flex; flex-direction: column; gap: 1rem;",
                if let Some(subtitle) = section.subtitle.as_ref() {
                    h3 { style: "color: #1a472a;", "{subtitle}" }
                }
                if let Some(explain) = section.explain.as_ref() {
                    p { style: "line-height: 1.6; white-space: pre-line;", "{explain}" }
                }
                for link in section.links.iter() {
                    a {
                        key: "{link.href}",
                        href: "{link.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "color: white; background-color: #000000; padding: 0.8rem 1.5rem; border-radius: 6px; text-decoration: none; align-self: flex-start;",
                        "{link.label}"
                    }
                }
            }
        }
    }
}
