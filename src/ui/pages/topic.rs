use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use crate::config::SheetConfig;
use crate::domain::entities::card::{CardCatalog, InfoCard};
use crate::domain::entities::topic::Topic;
use crate::infra::sheets::client::HttpSheetSource;
use crate::ui::components::info_card::InfoCardView;
use crate::ui::state::page_state::PageState;
use crate::usecase::services::row_service::RowService;

const PAGE_STYLE: &str = "min-height: calc(100vh - 80px); display: flex; flex-direction: column; align-items: center; background-color: #f8faf8; padding: 3rem 2rem;";
const CONTENT_STYLE: &str = "width: 100%; max-width: 1200px; padding: 2rem;";

/// Info cards for one topic, gated by the visitor's sheet row.
#[component]
pub fn TopicPage(topic: String, answer: String, debug: String) -> Element {
    let config = use_context::<SheetConfig>();
    let catalog = use_context::<Rc<CardCatalog>>();
    let mut state = use_signal(PageState::default);

    // One fetch per distinct `answer`; the ticket drops responses for an
    // older value, and the task dies with the page.
    use_effect({
        let answer = answer.clone();
        use_reactive!(|(answer,)| {
            let Some(ticket) = state.write().begin_load(&answer) else {
                return;
            };
            let config = config.clone();
            spawn(async move {
                let row = match HttpSheetSource::new(&config) {
                    Ok(source) => RowService::new(source).load_row(&ticket.user_key).await,
                    Err(error) => {
                        warn!(%error, "sheet client unavailable");
                        None
                    }
                };
                state.write().finish_load(ticket, row);
            });
        })
    });

    let Some(topic) = Topic::from_slug(&topic) else {
        return rsx! {
            div { style: PAGE_STYLE, p { "הנושא המבוקש לא נמצא" } }
        };
    };

    let page = state.read();
    if page.is_pending(&answer) {
        return rsx! {
            div { style: PAGE_STYLE, div { style: CONTENT_STYLE, "טוען..." } }
        };
    }

    let visible: Vec<InfoCard> = catalog
        .for_topic(topic)
        .filter(|card| page.is_visible(&card.container_id))
        .cloned()
        .collect();
    let show_debug = debug.trim() == "1";
    let debug_rows: Vec<(String, String)> = match page.row() {
        Some(row) if show_debug => row
            .headers()
            .iter()
            .cloned()
            .zip(row.values().iter().cloned())
            .collect(),
        _ => Vec::new(),
    };

    rsx! {
        div {
            style: PAGE_STYLE,
            div {
                style: CONTENT_STYLE,
                if show_debug {
                    div {
                        style: "background: #fff8e1; padding: 1rem; margin-bottom: 2rem; border-radius: 8px;",
                        h2 { "Debug Info - Fetched Data" }
                        if debug_rows.is_empty() {
                            p { "No data fetched" }
                        } else {
                            table {
                                thead { tr { th { "Container ID" } th { "Value" } } }
                                tbody {
                                    for (idx, (header, value)) in debug_rows.iter().enumerate() {
                                        tr { key: "{idx}", td { "{header}" } td { "{value}" } }
                                    }
                                }
                            }
                        }
                    }
                }
                h1 { style: "font-size: 2.5rem; color: #1a472a; text-align: center;", "{topic.title()}" }
                if visible.is_empty() {
                    p { style: "text-align: center;", "לא נמצאו המלצות מותאמות עבורך בנושא זה." }
                }
                for card in visible {
                    InfoCardView {
                        key: "{card.container_id}",
                        expanded: page.is_expanded(&card.container_id),
                        card: card.clone(),
                        on_toggle: move |container_id: String| state.write().toggle_expanded(&container_id),
                    }
                }
            }
        }
    }
}
