use dioxus::prelude::*;

use crate::domain::entities::topic::Topic;
use crate::ui::pages::topic::TopicPage;

/// Older links land here: the home-adjustments page with the fetched row
/// always shown above the cards.
#[component]
pub fn AdaptedHome(answer: String) -> Element {
    rsx! {
        TopicPage {
            topic: Topic::HomeAdjustments.slug().to_string(),
            answer,
            debug: "1".to_string(),
        }
    }
}
