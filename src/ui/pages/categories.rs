use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::entities::topic::Topic;

#[component]
pub fn Categories(answer: String) -> Element {
    rsx! {
        div {
            style: "padding: 2rem; min-height: calc(100vh - 80px);",
            h1 { style: "font-size: 2.5rem; color: #1a472a; text-align: center; margin-bottom: 2rem;", "קטגוריית שירותים" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2rem; max-width: 1200px; margin: 0 auto;",
                for topic in Topic::ALL {
                    div {
                        key: "{topic.slug()}",
                        style: "background: #ffffff; padding: 2rem; border-radius: 10px; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1); text-align: center;",
                        h2 { style: "color: #1a472a; font-size: 1.5rem;", "{topic.title()}" }
                        Link {
                            to: Route::TopicPage {
                                topic: topic.slug().to_string(),
                                answer: answer.clone(),
                                debug: String::new(),
                            },
                            style: "background-color: #4CAF50; color: white; padding: 0.8rem 1.5rem; border-radius: 5px; text-decoration: none;",
                            "רשימת שירותים"
                        }
                    }
                }
            }
        }
    }
}
