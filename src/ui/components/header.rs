use dioxus::prelude::*;

use crate::app::Route;

const LINK_STYLE: &str = "color: white; text-decoration: none; font-size: 1.1rem;";

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            style: "background-color: #4CAF50; padding: 1rem 2rem; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);",
            nav {
                style: "max-width: 1200px; margin: 0 auto; display: flex; gap: 2rem; align-items: center; flex-wrap: wrap;",
                Link {
                    to: Route::Home {},
                    style: "color: white; font-size: 1.5rem; font-weight: bold; text-decoration: none; margin-left: auto;",
                    "The Oak"
                }
                Link { to: Route::Home {}, style: LINK_STYLE, "דף הבית" }
                Link { to: Route::InfoForm {}, style: LINK_STYLE, "מילוי המידע" }
                Link {
                    to: Route::Categories { answer: String::new() },
                    style: LINK_STYLE,
                    "קטגוריות השירותים"
                }
                Link { to: Route::Contact {}, style: LINK_STYLE, "צור קשר" }
                Link { to: Route::Login {}, style: LINK_STYLE, "התחברות לאזור האישי" }
            }
        }
    }
}
