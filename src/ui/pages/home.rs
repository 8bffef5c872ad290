use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            style: "text-align: center; padding: 4rem 2rem; background: linear-gradient(rgba(76, 175, 80, 0.1), rgba(76, 175, 80, 0.2)); border-radius: 10px; margin: 2rem;",
            h1 { style: "font-size: 2.5rem; color: #333; margin-bottom: 2rem;", "ברוכים הבאים ל-The Oak" }
            Link {
                to: Route::InfoForm {},
                style: "background-color: #4CAF50; color: white; padding: 1rem 2rem; font-size: 1.2rem; border-radius: 5px; text-decoration: none;",
                "ניתוח מקרה לקבלת המלצות מותאמות אישית"
            }
        }
    }
}
