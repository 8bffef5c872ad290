use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            style: "text-align: center; padding: 4rem 2rem;",
            h1 { "העמוד לא נמצא" }
            p { "/{path}" }
            Link { to: Route::Home {}, "חזרה לדף הבית" }
        }
    }
}
