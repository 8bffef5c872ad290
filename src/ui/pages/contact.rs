use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        div {
            style: "max-width: 800px; margin: 2rem auto; padding: 2rem; background: white; border-radius: 12px;",
            h1 { style: "color: #1a472a;", "צור קשר" }
            p { "נשמח לעמוד לרשותכם בכל שאלה." }
            ul {
                li { "דואר אלקטרוני: info@theoak.co.il" }
                li { "טלפון: 03-0000000" }
            }
        }
    }
}
