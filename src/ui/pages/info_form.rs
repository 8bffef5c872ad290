use dioxus::prelude::*;

const TYPEFORM_EMBED_SRC: &str = "https://embed.typeform.com/next/embed.js";
const TYPEFORM_FORM_ID: &str = "01JQ1Y7QG16MXVBTAGD7NVX6XQ";

#[component]
pub fn InfoForm() -> Element {
    rsx! {
        div {
            style: "min-height: calc(100vh - 80px); display: flex; flex-direction: column; align-items: center; background-color: #9DC88D;",
            div {
                style: "width: 100%; max-width: 800px; padding: 2rem; background-color: #B4D3A7; border-radius: 15px; margin: 2rem 0;",
                h1 { style: "font-size: 2.5rem; color: #333; text-align: center;", "שאלון אבחון גרנטולוגי" }
                p {
                    style: "text-align: center; font-size: 1.2rem; color: #333; line-height: 1.6;",
                    "מטרת השאלון הינה ליצר אבחון גרנטולוגי מפורט בכדי לסייע לכם להתמודד עם התמיכה היקרה לכם בצורה המיטבית, לצלוח את התהליך השינוי ולממש את זכויותיכם וזכויותיהם באופן המיטבי"
                }
                div {
                    style: "width: 100%; height: 600px;",
                    div { "data-tf-live": TYPEFORM_FORM_ID }
                }
                script { src: TYPEFORM_EMBED_SRC }
            }
        }
    }
}
