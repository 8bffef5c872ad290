use dioxus::prelude::*;

/// Placeholder only; there is no account backend.
#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    rsx! {
        div {
            style: "max-width: 420px; margin: 2rem auto; padding: 2rem; background: white; border-radius: 12px; display: flex; flex-direction: column; gap: 1rem;",
            h1 { style: "color: #1a472a;", "התחברות לאזור האישי" }
            input {
                r#type: "email",
                placeholder: "דואר אלקטרוני",
                value: "{email}",
                oninput: move |event| email.set(event.value()),
            }
            input { r#type: "password", placeholder: "סיסמה" }
            button {
                style: "background-color: #4CAF50; color: white; border: none; padding: 0.8rem; border-radius: 6px;",
                onclick: move |_| submitted.set(true),
                "התחברות"
            }
            if submitted() {
                p { "האזור האישי יהיה זמין בקרוב." }
            }
        }
    }
}
