use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{error, info};

use crate::config::SheetConfig;
use crate::domain::entities::card::CardCatalog;
use crate::infra::content::card_csv::load_bundled_cards;
use crate::ui::components::header::Header;
use crate::ui::pages::adapted_home::AdaptedHome;
use crate::ui::pages::categories::Categories;
use crate::ui::pages::contact::Contact;
use crate::ui::pages::home::Home;
use crate::ui::pages::info_form::InfoForm;
use crate::ui::pages::login::Login;
use crate::ui::pages::not_found::NotFound;
use crate::ui::pages::topic::TopicPage;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/info")]
        InfoForm {},
        #[route("/categories?:answer")]
        Categories { answer: String },
        #[route("/services/adapted-home?:answer")]
        AdaptedHome { answer: String },
        #[route("/services/:topic?:answer&:debug")]
        TopicPage { topic: String, answer: String, debug: String },
        #[route("/contact")]
        Contact {},
        #[route("/login")]
        Login {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn load_catalog() -> CardCatalog {
    match load_bundled_cards() {
        Ok(cards) => {
            info!(cards = cards.len(), "loaded info-card catalogue");
            CardCatalog::new(cards)
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "info-card catalogue unavailable");
            CardCatalog::default()
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(SheetConfig::from_env);
    use_context_provider(|| Rc::new(load_catalog()));

    rsx! {
        div {
            dir: "rtl",
            style: "min-height: 100vh; width: 100%; display: flex; flex-direction: column; background-color: #D5D9BA;",
            Router::<Route> {}
        }
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        Header {}
        main {
            style: "width: 100%; flex: 1; display: flex; flex-direction: column;",
            Outlet::<Route> {}
        }
    }
}
