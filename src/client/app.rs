use dioxus::prelude::*;

use crate::{
    client::{
        component::{DonateButton, DonateModal},
        constant::{DONATE_MESSAGE, DONATE_TITLE, DONATION_LINKS, SITE_NAME},
    },
    model::modal::{DonationLink, ModalConfig, ModalController},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(ModalConfig::default);
    let controller = use_signal({
        let config = config.clone();
        move || ModalController::new(&config)
    });

    let links: Vec<DonationLink> = DONATION_LINKS
        .iter()
        .map(|(label, href)| DonationLink::new(*label, *href))
        .collect();

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div {
            class: "page",
            DonateButton {
                id: config.trigger_id.clone(),
                controller
            }
        }
        DonateModal {
            config,
            controller,
            title: DONATE_TITLE.to_string(),
            links,
            p { "{DONATE_MESSAGE}" }
        }
    }
}
