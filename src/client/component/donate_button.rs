use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaHeart, Icon};

use crate::{
    client::component::dispatch,
    model::modal::{ModalController, ModalEvent},
};

/// Trigger that opens the donate modal.
#[component]
pub fn DonateButton(id: String, controller: Signal<ModalController>) -> Element {
    rsx!(
        button {
            id: "{id}",
            r#type: "button",
            class: "donate-button",
            onclick: move |_| dispatch(controller, ModalEvent::TriggerClicked),
            Icon {
                width: 16,
                height: 16,
                icon: FaHeart
            }
            span { "Donate" }
        }
    )
}
