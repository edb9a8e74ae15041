use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::hook::{use_escape_listener, use_scroll_lock},
    model::modal::{ClickOrigin, DonationLink, ModalConfig, ModalController, ModalEvent},
};

/// Feeds a DOM event into the controller and logs any state change.
///
/// Events that change nothing never write the signal, so they cannot wake
/// effects subscribed to it.
pub fn dispatch(mut controller: Signal<ModalController>, event: ModalEvent) {
    if !controller.peek().transition_for(&event).changed() {
        return;
    }
    let transition = controller.write().handle(&event);
    tracing::debug!(
        "Donate modal {:?} -> {:?} on {:?}",
        transition.from,
        transition.to,
        event
    );
}

/// Full-screen overlay holding the donate dialog.
///
/// Clicking the overlay background or pressing the close key hides it;
/// clicks inside the dialog box are marked as content on their way up, so the
/// overlay handler sees them as such.
/// Page scrolling is locked for as long as the overlay is shown.
#[component]
pub fn DonateModal(
    config: ModalConfig,
    controller: Signal<ModalController>,
    title: String,
    links: Vec<DonationLink>,
    children: Element,
) -> Element {
    use_scroll_lock(controller);
    use_escape_listener(controller);
    let mut origin = use_hook(|| CopyValue::new(ClickOrigin::default()));

    let overlay_class = config.overlay_class(controller.read().is_open());

    rsx!(
        div {
            id: "{config.overlay_id}",
            class: "{overlay_class}",
            onclick: move |_| {
                let target = origin.write().take_target();
                dispatch(controller, ModalEvent::Clicked(target));
            },
            div {
                class: "donate-modal-content",
                onclick: move |_| origin.write().mark_content(),
                h3 {
                    class: "donate-modal-title",
                    "{title}"
                }
                div {
                    class: "donate-modal-body",
                    {children}
                }
                ul {
                    class: "donate-modal-links",
                    for link in links.iter() {
                        li {
                            key: "{link.href}",
                            a {
                                href: "{link.href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    )
}
