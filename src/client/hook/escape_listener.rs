use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{component::dispatch, model::error::ListenerError},
    model::modal::{ModalController, ModalEvent},
};

/// Forwards every document `keydown` key name over the eval channel.
///
/// The handler is kept on `window` so [`KEYDOWN_REMOVER`] can detach it.
const KEYDOWN_LISTENER: &str = r#"
window.__donateModalKeydown = (e) => dioxus.send(e.key);
document.addEventListener('keydown', window.__donateModalKeydown);
await new Promise(() => {});
"#;

const KEYDOWN_REMOVER: &str = r#"
if (window.__donateModalKeydown) {
    document.removeEventListener('keydown', window.__donateModalKeydown);
    delete window.__donateModalKeydown;
}
"#;

/// Installs the document-level key listener for the modal.
///
/// The listener lives as long as the calling component; dropping the
/// component cancels the future that drains the channel and detaches the
/// handler from the document.
pub fn use_escape_listener(controller: Signal<ModalController>) {
    use_drop(|| {
        document::eval(KEYDOWN_REMOVER);
    });

    use_future(move || async move {
        if let Err(err) = forward_keys(controller).await {
            tracing::warn!("Donate modal key listener stopped: {}", err);
        }
    });
}

async fn forward_keys(controller: Signal<ModalController>) -> Result<(), ListenerError> {
    let mut eval = document::eval(KEYDOWN_LISTENER);

    loop {
        let key: String = eval
            .recv()
            .await
            .map_err(|err| ListenerError::Channel(format!("{err:?}")))?;

        dispatch(controller, ModalEvent::KeyPressed(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the remover detaches the handler the listener installs.
    ///
    /// Verifies that both scripts refer to the same `window` slot, so an
    /// unmounted modal leaves no `keydown` handler on the document.
    ///
    /// Expected: listener adds and remover removes `window.__donateModalKeydown`
    #[test]
    fn test_remover_detaches_installed_handler() {
        let slot = "window.__donateModalKeydown";

        assert!(KEYDOWN_LISTENER.contains(&format!("{slot} = ")));
        assert!(KEYDOWN_LISTENER.contains(&format!("addEventListener('keydown', {slot})")));
        assert!(KEYDOWN_REMOVER.contains(&format!("removeEventListener('keydown', {slot})")));
        assert!(KEYDOWN_REMOVER.contains(&format!("delete {slot}")));
    }
}
