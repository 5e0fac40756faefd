use gloo::events::EventListener;
use web_sys::Document;

// Runs `init` once the document structure is ready. A script loaded after
// parsing finished initializes immediately instead of waiting for a
// DOMContentLoaded that already fired.
pub(crate) fn on_page_ready<F>(init: F)
where
    F: FnOnce(&Document) + 'static,
{
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let ready = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| init(&ready)).forget();
    } else {
        init(&document);
    }
}
