use gloo::events::EventListener;
use web_sys::Document;

use scoreboard_core::{NavMenu, NAV_ACTIVE_CLASS};

pub(crate) const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub(crate) const NAV_LINKS_SELECTOR: &str = ".nav-links";

// A page without both elements is a valid state and binds nothing.
pub(crate) fn wire_nav_toggle(document: &Document) {
    let Ok(Some(toggle)) = document.query_selector(NAV_TOGGLE_SELECTOR) else {
        return;
    };
    let Ok(Some(links)) = document.query_selector(NAV_LINKS_SELECTOR) else {
        return;
    };

    let mut menu = NavMenu::new();
    EventListener::new(&toggle, "click", move |_event| {
        let active = menu.toggle();
        let _ = links.class_list().toggle_with_force(NAV_ACTIVE_CLASS, active);
    })
    .forget();
    gloo::console::log!("nav toggle: armed");
}
