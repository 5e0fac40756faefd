use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement};

use scoreboard_core::{
    ControlChange, SubmissionGuard, SubmitOutcome, DEFAULT_UNLOCK_DELAY_MS,
};

pub(crate) const SCORE_FORM_SELECTOR: &str = ".score-form";
pub(crate) const SUBMIT_CONTROL_SELECTOR: &str = "button[type=\"submit\"]";
pub(crate) const MATCH_COMPLETED_SELECTOR: &str = "[data-match-completed=\"true\"]";
pub(crate) const PERMANENT_DISABLE_ATTR: &str = "data-permanently-disabled";

pub(crate) fn wire_score_forms(document: &Document) {
    wire_score_forms_with_delay(document, DEFAULT_UNLOCK_DELAY_MS);
}

// Serializes score submissions across every `.score-form` on the page and
// freezes them all when the match-completed marker is present. The unlock
// delay is a recovery policy, not a response signal.
pub(crate) fn wire_score_forms_with_delay(document: &Document, unlock_delay_ms: u32) {
    let mut forms: Vec<Element> = Vec::new();
    let mut buttons: Vec<HtmlButtonElement> = Vec::new();
    let Ok(list) = document.query_selector_all(SCORE_FORM_SELECTOR) else {
        return;
    };
    for idx in 0..list.length() {
        let Some(node) = list.get(idx) else {
            continue;
        };
        let Ok(form) = node.dyn_into::<Element>() else {
            continue;
        };
        // A score form owns exactly one submit control; a form without one
        // has nothing to guard.
        let Ok(Some(control)) = form.query_selector(SUBMIT_CONTROL_SELECTOR) else {
            continue;
        };
        let Ok(button) = control.dyn_into::<HtmlButtonElement>() else {
            continue;
        };
        forms.push(form);
        buttons.push(button);
    }
    if forms.is_empty() {
        return;
    }

    let buttons = Rc::new(buttons);
    let guard = Rc::new(RefCell::new(SubmissionGuard::with_unlock_delay(
        buttons.len(),
        unlock_delay_ms,
    )));

    for (origin, form) in forms.into_iter().enumerate() {
        let guard = Rc::clone(&guard);
        let buttons = Rc::clone(&buttons);
        let options = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        };
        EventListener::new_with_options(&form, "submit", options, move |event| {
            on_submit(origin, event, &guard, &buttons);
        })
        .forget();
    }

    // Evaluated once at page-ready; one-way for the page lifetime.
    if matches!(document.query_selector(MATCH_COMPLETED_SELECTOR), Ok(Some(_))) {
        let changes = guard.borrow_mut().finish_match();
        apply_changes(&buttons, &changes);
        for button in buttons.iter() {
            let _ = button.set_attribute(PERMANENT_DISABLE_ATTR, "true");
        }
        console::log!("score guard: match completed, controls frozen");
    }
    console::log!(format!("score guard: armed {} forms", buttons.len()));
}

fn on_submit(
    origin: usize,
    event: &Event,
    guard: &Rc<RefCell<SubmissionGuard>>,
    buttons: &Rc<Vec<HtmlButtonElement>>,
) {
    // A control disabled outside this script still rejects, even when the
    // guard believes it is enabled.
    let origin_disabled = buttons
        .get(origin)
        .map(|button| button.disabled())
        .unwrap_or(true);
    if origin_disabled {
        event.prevent_default();
        return;
    }

    let outcome = guard.borrow_mut().try_acquire(origin);
    match outcome {
        SubmitOutcome::Proceed { changes } => {
            apply_changes(buttons, &changes);
            console::log!("score guard: lock acquired");
            let delay = guard.borrow().unlock_delay_ms();
            let guard = Rc::clone(guard);
            let buttons = Rc::clone(buttons);
            Timeout::new(delay, move || {
                let changes = guard.borrow_mut().release();
                apply_release(&buttons, &changes);
                console::log!("score guard: lock released");
            })
            .forget();
        }
        SubmitOutcome::Rejected => {
            event.prevent_default();
            console::log!("score guard: duplicate submit cancelled");
        }
    }
}

fn apply_changes(buttons: &[HtmlButtonElement], changes: &[ControlChange]) {
    for change in changes {
        if let Some(button) = buttons.get(change.control) {
            apply_change(button, change);
        }
    }
}

// The unlock pass also honors the attribute contract: a control marked
// permanently disabled by a collaborator outside this script stays frozen.
fn apply_release(buttons: &[HtmlButtonElement], changes: &[ControlChange]) {
    for change in changes {
        let Some(button) = buttons.get(change.control) else {
            continue;
        };
        if button.has_attribute(PERMANENT_DISABLE_ATTR) {
            continue;
        }
        apply_change(button, change);
    }
}

fn apply_change(button: &HtmlButtonElement, change: &ControlChange) {
    button.set_disabled(!change.enabled);
    if let Some(label) = change.label {
        button.set_text_content(Some(label.text()));
    }
}
