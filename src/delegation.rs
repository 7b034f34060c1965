//! Event Delegation
//!
//! The container listens once per event type. The triggering control is the
//! nearest ancestor of the event target carrying `data-action`; its
//! attributes become a `ControlSignal`.

use todo_core::{ActionKind, ControlSignal, ACTION_ATTR, ID_ATTR, VIEW_ATTR};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

/// Nearest `[data-action]` element at or above the event target
fn action_control(ev: &Event) -> Option<Element> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    target.closest(&format!("[{}]", ACTION_ATTR)).ok().flatten()
}

fn signal_from_control(control: &Element) -> Option<ControlSignal> {
    let mut signal = ControlSignal::new(control.get_attribute(ACTION_ATTR)?);
    signal.id = control.get_attribute(ID_ATTR);
    signal.view = control.get_attribute(VIEW_ATTR);
    signal.checked = control.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::checked);
    Some(signal)
}

/// Clicks inside the add form are left to the submit path
fn routes_on_click(action: &str) -> bool {
    action != ActionKind::Add.as_str()
}

/// Decode a click anywhere in the widget
pub fn click_signal(ev: &Event) -> Option<ControlSignal> {
    let control = action_control(ev)?;
    let signal = signal_from_control(&control)?;
    routes_on_click(&signal.action).then_some(signal)
}

/// Decode a form submission, taking (and clearing) the form's text input
pub fn submit_signal(ev: &Event) -> Option<ControlSignal> {
    let form = action_control(ev)?;
    let mut signal = signal_from_control(&form)?;
    let input = form
        .query_selector("input[type=text]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = input {
        signal.text = Some(input.value());
        input.set_value("");
    }
    Some(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_form_clicks_not_routed() {
        assert!(!routes_on_click("add"));
        for action in ["remove", "toggle", "clear-completed", "filter"] {
            assert!(routes_on_click(action), "{}", action);
        }
    }
}
