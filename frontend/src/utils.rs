//! Small form helpers shared by the views.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::validate::FieldErrors;

/// Catch-all toast text for network and backend failures.
pub const GENERIC_ERROR: &str = "An error occurred. Please try again later.";

/// Delay between a success toast and the follow-up navigation.
pub const REDIRECT_DELAY_MS: u32 = 1_000;

/// Controlled-input binding: pushes every input event into the state handle.
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

/// Inline validation message for one field, if it has an error.
pub fn field_error(errors: &FieldErrors, key: &str) -> Html {
    match errors.get(key) {
        Some(msg) => html!(<p class="field-error">{ msg }</p>),
        None => Html::default(),
    }
}
