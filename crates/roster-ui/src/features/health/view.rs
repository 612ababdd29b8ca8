//! Health status view.
//!
//! Renders the last health line written by `checkHealth()`; never issues
//! requests itself.

use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(HealthPanel)]
pub(crate) fn health_panel() -> Html {
    let line = use_selector(|store: &AppStore| store.health.line.clone());

    html! {
        <div id="health-status">
            {if let Some(line) = (*line).clone() {
                html! { <p style={line.style()}>{line.text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
