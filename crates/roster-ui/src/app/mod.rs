//! Root component, host-page exports and the wasm entry point.

use crate::app::api::ApiCtx;
use crate::app::location::api_base_url;
use crate::core::flows;
use crate::core::store::{app_dispatch, apply_health, apply_users};
use crate::features::health::view::HealthPanel;
use crate::features::users::view::{UserForm, UsersList};
use crate::services::api::ApiClient;
use wasm_bindgen::prelude::wasm_bindgen;
use yew::prelude::*;

pub(crate) mod api;
mod location;

#[function_component(RosterApp)]
fn roster_app() -> Html {
    let dispatch = app_dispatch();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    match flows::refresh_users(client.as_ref()).await {
                        Ok(users) => dispatch.reduce_mut(|store| apply_users(store, users)),
                        Err(err) => {
                            gloo::console::debug!(format!("initial user load failed: {err}"));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <main class="roster">
                <UserForm />
                <UsersList />
                <HealthPanel />
            </main>
        </ContextProvider<ApiCtx>>
    }
}

/// Query `/health` and render the result; exported to the host page as
/// `checkHealth()`.
#[wasm_bindgen(js_name = checkHealth)]
pub fn check_health() {
    let client = ApiClient::new(api_base_url());
    yew::platform::spawn_local(async move {
        let line = flows::check_health(&client).await;
        app_dispatch().reduce_mut(|store| apply_health(store, line));
    });
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<RosterApp>::with_root(root).render();
    } else {
        yew::Renderer::<RosterApp>::new().render();
    }
}
