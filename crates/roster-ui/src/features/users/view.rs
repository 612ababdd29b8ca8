//! User list and create-form views.

use crate::app::api::ApiCtx;
use crate::core::flows::{self, SubmitOutcome};
use crate::core::store::{AppStore, app_dispatch, apply_users};
use crate::features::users::state::{FIELD_SEPARATOR, UserFormState};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(UsersList)]
pub(crate) fn users_list() -> Html {
    let users = use_selector(|store: &AppStore| store.users.items.clone());

    html! {
        <div id="users-list">
            {for users.iter().map(|user| html! {
                <div class="user-item">
                    <strong>{user.username.clone()}</strong>
                    {FIELD_SEPARATOR}
                    {user.email.clone()}
                </div>
            })}
        </div>
    }
}

#[function_component(UserForm)]
pub(crate) fn user_form() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let form = use_state(UserFormState::default);

    let on_username = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.username = input.value();
            form.set(next);
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(ctx) = api_ctx.clone() else {
                gloo::console::debug!("api context missing; submit ignored");
                return;
            };
            let form = form.clone();
            let values = (*form).clone();
            yew::platform::spawn_local(async move {
                let outcome = flows::submit_user(ctx.client.as_ref(), &values, || {
                    form.set(UserFormState::default());
                })
                .await;
                match outcome {
                    SubmitOutcome::Accepted { users: Ok(users) } => {
                        app_dispatch().reduce_mut(|store| apply_users(store, users));
                    }
                    SubmitOutcome::Accepted { users: Err(err) } => {
                        gloo::console::debug!(format!("user refresh failed: {err}"));
                    }
                    SubmitOutcome::Rejected { error } => {
                        gloo::console::debug!(format!("user submit failed: {error}"));
                    }
                }
            });
        })
    };

    html! {
        <form id="user-form" onsubmit={on_submit}>
            <input
                id="username"
                type="text"
                placeholder="Username"
                required=true
                value={form.username.clone()}
                oninput={on_username}
            />
            <input
                id="email"
                type="email"
                placeholder="Email"
                required=true
                value={form.email.clone()}
                oninput={on_email}
            />
            <button type="submit">{"Add User"}</button>
        </form>
    }
}
