use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::app_config;
use crate::system::auth::context::{do_sign_in, use_auth};
use crate::system::auth::identity;

const SIGN_IN_FAILED: &str = "Error al iniciar sesión. Por favor, intenta de nuevo.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let button_host: NodeRef<html::Div> = NodeRef::new();

    let on_credential = move |result: Result<String, identity::IdentityError>| {
        let provider_token = match result {
            Ok(token) => token,
            Err(e) => {
                log::warn!("Sign-in widget callback failed: {}", e);
                set_error_message.set(Some(SIGN_IN_FAILED.to_string()));
                return;
            }
        };
        set_is_loading.set(true);
        set_error_message.set(None);
        spawn_local(async move {
            // On success the auth state flips and this page is unmounted.
            if let Err(e) = do_sign_in(provider_token, set_auth_state).await {
                log::warn!("Sign-in failed: {}", e);
                set_error_message.try_set(Some(SIGN_IN_FAILED.to_string()));
                set_is_loading.try_set(false);
            }
        });
    };

    Effect::new(move |_| {
        let Some(host) = button_host.get() else {
            return;
        };
        spawn_local(async move {
            let rendered = match identity::wait_until_loaded().await {
                Ok(()) => identity::render_sign_in_button(
                    &host,
                    &app_config().identity.client_id,
                    on_credential,
                ),
                Err(e) => Err(e),
            };
            if let Err(e) = rendered {
                log::error!("Cannot show the sign-in button: {}", e);
                set_error_message.try_set(Some(e.to_string()));
            }
        });
    });

    let notice = move || auth_state.with(|s| s.notice.clone());

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"SellControl"</h1>
                <h2>"Bienvenido"</h2>
                <p class="login-box__lead">
                    "Inicia sesión con tu cuenta de Google para acceder a la consola de gestión."
                </p>

                {move || notice().map(|n| view! { <div class="alert alert--warning">{n}</div> })}
                {move || error_message.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="login-box__widget" node_ref=button_host></div>

                <Show when=move || is_loading.get()>
                    <p class="login-box__status">"Iniciando sesión..."</p>
                </Show>
            </div>
        </div>
    }
}
