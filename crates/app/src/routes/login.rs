use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::LoginRequest;

use crate::auth::use_session;
use crate::PortalContext;

/// Sign-in form. Rendered in place of any protected page while signed out,
/// so the URL is kept and the same page evaluates again once the session
/// is set.
#[component]
pub fn Login() -> Element {
    let portal = use_context::<PortalContext>();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let api = portal.api.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match api.login(&request).await {
                Ok(user) => session.set_user(user),
                Err(err) => {
                    tracing::info!(kind = %err.kind, "sign-in rejected");
                    if err.field_errors.is_empty() {
                        error_msg.set(Some(err.friendly_message()));
                    } else {
                        field_errors.set(err.field_errors);
                    }
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Sign In" }
                p { class: "auth-description", "Use your referral portal account." }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_login,
                    div { class: "auth-field",
                        label { r#for: "email", "Email" }
                        input {
                            class: "input",
                            r#type: "email",
                            id: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                        if let Some(msg) = field_errors.read().get("email") {
                            span { class: "auth-field-error", "{msg}" }
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "password", "Password" }
                        input {
                            class: "input",
                            r#type: "password",
                            id: "password",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                        if let Some(msg) = field_errors.read().get("password") {
                            span { class: "auth-field-error", "{msg}" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit button",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
