use dioxus::prelude::*;
use shared_types::{AuthUser, CompleteProfileRequest};

use crate::auth::use_session;
use crate::history::use_navigation_history;
use crate::PortalContext;

const MIN_PASSWORD_LEN: usize = 8;

/// Public invite page: a referred clinician sets a name and password from
/// the emailed link. Rendered without the signed-in layout.
#[component]
pub fn CompleteProfile(token: String) -> Element {
    let portal = use_context::<PortalContext>();
    let mut session = use_session();
    let mut history = use_navigation_history();

    let mut display_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        let api = portal.api.clone();
        let token = token.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);

            if display_name().trim().is_empty() {
                error_msg.set(Some("Please enter your name.".to_string()));
                return;
            }
            if password().chars().count() < MIN_PASSWORD_LEN {
                error_msg.set(Some(format!(
                    "Password must be at least {MIN_PASSWORD_LEN} characters."
                )));
                return;
            }

            saving.set(true);
            let request = CompleteProfileRequest {
                token,
                display_name: display_name().trim().to_string(),
                password: password(),
            };
            match api.post_json::<_, AuthUser>("/profile/complete", &request).await {
                Ok(user) => {
                    session.set_user(user);
                    history.navigate("/");
                }
                Err(err) => {
                    tracing::info!(kind = %err.kind, "profile completion rejected");
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            saving.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Complete Your Profile" }
                p { class: "auth-description", "Finish setting up your referral portal account." }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_submit,
                    div { class: "auth-field",
                        label { r#for: "display_name", "Full name" }
                        input {
                            class: "input",
                            id: "display_name",
                            value: display_name(),
                            oninput: move |e: FormEvent| display_name.set(e.value()),
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "new_password", "Password" }
                        input {
                            class: "input",
                            r#type: "password",
                            id: "new_password",
                            placeholder: "At least 8 characters",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit button",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Create Account" }
                    }
                }
            }
        }
    }
}
