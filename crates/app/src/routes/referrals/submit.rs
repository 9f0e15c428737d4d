use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, CreateReferralRequest, Referral};

use crate::history::use_navigation_history;
use crate::PortalContext;

/// Client-side checks before the request goes out. The API validates again.
pub fn validate(request: &CreateReferralRequest) -> Result<(), AppError> {
    let mut errors = HashMap::new();
    if request.candidate_name.trim().is_empty() {
        errors.insert("candidate_name".to_string(), "Name is required".to_string());
    }
    let email = request.candidate_email.trim();
    if email.is_empty() {
        errors.insert("candidate_email".to_string(), "Email is required".to_string());
    } else if !email.contains('@') {
        errors.insert(
            "candidate_email".to_string(),
            "Enter a valid email address".to_string(),
        );
    }
    if request.specialty.trim().is_empty() {
        errors.insert("specialty".to_string(), "Specialty is required".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Please fix the highlighted fields", errors))
    }
}

/// Refer a candidate. On success, moves to the new referral's page.
#[component]
pub fn SubmitReferral() -> Element {
    let portal = use_context::<PortalContext>();
    let mut history = use_navigation_history();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut specialty = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        let api = portal.api.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let notes_value = notes().trim().to_string();
            let request = CreateReferralRequest {
                candidate_name: name().trim().to_string(),
                candidate_email: email().trim().to_string(),
                specialty: specialty().trim().to_string(),
                job_id: None,
                notes: (!notes_value.is_empty()).then_some(notes_value),
            };

            if let Err(err) = validate(&request) {
                field_errors.set(err.field_errors);
                return;
            }

            saving.set(true);
            match api.post_json::<_, Referral>("/referrals", &request).await {
                Ok(created) => {
                    tracing::info!(referral = %created.id, "referral submitted");
                    history.navigate(&format!("/referrals/{}", created.id));
                }
                Err(err) => {
                    if err.field_errors.is_empty() {
                        error_msg.set(Some(err.friendly_message()));
                    } else {
                        field_errors.set(err.field_errors);
                    }
                }
            }
            saving.set(false);
        }
    };

    let field_error = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./referrals.css") }
        div { class: "page-header",
            h2 { "Refer a Candidate" }
        }

        if let Some(err) = error_msg() {
            div { class: "form-error", "{err}" }
        }

        form { class: "referral-form", onsubmit: handle_submit,
            div { class: "form-field",
                label { r#for: "candidate_name", "Candidate name" }
                input {
                    class: "input",
                    id: "candidate_name",
                    value: name(),
                    oninput: move |e: FormEvent| name.set(e.value()),
                }
                if let Some(msg) = field_error("candidate_name") {
                    span { class: "field-error", "{msg}" }
                }
            }
            div { class: "form-field",
                label { r#for: "candidate_email", "Candidate email" }
                input {
                    class: "input",
                    r#type: "email",
                    id: "candidate_email",
                    value: email(),
                    oninput: move |e: FormEvent| email.set(e.value()),
                }
                if let Some(msg) = field_error("candidate_email") {
                    span { class: "field-error", "{msg}" }
                }
            }
            div { class: "form-field",
                label { r#for: "specialty", "Specialty" }
                input {
                    class: "input",
                    id: "specialty",
                    placeholder: "e.g. Emergency Medicine",
                    value: specialty(),
                    oninput: move |e: FormEvent| specialty.set(e.value()),
                }
                if let Some(msg) = field_error("specialty") {
                    span { class: "field-error", "{msg}" }
                }
            }
            div { class: "form-field",
                label { r#for: "notes", "Notes" }
                textarea {
                    class: "input",
                    id: "notes",
                    rows: "4",
                    value: notes(),
                    oninput: move |e: FormEvent| notes.set(e.value()),
                }
            }
            button {
                r#type: "submit",
                class: "button",
                disabled: saving(),
                if saving() { "Submitting..." } else { "Submit Referral" }
            }
        }
    }
}
