use dioxus::prelude::*;

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    model::{auth::AuthContext, toast::ToastContext},
    router::Route,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::register, model::auth::RegisterDto};

const MIN_PASSWORD_LENGTH: usize = 6;

/// Client side checks mirrored from the server so obvious mistakes skip a round trip.
fn validate(name: &str, email: &str, password: &str, confirm: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some("Name is required")
    } else if !email.contains('@') {
        Some("Enter a valid email address")
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        Some("Password must be at least 6 characters")
    } else if password != confirm {
        Some("Passwords do not match")
    } else {
        None
    }
}

#[component]
pub fn Register() -> Element {
    #[allow(unused_mut)]
    let mut auth = use_context::<AuthContext>();
    #[allow(unused_mut)]
    let mut toasts = use_context::<ToastContext>();
    let nav = navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.push(Route::UserPanel {});
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if let Some(problem) = validate(&name(), &email(), &password(), &confirm()) {
            error_message.set(Some(problem.to_string()));
            return;
        }
        error_message.set(None);
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = RegisterDto {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };
            match register(payload).await {
                Ok(session) => {
                    toasts.success("Account created");
                    auth.login(&session.access_token, session.user);
                }
                Err(err) => error_message.set(Some(err.message)),
            }
            submitting.set(false);
        });
    };

    rsx! {
        Title { "Register | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center w-full h-full",
            form {
                class: "card bg-base-200 w-full max-w-sm",
                onsubmit: on_submit,
                div {
                    class: "card-body flex flex-col gap-3",
                    h2 { class: "card-title", "Create an account" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        class: "input input-bordered w-full",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        class: "input input-bordered w-full",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    input {
                        r#type: "password",
                        class: "input input-bordered w-full",
                        placeholder: "Confirm password",
                        value: "{confirm}",
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                    if let Some(err) = error_message() {
                        div { class: "alert alert-error", span { "{err}" } }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() { "Creating..." } else { "Register" }
                    }
                    p {
                        class: "text-sm text-center",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "link", "Sign in" }
                    }
                }
            }
        }
    }
}
