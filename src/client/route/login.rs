use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::{
        auth::{AuthContext, AuthState},
        toast::ToastContext,
    },
    router::Route,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::login, model::auth::LoginDto};

#[component]
pub fn Login() -> Element {
    #[allow(unused_mut)]
    let mut auth = use_context::<AuthContext>();
    #[allow(unused_mut)]
    let mut toasts = use_context::<ToastContext>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error_message = use_signal(|| None::<String>);

    // Logged in users go straight to their panel
    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.push(Route::UserPanel {});
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if email().trim().is_empty() || password().is_empty() {
            error_message.set(Some("Email and password are required".to_string()));
            return;
        }
        error_message.set(None);
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = LoginDto {
                email: email().trim().to_string(),
                password: password(),
            };
            match login(payload).await {
                Ok(session) => {
                    toasts.success(format!("Welcome back, {}", session.user.name));
                    auth.login(&session.access_token, session.user);
                }
                Err(err) => error_message.set(Some(err.message)),
            }
            submitting.set(false);
        });
    };

    let initializing = matches!(&*auth.read(), AuthState::Initializing);

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if initializing {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                p { class: "text-3xl font-bold", {SITE_NAME} }
                form {
                    class: "card bg-base-200 w-full max-w-sm",
                    onsubmit: on_submit,
                    div {
                        class: "card-body flex flex-col gap-3",
                        h2 { class: "card-title", "Sign in" }
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
                        if let Some(err) = error_message() {
                            div { class: "alert alert-error", span { "{err}" } }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Signing in..."
                            } else {
                                "Sign in"
                            }
                        }
                        p {
                            class: "text-sm text-center",
                            "No account yet? "
                            Link { to: Route::Register {}, class: "link", "Register" }
                        }
                    }
                }
            }
        }
    }
}
