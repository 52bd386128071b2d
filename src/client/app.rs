use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    model::{auth::AuthContext, toast::ToastContext},
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::get_me;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5/daisyui.css";
const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut auth = use_context_provider(AuthContext::new);
    use_context_provider(ToastContext::new);

    // Resolve the stored token on first load
    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async { get_me().await });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(user) => auth.set_user(user.clone()),
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to fetch profile: {}", err);
                        auth.logout();
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "web"))]
    let _ = auth;

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: "Track the manga volumes you own and get notified about new releases"
        }
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER }
        Router::<Route> {}
    }
}
