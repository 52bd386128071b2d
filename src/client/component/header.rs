use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaBookOpen, Icon};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[component]
pub fn Header() -> Element {
    let mut auth = use_context::<AuthContext>();
    let nav = navigator();

    let (logged_in, is_admin, name) = {
        let state = auth.read();
        (
            state.is_authenticated(),
            state.is_admin(),
            state.user().map(|u| u.name.clone()).unwrap_or_default(),
        )
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: if logged_in { Route::UserPanel {} } else { Route::Login {} },
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 32,
                        height: 32,
                        icon: FaBookOpen
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if logged_in {
                Link {
                    to: Route::Titles {},
                    class: "btn btn-ghost",
                    "Titles"
                }
                if is_admin {
                    Link {
                        to: Route::Admin {},
                        class: "btn btn-outline",
                        "Admin"
                    }
                }
                span { class: "hidden sm:inline opacity-70", "{name}" }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        auth.logout();
                        nav.push(Route::Login {});
                    },
                    "Logout"
                }
            }
        }
    })
}
