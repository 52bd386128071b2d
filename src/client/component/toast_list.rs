use dioxus::prelude::*;

use crate::client::model::toast::ToastContext;

#[component]
pub fn ToastList() -> Element {
    let mut toasts = use_context::<ToastContext>();

    rsx!(
        div {
            class: "toast toast-end toast-bottom z-50",
            for toast in toasts.toasts() {
                div {
                    key: "{toast.id}",
                    class: "alert {toast.kind.alert_class()} cursor-pointer",
                    onclick: move |_| toasts.dismiss(toast.id),
                    span { "{toast.message}" }
                }
            }
        }
    )
}
