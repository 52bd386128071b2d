use dioxus::prelude::*;

use crate::{
    client::{
        component::ConfirmationModal,
        model::{error::ApiError, toast::ToastContext},
    },
    model::publisher::PublisherDto,
};

#[cfg(feature = "web")]
use crate::{
    client::api::publisher::{create_publisher, delete_publisher, get_publishers},
    model::publisher::CreatePublisherDto,
};

#[component]
pub fn AdminPublishers() -> Element {
    #[allow(unused_mut)]
    let mut publishers = use_signal(|| None::<Vec<PublisherDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_publishers().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    publishers.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to fetch publishers: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        div {
            class: "flex flex-col gap-6",
            PublisherForm { refetch_trigger }
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    if let Some(err) = error() {
                        div { class: "alert alert-error", span { "{err}" } }
                    } else if let Some(list) = publishers() {
                        PublisherTable { publishers: list, refetch_trigger }
                    } else {
                        span { class: "loading loading-spinner" }
                    }
                }
            }
        }
    }
}

#[component]
fn PublisherForm(mut refetch_trigger: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<ToastContext>();
    let mut name = use_signal(String::new);
    let mut country = use_signal(String::new);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if name().trim().is_empty() {
            toasts.error("Publisher name is required");
            return;
        }
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let country_value = country().trim().to_string();
            let payload = CreatePublisherDto {
                name: name().trim().to_string(),
                country: (!country_value.is_empty()).then_some(country_value),
            };
            match create_publisher(payload).await {
                Ok(publisher) => {
                    toasts.success(format!("Publisher {} created", publisher.name));
                    name.set(String::new());
                    country.set(String::new());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => toasts.error(err.message),
            }
            submitting.set(false);
        });
    };

    rsx!(
        form {
            class: "flex flex-wrap items-end gap-3",
            onsubmit: on_submit,
            input {
                class: "input input-bordered",
                placeholder: "Publisher name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                class: "input input-bordered",
                placeholder: "Country (optional)",
                value: "{country}",
                oninput: move |evt| country.set(evt.value()),
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: submitting(),
                "Add Publisher"
            }
        }
    )
}

#[component]
fn PublisherTable(publishers: Vec<PublisherDto>, mut refetch_trigger: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<ToastContext>();
    let mut show_delete_modal = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<(i32, String)>);
    #[allow(unused_mut)]
    let mut is_deleting = use_signal(|| false);

    let on_confirm = move |_| {
        let Some((_id, _)) = to_delete() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_publisher(_id).await {
                Ok(message) => {
                    toasts.success(message);
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                }
                Err(err) => toasts.error(err.message),
            }
            is_deleting.set(false);
        });
    };

    let delete_name = to_delete().map(|(_, name)| name).unwrap_or_default();

    rsx! {
        if publishers.is_empty() {
            div { class: "text-center py-8 opacity-50", "No publishers yet" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Country" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for publisher in publishers {
                            {
                                let id = publisher.id;
                                let name = publisher.name.clone();
                                rsx! {
                                    tr {
                                        key: "{id}",
                                        td { "{publisher.name}" }
                                        td { {publisher.country.clone().unwrap_or_default()} }
                                        td {
                                            class: "text-right",
                                            button {
                                                class: "btn btn-sm btn-error btn-outline",
                                                onclick: move |_| {
                                                    to_delete.set(Some((id, name.clone())));
                                                    show_delete_modal.set(true);
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Publisher".to_string(),
            message: rsx!(p { "Delete \"{delete_name}\"? Publishers that still have titles cannot be removed." }),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm,
        }
    }
}
