use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, Pagination, PaginationData},
        model::{auth::AuthContext, error::ApiError, toast::ToastContext},
    },
    model::user::{PaginatedUsersDto, UserDto},
};

#[cfg(feature = "web")]
use crate::client::api::user::{add_admin, get_users, remove_admin};

#[derive(Clone, PartialEq)]
struct RoleChange {
    user_id: i32,
    name: String,
    grant: bool,
}

#[component]
pub fn AdminUsers() -> Element {
    #[allow(unused_mut)]
    let mut users = use_signal(|| None::<PaginatedUsersDto>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let refetch_trigger = use_signal(|| 0u32);
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_users(page(), per_page()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    users.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    dioxus_logger::tracing::error!("Failed to fetch users: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "text-lg font-semibold", "Users" }
                if let Some(err) = error() {
                    div { class: "alert alert-error", span { "{err}" } }
                } else if let Some(data) = users() {
                    UsersTable { users: data.users.clone(), refetch_trigger }
                    if data.total > 0 {
                        Pagination {
                            page,
                            per_page,
                            data: PaginationData {
                                page: data.page,
                                per_page: data.per_page,
                                total: data.total,
                                total_pages: data.total_pages.max(1),
                            },
                        }
                    }
                } else {
                    span { class: "loading loading-spinner" }
                }
            }
        }
    }
}

#[component]
fn UsersTable(users: Vec<UserDto>, mut refetch_trigger: Signal<u32>) -> Element {
    let auth = use_context::<AuthContext>();
    #[allow(unused_mut)]
    let mut toasts = use_context::<ToastContext>();
    let current_user_id = auth.read().user().map(|u| u.id);

    let mut show_modal = use_signal(|| false);
    let mut pending = use_signal(|| None::<RoleChange>);
    #[allow(unused_mut)]
    let mut is_processing = use_signal(|| false);

    let on_confirm = move |_| {
        let Some(_change) = pending() else {
            return;
        };
        is_processing.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = if _change.grant {
                add_admin(_change.user_id).await
            } else {
                remove_admin(_change.user_id).await
            };
            match result {
                Ok(user) => {
                    toasts.success(format!("Updated roles of {}", user.name));
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_modal.set(false);
                }
                Err(err) => toasts.error(err.message),
            }
            is_processing.set(false);
        });
    };

    let (modal_title, modal_message) = match pending() {
        Some(change) if change.grant => (
            "Grant Admin".to_string(),
            format!("Give {} full access to the catalog and users?", change.name),
        ),
        Some(change) => (
            "Revoke Admin".to_string(),
            format!("Remove the admin role from {}?", change.name),
        ),
        None => (String::new(), String::new()),
    };

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Roles" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    for user in users {
                        {
                            let user_id = user.id;
                            let name = user.name.clone();
                            let is_admin = user.is_admin();
                            let is_self = current_user_id == Some(user_id);
                            let roles = user
                                .roles
                                .iter()
                                .map(|r| r.as_str())
                                .collect::<Vec<_>>()
                                .join(", ");
                            rsx! {
                                tr {
                                    key: "{user_id}",
                                    td { "{user.name}" }
                                    td { "{user.email}" }
                                    td { "{roles}" }
                                    td {
                                        class: "text-right",
                                        if is_admin {
                                            button {
                                                class: "btn btn-sm btn-error btn-outline",
                                                disabled: is_self,
                                                onclick: move |_| {
                                                    pending.set(Some(RoleChange { user_id, name: name.clone(), grant: false }));
                                                    show_modal.set(true);
                                                },
                                                "Revoke Admin"
                                            }
                                        } else {
                                            button {
                                                class: "btn btn-sm btn-primary btn-outline",
                                                onclick: move |_| {
                                                    pending.set(Some(RoleChange { user_id, name: name.clone(), grant: true }));
                                                    show_modal.set(true);
                                                },
                                                "Make Admin"
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
            show: show_modal,
            title: modal_title,
            message: rsx!(p { "{modal_message}" }),
            confirm_text: "Confirm".to_string(),
            confirm_class: "btn-primary".to_string(),
            is_processing: is_processing(),
            processing_text: "Saving...".to_string(),
            on_confirm,
        }
    }
}
