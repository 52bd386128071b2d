use dioxus::prelude::*;

use crate::{
    client::{
        component::{page::ErrorPage, Page, TitleCard},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::title::{TitleDto, TitleStatus},
};

#[cfg(feature = "web")]
use crate::client::api::title::{get_titles, TitleQuery};

#[component]
pub fn Titles() -> Element {
    #[allow(unused_mut)]
    let mut titles = use_signal(|| None::<Vec<TitleDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let mut search = use_signal(String::new);
    let mut status = use_signal(|| None::<TitleStatus>);

    // Re-runs whenever the search text or status changes
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let query = TitleQuery {
                status: status(),
                publisher_id: None,
                search: Some(search()),
            };
            get_titles(query).await
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(list) => {
                        titles.set(Some(list.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to fetch titles: {}", err);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });
    }

    rsx! {
        Title { "Titles | {SITE_NAME}" }
        if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-6xl",
                    div {
                        class: "flex flex-wrap items-center gap-4 mb-6",
                        h1 { class: "text-2xl flex-1", "Titles" }
                        input {
                            r#type: "search",
                            class: "input input-bordered input-sm w-64",
                            placeholder: "Search titles...",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                        select {
                            class: "select select-bordered select-sm",
                            onchange: move |evt| status.set(evt.value().parse().ok()),
                            option { value: "", "All statuses" }
                            for s in TitleStatus::ALL {
                                option { value: s.as_str(), "{s.label()}" }
                            }
                        }
                    }
                    match titles() {
                        None => rsx! { span { class: "loading loading-spinner" } },
                        Some(list) if list.is_empty() => rsx! {
                            div { class: "text-center py-8 opacity-50", "No titles found" }
                        },
                        Some(list) => rsx! {
                            div {
                                class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-4",
                                for title in list {
                                    TitleCard { key: "{title.id}", title }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
