use dioxus::prelude::*;

use crate::{
    client::{
        component::ConfirmationModal,
        model::{error::ApiError, toast::ToastContext},
        router::Route,
    },
    model::{
        publisher::PublisherDto,
        title::{NewVolumeDto, TitleDto, TitleStatus},
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        publisher::get_publishers,
        title::{create_title, delete_title, get_titles, TitleQuery},
    },
    model::title::CreateTitleDto,
};

/// Volumes numbered `1..=count`, used to seed a new title.
pub fn initial_volumes(count: i32) -> Vec<NewVolumeDto> {
    (1..=count.max(0))
        .map(|number| NewVolumeDto {
            number,
            title: None,
            release_at: None,
        })
        .collect()
}

pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn AdminTitles() -> Element {
    #[allow(unused_mut)]
    let mut titles = use_signal(|| None::<Vec<TitleDto>>);
    #[allow(unused_mut)]
    let mut publishers = use_signal(Vec::<PublisherDto>::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let titles_future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_titles(TitleQuery::default()).await
        });
        let publishers_future = use_resource(|| async { get_publishers().await });

        use_effect(move || {
            if let Some(result) = titles_future.read_unchecked().as_ref() {
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

        use_effect(move || {
            if let Some(Ok(list)) = publishers_future.read_unchecked().as_ref() {
                publishers.set(list.clone());
            }
        });
    }

    rsx! {
        div {
            class: "flex flex-col gap-6",
            TitleForm { publishers: publishers(), refetch_trigger }
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    if let Some(err) = error() {
                        div { class: "alert alert-error", span { "{err}" } }
                    } else if let Some(list) = titles() {
                        TitleTable { titles: list, publishers: publishers(), refetch_trigger }
                    } else {
                        span { class: "loading loading-spinner" }
                    }
                }
            }
        }
    }
}

#[component]
fn TitleForm(publishers: Vec<PublisherDto>, mut refetch_trigger: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<ToastContext>();
    let mut name = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut genre = use_signal(String::new);
    let mut synopsis = use_signal(String::new);
    let mut publisher_id = use_signal(|| None::<i32>);
    let mut status = use_signal(TitleStatus::default);
    let mut volume_count = use_signal(|| 0i32);
    #[allow(unused_mut)]
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if name().trim().is_empty() {
            toasts.error("Title name is required");
            return;
        }
        let Some(_publisher_id) = publisher_id() else {
            toasts.error("Select a publisher");
            return;
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = CreateTitleDto {
                name: name().trim().to_string(),
                synopsis: non_empty(synopsis()),
                author: non_empty(author()),
                genre: non_empty(genre()),
                publisher_id: _publisher_id,
                status: Some(status()),
                volumes: initial_volumes(volume_count()),
            };
            match create_title(payload).await {
                Ok(title) => {
                    toasts.success(format!("{} created", title.name));
                    name.set(String::new());
                    author.set(String::new());
                    genre.set(String::new());
                    synopsis.set(String::new());
                    volume_count.set(0);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => toasts.error(err.message),
            }
            submitting.set(false);
        });
    };

    rsx!(
        form {
            class: "card bg-base-200",
            onsubmit: on_submit,
            div {
                class: "card-body grid grid-cols-1 md:grid-cols-2 gap-3",
                h2 { class: "card-title md:col-span-2", "New title" }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                select {
                    class: "select select-bordered w-full",
                    onchange: move |evt| publisher_id.set(evt.value().parse().ok()),
                    option { value: "", "Select publisher" }
                    for publisher in publishers {
                        option { key: "{publisher.id}", value: "{publisher.id}", "{publisher.name}" }
                    }
                }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Author",
                    value: "{author}",
                    oninput: move |evt| author.set(evt.value()),
                }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Genre",
                    value: "{genre}",
                    oninput: move |evt| genre.set(evt.value()),
                }
                select {
                    class: "select select-bordered w-full",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse() {
                            status.set(value);
                        }
                    },
                    for s in TitleStatus::ALL {
                        option { value: s.as_str(), selected: status() == s, "{s.label()}" }
                    }
                }
                label {
                    class: "flex items-center gap-2",
                    span { class: "text-sm whitespace-nowrap", "Initial volumes" }
                    input {
                        r#type: "number",
                        min: "0",
                        max: "200",
                        class: "input input-bordered w-24",
                        value: "{volume_count}",
                        oninput: move |evt| volume_count.set(evt.value().parse().unwrap_or(0)),
                    }
                }
                textarea {
                    class: "textarea textarea-bordered w-full md:col-span-2",
                    placeholder: "Synopsis (markdown)",
                    value: "{synopsis}",
                    oninput: move |evt| synopsis.set(evt.value()),
                }
                div {
                    class: "md:col-span-2 flex justify-end",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        "Create Title"
                    }
                }
            }
        }
    )
}

#[component]
fn TitleTable(
    titles: Vec<TitleDto>,
    publishers: Vec<PublisherDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
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
            match delete_title(_id).await {
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

    let publisher_name = |id: i32| {
        publishers
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    };
    let delete_name = to_delete().map(|(_, name)| name).unwrap_or_default();

    rsx! {
        if titles.is_empty() {
            div { class: "text-center py-8 opacity-50", "No titles yet" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Publisher" }
                            th { "Status" }
                            th { "Volumes" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for title in titles {
                            {
                                let id = title.id;
                                let name = title.name.clone();
                                let publisher = publisher_name(title.publisher_id);
                                rsx! {
                                    tr {
                                        key: "{id}",
                                        td {
                                            Link { to: Route::TitleDetail { id }, class: "link", "{title.name}" }
                                        }
                                        td { "{publisher}" }
                                        td { "{title.status.label()}" }
                                        td { "{title.volume_count}" }
                                        td {
                                            class: "text-right flex gap-2 justify-end",
                                            Link {
                                                to: Route::TitleEdit { id },
                                                class: "btn btn-sm btn-outline",
                                                "Edit"
                                            }
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
            title: "Delete Title".to_string(),
            message: rsx!(p { "Delete \"{delete_name}\" together with all of its volumes?" }),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_initial_volumes_from_one() {
        let numbers: Vec<i32> = initial_volumes(3).iter().map(|v| v.number).collect();

        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn negative_count_creates_nothing() {
        assert!(initial_volumes(0).is_empty());
        assert!(initial_volumes(-4).is_empty());
    }

    #[test]
    fn blank_optional_fields_become_none() {
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(non_empty(" Shonen ".to_string()), Some("Shonen".to_string()));
    }
}
