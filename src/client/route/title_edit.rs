use chrono::{DateTime, NaiveDate, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            ConfirmationModal, CoverInput, Page,
        },
        constant::SITE_NAME,
        model::{cover::CoverFile, error::ApiError, toast::ToastContext},
        route::admin::titles::non_empty,
        router::Route,
    },
    model::{
        publisher::PublisherDto,
        title::{TitleDto, TitleStatus, VolumeDto},
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        publisher::get_publishers,
        title::{
            add_volume, delete_volume, get_title, update_title, update_volume, upload_title_cover,
            upload_volume_cover,
        },
    },
    model::title::{NewVolumeDto, UpdateTitleDto, UpdateVolumeDto},
};

/// Parses the value of an `<input type="date">` as midnight UTC.
pub fn parse_release_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn next_volume_number(volumes: &[VolumeDto]) -> i32 {
    volumes.iter().map(|v| v.number).max().unwrap_or(0) + 1
}

#[component]
pub fn TitleEdit(id: i32) -> Element {
    #[allow(unused_mut)]
    let mut title = use_signal(|| None::<TitleDto>);
    #[allow(unused_mut)]
    let mut publishers = use_signal(Vec::<PublisherDto>::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let title_future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_title(id).await
        });
        let publishers_future = use_resource(|| async { get_publishers().await });

        use_effect(move || {
            if let Some(result) = title_future.read_unchecked().as_ref() {
                match result {
                    Ok(dto) => {
                        title.set(Some(dto.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to fetch title {}: {}", id, err);
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
        Title { "Edit title | {SITE_NAME}" }
        if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else if let Some(dto) = title() {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-5xl flex flex-col gap-6",
                    div {
                        class: "flex items-center justify-between",
                        h1 { class: "text-2xl", "Edit {dto.name}" }
                        Link { to: Route::TitleDetail { id }, class: "btn btn-ghost", "View page" }
                    }
                    TitleFields {
                        key: "{dto.id}-{dto.updated_at}",
                        title: dto.clone(),
                        publishers: publishers(),
                        refetch_trigger,
                    }
                    VolumeEditor {
                        title_id: id,
                        volumes: dto.volumes.clone().unwrap_or_default(),
                        refetch_trigger,
                    }
                }
            }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn TitleFields(title: TitleDto, publishers: Vec<PublisherDto>, mut refetch_trigger: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<ToastContext>();
    let title_id = title.id;
    let mut name = use_signal(|| title.name.clone());
    let mut author = use_signal(|| title.author.clone().unwrap_or_default());
    let mut genre = use_signal(|| title.genre.clone().unwrap_or_default());
    let mut synopsis = use_signal(|| title.synopsis.clone().unwrap_or_default());
    let mut publisher_id = use_signal(|| title.publisher_id);
    let mut status = use_signal(|| title.status);
    #[allow(unused_mut)]
    let mut saving = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if name().trim().is_empty() {
            toasts.error("Title name is required");
            return;
        }
        saving.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = UpdateTitleDto {
                name: Some(name().trim().to_string()),
                synopsis: Some(synopsis().trim().to_string()),
                author: Some(author().trim().to_string()),
                genre: Some(genre().trim().to_string()),
                publisher_id: Some(publisher_id()),
                status: Some(status()),
                volumes: None,
            };
            match update_title(title_id, payload).await {
                Ok(_) => {
                    toasts.success("Title saved");
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => toasts.error(err.message),
            }
            saving.set(false);
        });
    };

    let on_cover = move |_file: CoverFile| {
        #[cfg(feature = "web")]
        spawn(async move {
            match upload_title_cover(title_id, _file).await {
                Ok(_) => {
                    toasts.success("Cover uploaded");
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => toasts.error(err.message),
            }
        });
    };

    rsx!(
        form {
            class: "card bg-base-200",
            onsubmit: on_submit,
            div {
                class: "card-body grid grid-cols-1 md:grid-cols-[12rem_1fr] gap-6",
                div {
                    class: "flex flex-col gap-2",
                    if let Some(cover) = title.cover_image.as_ref() {
                        img { class: "rounded-box w-full", src: "{cover}" }
                    }
                    CoverInput { label: "Title cover", disabled: saving(), on_select: on_cover }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    select {
                        class: "select select-bordered w-full",
                        onchange: move |evt| {
                            if let Ok(value) = evt.value().parse() {
                                publisher_id.set(value);
                            }
                        },
                        for publisher in publishers {
                            option {
                                key: "{publisher.id}",
                                value: "{publisher.id}",
                                selected: publisher_id() == publisher.id,
                                "{publisher.name}"
                            }
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
                            if let Ok(value) = evt.value().parse::<TitleStatus>() {
                                status.set(value);
                            }
                        },
                        for s in TitleStatus::ALL {
                            option { value: s.as_str(), selected: status() == s, "{s.label()}" }
                        }
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full md:col-span-2 min-h-40",
                        placeholder: "Synopsis (markdown)",
                        value: "{synopsis}",
                        oninput: move |evt| synopsis.set(evt.value()),
                    }
                    div {
                        class: "md:col-span-2 flex justify-end",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn VolumeEditor(title_id: i32, volumes: Vec<VolumeDto>, mut refetch_trigger: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<ToastContext>();
    let suggested = next_volume_number(&volumes);
    let mut number = use_signal(move || suggested.to_string());
    let mut volume_title = use_signal(String::new);
    let mut release = use_signal(String::new);
    let mut show_delete_modal = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<VolumeDto>);
    #[allow(unused_mut)]
    let mut is_deleting = use_signal(|| false);

    // Keep the suggestion in step after volumes change
    use_effect(use_reactive((&suggested,), move |(suggested,)| {
        number.set(suggested.to_string())
    }));

    let on_add = move |evt: Event<FormData>| {
        evt.prevent_default();
        let Ok(_number) = number().trim().parse::<i32>() else {
            toasts.error("Volume number must be a whole number");
            return;
        };

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = NewVolumeDto {
                number: _number,
                title: non_empty(volume_title()),
                release_at: parse_release_date(&release()),
            };
            match add_volume(title_id, payload).await {
                Ok(volume) => {
                    toasts.success(format!("Vol. {} added", volume.number));
                    volume_title.set(String::new());
                    release.set(String::new());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => toasts.error(err.message),
            }
        });
    };

    let on_confirm_delete = move |_| {
        let Some(_volume) = to_delete() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_volume(title_id, _volume.id).await {
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

    let delete_label = to_delete()
        .map(|v| format!("Vol. {}", v.number))
        .unwrap_or_default();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body flex flex-col gap-4",
                h2 { class: "card-title", "Volumes" }
                form {
                    class: "flex flex-wrap items-end gap-3",
                    onsubmit: on_add,
                    input {
                        r#type: "number",
                        min: "1",
                        class: "input input-bordered w-24",
                        value: "{number}",
                        oninput: move |evt| number.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "Volume title (optional)",
                        value: "{volume_title}",
                        oninput: move |evt| volume_title.set(evt.value()),
                    }
                    input {
                        r#type: "date",
                        class: "input input-bordered",
                        value: "{release}",
                        oninput: move |evt| release.set(evt.value()),
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Add Volume" }
                }
                if volumes.is_empty() {
                    p { class: "opacity-50", "No volumes yet" }
                }
                for volume in volumes {
                    VolumeRow {
                        key: "{volume.id}-{volume.updated_at}",
                        title_id,
                        volume: volume.clone(),
                        refetch_trigger,
                        on_delete: move |volume: VolumeDto| {
                            to_delete.set(Some(volume));
                            show_delete_modal.set(true);
                        },
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Volume".to_string(),
            message: rsx!(p { "Delete {delete_label}? Ownership records for it are removed too." }),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm: on_confirm_delete,
        }
    }
}

#[component]
fn VolumeRow(
    title_id: i32,
    volume: VolumeDto,
    mut refetch_trigger: Signal<u32>,
    on_delete: EventHandler<VolumeDto>,
) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<ToastContext>();
    let volume_id = volume.id;
    let mut number = use_signal(|| volume.number.to_string());
    let mut label = use_signal(|| volume.title.clone().unwrap_or_default());
    let mut release = use_signal(|| {
        volume
            .release_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });

    let on_save = move |_| {
        let Ok(_number) = number().trim().parse::<i32>() else {
            toasts.error("Volume number must be a whole number");
            return;
        };

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = UpdateVolumeDto {
                number: Some(_number),
                title: Some(label().trim().to_string()),
                release_at: parse_release_date(&release()),
            };
            match update_volume(title_id, volume_id, payload).await {
                Ok(_) => {
                    toasts.success("Volume saved");
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => toasts.error(err.message),
            }
        });
    };

    let on_cover = move |_file: CoverFile| {
        #[cfg(feature = "web")]
        spawn(async move {
            match upload_volume_cover(title_id, volume_id, _file).await {
                Ok(_) => {
                    toasts.success("Volume cover uploaded");
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => toasts.error(err.message),
            }
        });
    };

    let delete_target = volume.clone();

    rsx!(
        div {
            class: "flex flex-wrap items-end gap-3 p-3 rounded bg-base-100",
            if let Some(cover) = volume.cover_image.as_ref() {
                img { class: "w-12 rounded", src: "{cover}" }
            }
            input {
                r#type: "number",
                min: "1",
                class: "input input-bordered input-sm w-20",
                value: "{number}",
                oninput: move |evt| number.set(evt.value()),
            }
            input {
                class: "input input-bordered input-sm",
                placeholder: "Volume title",
                value: "{label}",
                oninput: move |evt| label.set(evt.value()),
            }
            input {
                r#type: "date",
                class: "input input-bordered input-sm",
                value: "{release}",
                oninput: move |evt| release.set(evt.value()),
            }
            div {
                class: "w-56",
                CoverInput { label: "Cover", disabled: false, on_select: on_cover }
            }
            div {
                class: "flex gap-2 ml-auto",
                button { class: "btn btn-sm btn-primary", onclick: on_save, "Save" }
                button {
                    class: "btn btn-sm btn-error btn-outline",
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    "Delete"
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_date_input_as_midnight_utc() {
        let parsed = parse_release_date("2024-03-09").expect("valid date");

        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2024, 3, 9));
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn empty_or_invalid_dates_are_none() {
        assert!(parse_release_date("").is_none());
        assert!(parse_release_date("09/03/2024").is_none());
    }

    #[test]
    fn suggests_number_after_highest_volume() {
        let volume = |number| VolumeDto {
            id: number,
            title_id: 1,
            number,
            title: None,
            cover_image: None,
            release_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(next_volume_number(&[]), 1);
        assert_eq!(next_volume_number(&[volume(1), volume(4), volume(2)]), 5);
    }
}
