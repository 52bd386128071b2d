use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Markdown, Page,
        },
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError, toast::ToastContext},
        router::Route,
    },
    model::{
        library::VolumeProgressDto,
        title::{TitleDto, VolumeDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    library::{
        get_notification_preference, get_volume_progress, set_notification_preference,
        update_volume_progress,
    },
    title::get_title,
};

fn is_owned(progress: &[VolumeProgressDto], volume_id: i32) -> bool {
    progress
        .iter()
        .any(|p| p.volume_id == volume_id && p.owned)
}

#[component]
pub fn TitleDetail(id: i32) -> Element {
    let auth = use_context::<AuthContext>();
    #[allow(unused_mut)]
    let mut title = use_signal(|| None::<TitleDto>);
    #[allow(unused_mut)]
    let mut progress = use_signal(Vec::<VolumeProgressDto>::new);
    #[allow(unused_mut)]
    let mut notify = use_signal(|| false);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let title_future = use_resource(move || async move { get_title(id).await });
        let progress_future = use_resource(move || async move { get_volume_progress(id).await });
        let preference_future =
            use_resource(move || async move { get_notification_preference(id).await });

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
            if let Some(Ok(entries)) = progress_future.read_unchecked().as_ref() {
                progress.set(entries.clone());
            }
        });

        use_effect(move || {
            if let Some(Ok(preference)) = preference_future.read_unchecked().as_ref() {
                notify.set(preference.email_on_new_volume);
            }
        });
    }

    let is_admin = auth.read().is_admin();

    rsx! {
        if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else if let Some(title) = title() {
            Title { "{title.name} | {SITE_NAME}" }
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-5xl flex flex-col md:flex-row gap-8",
                    div {
                        class: "w-full md:w-64 shrink-0 flex flex-col gap-3",
                        if let Some(cover) = title.cover_image.as_ref() {
                            img { class: "rounded-box w-full", src: "{cover}", alt: "{title.name}" }
                        } else {
                            div {
                                class: "rounded-box bg-base-300 aspect-[2/3] flex items-center justify-center opacity-40",
                                "No cover"
                            }
                        }
                        NotificationToggle { title_id: id, notify }
                        if is_admin {
                            Link {
                                to: Route::TitleEdit { id },
                                class: "btn btn-outline btn-sm",
                                "Edit title"
                            }
                        }
                    }
                    div {
                        class: "flex-1 flex flex-col gap-4",
                        h1 { class: "text-3xl font-bold", "{title.name}" }
                        div {
                            class: "flex flex-wrap gap-2 text-sm",
                            span { class: "badge badge-outline", "{title.status.label()}" }
                            if let Some(author) = title.author.as_ref() {
                                span { class: "badge badge-ghost", "{author}" }
                            }
                            if let Some(genre) = title.genre.as_ref() {
                                span { class: "badge badge-ghost", "{genre}" }
                            }
                        }
                        if let Some(synopsis) = title.synopsis.clone() {
                            Markdown { source: synopsis }
                        }
                        VolumeList {
                            title_id: id,
                            volumes: title.volumes.clone().unwrap_or_default(),
                            progress,
                        }
                    }
                }
            }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn NotificationToggle(title_id: i32, notify: Signal<bool>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<ToastContext>();
    #[allow(unused_mut)]
    let mut saving = use_signal(|| false);

    rsx!(
        label {
            class: "label cursor-pointer justify-start gap-3",
            input {
                r#type: "checkbox",
                class: "toggle toggle-primary",
                checked: notify(),
                disabled: saving(),
                onchange: move |evt| {
                    let enabled = evt.checked();
                    saving.set(true);
                    #[cfg(feature = "web")]
                    spawn(async move {
                        match set_notification_preference(title_id, enabled).await {
                            Ok(preference) => {
                                notify.set(preference.email_on_new_volume);
                                if preference.email_on_new_volume {
                                    toasts.success("You'll get an email when a new volume is added");
                                } else {
                                    toasts.info("New volume emails turned off");
                                }
                            }
                            Err(err) => toasts.error(err.message),
                        }
                        saving.set(false);
                    });
                    #[cfg(not(feature = "web"))]
                    let _ = enabled;
                },
            }
            span { class: "label-text", "Email me about new volumes" }
        }
    )
}

#[component]
fn VolumeList(title_id: i32, volumes: Vec<VolumeDto>, progress: Signal<Vec<VolumeProgressDto>>) -> Element {
    #[allow(unused_mut)]
    let mut toasts = use_context::<ToastContext>();
    let owned_count = volumes
        .iter()
        .filter(|v| is_owned(&progress.read(), v.id))
        .count();

    rsx!(
        section {
            class: "flex flex-col gap-2",
            h2 {
                class: "text-lg font-semibold",
                "Volumes ({owned_count}/{volumes.len()} owned)"
            }
            if volumes.is_empty() {
                p { class: "opacity-50", "No volumes yet" }
            }
            ul {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-2",
                for volume in volumes {
                    {
                        let volume_id = volume.id;
                        let owned = is_owned(&progress.read(), volume_id);
                        let label = match volume.title.as_ref() {
                            Some(name) => format!("Vol. {}: {}", volume.number, name),
                            None => format!("Vol. {}", volume.number),
                        };
                        let release = volume.release_at.map(|d| d.format("%Y-%m-%d").to_string());
                        rsx! {
                            li {
                                key: "{volume_id}",
                                class: "flex items-center gap-3 p-2 rounded bg-base-200",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox checkbox-primary",
                                    checked: owned,
                                    onchange: move |evt| {
                                        let owned = evt.checked();
                                        #[cfg(feature = "web")]
                                        spawn(async move {
                                            let change = vec![VolumeProgressDto { volume_id, owned }];
                                            match update_volume_progress(title_id, change).await {
                                                Ok(entries) => progress.set(entries),
                                                Err(err) => toasts.error(err.message),
                                            }
                                        });
                                        #[cfg(not(feature = "web"))]
                                        let _ = (owned, title_id);
                                    },
                                }
                                span { "{label}" }
                                if let Some(release) = release {
                                    span { class: "ml-auto text-xs opacity-60", "{release}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
