use dioxus::prelude::*;

use crate::{
    client::{
        component::{page::ErrorPage, Page, TitleCard},
        constant::{LATEST_TITLES, SITE_NAME},
        model::{auth::AuthContext, error::ApiError},
    },
    model::{
        library::LibraryTitleDto,
        title::{TitleDto, TitleStatus},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    library::get_my_titles,
    title::{get_titles, TitleQuery},
};

/// Newest titles first, capped at `limit`.
fn latest(mut titles: Vec<TitleDto>, limit: usize) -> Vec<TitleDto> {
    titles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    titles.truncate(limit);
    titles
}

fn filter_library(entries: &[LibraryTitleDto], status: Option<TitleStatus>) -> Vec<LibraryTitleDto> {
    entries
        .iter()
        .filter(|e| status.is_none_or(|s| e.title.status == s))
        .cloned()
        .collect()
}

#[component]
pub fn UserPanel() -> Element {
    let auth = use_context::<AuthContext>();
    #[allow(unused_mut)]
    let mut library = use_signal(|| None::<Vec<LibraryTitleDto>>);
    #[allow(unused_mut)]
    let mut newest = use_signal(Vec::<TitleDto>::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let mut status_filter = use_signal(|| None::<TitleStatus>);

    #[cfg(feature = "web")]
    {
        let library_future = use_resource(|| async { get_my_titles().await });
        let latest_future = use_resource(|| async { get_titles(TitleQuery::default()).await });

        use_effect(move || {
            if let Some(result) = library_future.read_unchecked().as_ref() {
                match result {
                    Ok(entries) => {
                        library.set(Some(entries.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to fetch library: {}", err);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });

        use_effect(move || {
            if let Some(Ok(titles)) = latest_future.read_unchecked().as_ref() {
                newest.set(latest(titles.clone(), LATEST_TITLES));
            }
        });
    }

    let name = auth.read().user().map(|u| u.name.clone()).unwrap_or_default();

    rsx! {
        Title { "My library | {SITE_NAME}" }
        if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-6xl flex flex-col gap-8",
                    h1 { class: "text-2xl", "Hello, {name}" }

                    section {
                        div {
                            class: "flex flex-wrap items-center justify-between gap-4 mb-4",
                            h2 { class: "text-lg font-semibold", "My titles" }
                            select {
                                class: "select select-bordered select-sm",
                                onchange: move |evt| status_filter.set(evt.value().parse().ok()),
                                option { value: "", "All statuses" }
                                for status in TitleStatus::ALL {
                                    option { value: status.as_str(), "{status.label()}" }
                                }
                            }
                        }
                        match library() {
                            None => rsx! { span { class: "loading loading-spinner" } },
                            Some(entries) => {
                                let shown = filter_library(&entries, status_filter());
                                rsx! {
                                    if shown.is_empty() {
                                        div {
                                            class: "text-center py-8 opacity-50",
                                            "No titles yet. Mark volumes you own on a title page."
                                        }
                                    } else {
                                        div {
                                            class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-4",
                                            for entry in shown {
                                                TitleCard {
                                                    key: "{entry.title.id}",
                                                    subtitle: format!("{} of {} owned", entry.owned_count, entry.total_count),
                                                    title: entry.title,
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    section {
                        h2 { class: "text-lg font-semibold mb-4", "Latest titles" }
                        div {
                            class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-4",
                            for title in newest() {
                                TitleCard { key: "{title.id}", title }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn title(id: i32, status: TitleStatus, age_days: i64) -> TitleDto {
        let created_at = Utc::now() - Duration::days(age_days);
        TitleDto {
            id,
            name: format!("Title {}", id),
            synopsis: None,
            author: None,
            genre: None,
            slug: format!("title-{}", id),
            cover_image: None,
            status,
            publisher_id: 1,
            volume_count: 0,
            created_at,
            updated_at: created_at,
            volumes: None,
        }
    }

    #[test]
    fn keeps_newest_titles() {
        let titles = (1..=8).map(|i| title(i, TitleStatus::Ongoing, i as i64)).collect();

        let ids: Vec<i32> = latest(titles, 3).iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn filters_library_by_status() {
        let entries = vec![
            LibraryTitleDto {
                title: title(1, TitleStatus::Ongoing, 1),
                owned_count: 1,
                total_count: 3,
            },
            LibraryTitleDto {
                title: title(2, TitleStatus::Completed, 1),
                owned_count: 2,
                total_count: 2,
            },
        ];

        assert_eq!(filter_library(&entries, None).len(), 2);
        let completed = filter_library(&entries, Some(TitleStatus::Completed));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].title.id, 2);
    }
}
