use dioxus::prelude::*;

use crate::{client::router::Route, model::title::TitleDto};

#[component]
pub fn TitleCard(title: TitleDto, subtitle: Option<String>) -> Element {
    rsx!(
        Link {
            to: Route::TitleDetail { id: title.id },
            class: "card bg-base-200 hover:bg-base-300 transition-colors",
            figure {
                class: "aspect-[2/3] bg-base-300",
                if let Some(cover) = title.cover_image.as_ref() {
                    img { class: "object-cover w-full h-full", src: "{cover}", alt: "{title.name}" }
                } else {
                    span { class: "opacity-40 text-sm", "No cover" }
                }
            }
            div {
                class: "card-body p-3 gap-1",
                h3 { class: "font-semibold line-clamp-2", "{title.name}" }
                div {
                    class: "flex items-center gap-2 text-xs",
                    span { class: "badge badge-sm badge-outline", "{title.status.label()}" }
                    span { class: "opacity-60", "{title.volume_count} vol." }
                }
                if let Some(subtitle) = subtitle {
                    p { class: "text-xs opacity-70", "{subtitle}" }
                }
            }
        }
    )
}
