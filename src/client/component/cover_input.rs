use dioxus::prelude::*;

use crate::client::model::cover::CoverFile;

/// File picker that hands the selected image to `on_select`.
#[component]
pub fn CoverInput(
    label: String,
    disabled: bool,
    on_select: EventHandler<CoverFile>,
) -> Element {
    rsx!(
        label {
            class: "form-control w-full",
            span { class: "label-text mb-1", "{label}" }
            input {
                r#type: "file",
                class: "file-input file-input-bordered file-input-sm w-full",
                accept: "image/jpeg,image/png,image/webp,image/gif",
                disabled,
                onchange: move |evt| {
                    #[cfg(feature = "web")]
                    {
                        let files = evt.files();
                        spawn(async move {
                            let Some(file) = files.into_iter().next() else {
                                return;
                            };
                            match file.read_bytes().await {
                                Ok(bytes) => on_select.call(CoverFile {
                                    name: file.name(),
                                    content_type: file
                                        .content_type()
                                        .unwrap_or_else(|| "application/octet-stream".to_string()),
                                    bytes: bytes.to_vec(),
                                }),
                                Err(e) => dioxus_logger::tracing::error!("Failed to read file: {}", e),
                            }
                        });
                    }
                    #[cfg(not(feature = "web"))]
                    let _ = evt;
                },
            }
        }
    )
}
