pub mod publishers;
pub mod titles;
pub mod users;

use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME};

pub use publishers::AdminPublishers;
pub use titles::AdminTitles;
pub use users::AdminUsers;

#[derive(Clone, Copy, PartialEq)]
pub enum AdminTab {
    Titles,
    Publishers,
    Users,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [AdminTab::Titles, AdminTab::Publishers, AdminTab::Users];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Titles => "Titles",
            AdminTab::Publishers => "Publishers",
            AdminTab::Users => "Users",
        }
    }
}

#[component]
pub fn Admin() -> Element {
    let mut active_tab = use_signal(|| AdminTab::Titles);

    rsx! {
        Title { "Admin | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 {
                    class: "text-lg sm:text-2xl mb-6",
                    "Admin Panel"
                }
                div {
                    role: "tablist",
                    class: "tabs tabs-border mb-6",
                    for tab in AdminTab::ALL {
                        button {
                            role: "tab",
                            class: if active_tab() == tab { "tab tab-active" } else { "tab" },
                            onclick: move |_| active_tab.set(tab),
                            "{tab.label()}"
                        }
                    }
                }
                match active_tab() {
                    AdminTab::Titles => rsx! { AdminTitles {} },
                    AdminTab::Publishers => rsx! { AdminPublishers {} },
                    AdminTab::Users => rsx! { AdminUsers {} },
                }
            }
        }
    }
}
