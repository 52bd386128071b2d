pub mod cover_input;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod title_card;
pub mod toast_list;

pub use cover_input::CoverInput;
pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use pagination::{Pagination, PaginationData};
pub use protected_layout::{ProtectedLayout, RequiresAdmin, RequiresLoggedIn};
pub use title_card::TitleCard;
pub use toast_list::ToastList;
