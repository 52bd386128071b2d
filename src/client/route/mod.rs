pub mod admin;
pub mod login;
pub mod not_found;
pub mod register;
pub mod title_detail;
pub mod title_edit;
pub mod titles;
pub mod user_panel;

pub use admin::Admin;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
pub use title_detail::TitleDetail;
pub use title_edit::TitleEdit;
pub use titles::Titles;
pub use user_panel::UserPanel;
