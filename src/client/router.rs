use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    Admin, Login, NotFound, Register, TitleDetail, TitleEdit, Titles, UserPanel,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Login {},

        #[route("/register")]
        Register {},

        #[layout(RequiresLoggedIn)]
            #[route("/user")]
            UserPanel {},

            #[route("/titles")]
            Titles {},

            #[route("/title/:id")]
            TitleDetail { id: i32 },
        #[end_layout]

        #[layout(RequiresAdmin)]
        #[nest("/admin")]
            #[route("/")]
            Admin {},

            #[route("/title/:id/edit")]
            TitleEdit { id: i32 },
        #[end_nest]
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
