use dioxus::prelude::*;

use crate::pages::{AdminPage, LoginPage, LogoutPage, MainPage, NotFoundPage, ProfileByIdPage, ProfilePage, RegisterPage};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Routes {
    #[route("/")]
    MainPage {},
    #[route("/login")]
    LoginPage {},
    #[route("/register")]
    RegisterPage {},
    #[route("/profile")]
    ProfilePage {},
    #[route("/profile/:id")]
    ProfileByIdPage { id: i64 },
    #[route("/admin")]
    AdminPage {},
    #[route("/logout")]
    LogoutPage {},
    #[route("/:..route")]
    NotFoundPage { route: Vec<String> },
}
