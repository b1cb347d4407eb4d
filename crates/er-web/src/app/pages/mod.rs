pub mod admin;
pub mod login;
pub mod logout;
pub mod main_page;
pub mod not_found;
pub mod profile;
pub mod register;

pub use admin::AdminPage;
pub use login::LoginPage;
pub use logout::LogoutPage;
pub use main_page::MainPage;
pub use not_found::NotFoundPage;
pub use profile::{ProfileByIdPage, ProfilePage};
pub use register::RegisterPage;
