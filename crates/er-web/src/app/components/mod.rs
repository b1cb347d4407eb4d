pub mod auth;
pub mod footer;
pub mod layout;
pub mod modal;
pub mod navbar;
pub mod table;
pub mod toast;
pub mod user_fields;

pub use auth::RequireAuth;
pub use footer::Footer;
pub use layout::Layout;
pub use modal::Modal;
pub use navbar::NavBar;
pub use table::{Table, TableActions};
pub use toast::{Toast, ToastContext, ToastMessage, ToastType, use_toast, use_toast_provider};
pub use user_fields::UserFields;
