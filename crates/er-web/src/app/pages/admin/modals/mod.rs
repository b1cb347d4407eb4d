mod confirm_delete_user;
mod user_modal;

pub use confirm_delete_user::ConfirmDeleteUserModal;
pub use user_modal::UserModal;
