//! UI screens.

mod app;
mod confirm_dialog;
mod home_screen;
mod notification_popup;
mod server_form;
mod viewer_screen;

pub use app::App;
pub use confirm_dialog::{ConfirmAction, ConfirmDialog, ConfirmDialogView, DELETE_PROMPT};
pub use home_screen::{HomeAction, HomeFocus, HomeScreen, HomeView};
pub use notification_popup::NotificationPopup;
pub use server_form::{FormAction, ServerForm, ServerFormView};
pub use viewer_screen::ViewerView;
