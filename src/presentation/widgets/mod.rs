mod input;
mod notification_popup;
mod status_bar;

pub use input::TextInput;
pub use notification_popup::NotificationPopup;
pub use status_bar::StatusBar;
