//! User interface modules for tessera-studio

pub mod app;
pub mod form;
pub mod import_dialog;
pub mod message;
pub mod modals;
pub mod notification;
pub mod preview;

pub use app::StudioApp;
pub use message::Message;
