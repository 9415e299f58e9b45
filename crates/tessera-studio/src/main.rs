//! Tessera Studio - button builder GUI application

use iced::Size;
use tessera_studio::ui::StudioApp;

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("tessera-studio starting up");

    iced::application(StudioApp::new, StudioApp::update, StudioApp::view)
        .subscription(StudioApp::subscription)
        .theme(StudioApp::theme)
        .title("Tessera - Button Builder")
        .window_size(Size::new(1100.0, 720.0))
        .run()
}
