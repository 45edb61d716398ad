use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    std::env::set_var("RUST_LOG", &log_level);
    env_logger::init();

    sdghub::client::gui::app::HubApp::run(iced::Settings::default())
}
