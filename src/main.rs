use config::Config;

mod api;
mod config;
mod conversation;
mod models;
mod ui;

pub fn main() -> iced::Result {
    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
    {
        eprintln!("Failed to initialize logger: {}", err);
    }

    let window = Config::default().window;
    log::info!("Starting {}", window.title);

    iced::application(ui::init, ui::update, ui::view)
        .title(ui::title)
        .window_size((window.width, window.height))
        .run()
}
