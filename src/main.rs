mod app;
mod dashboard;
mod error;
mod models;
mod seed;
mod state;
mod ui;
mod utils;

use adw::prelude::*;
use adw::Application;
use gtk4::glib;

fn main() -> glib::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = Application::builder()
        .application_id("com.example.MediaCareDesk")
        .build();
    app.connect_startup(|_| crate::ui::style::install());
    app.connect_activate(|app| {
        crate::app::build_ui(app);
    });
    app.run()
}

#[cfg(test)]
mod tests {
    use gtk4::glib;

    #[test]
    fn main_exit_code_is_the_toolkit_one() {
        // `Application::run` hands back the glib that gtk4 links against.
        let _entry: fn() -> glib::ExitCode = super::main;
    }
}
