mod app;
mod convert;
mod host;
mod messages;
mod panels;
mod states;
mod workers;

use querylens_core::config::ClientConfig;

/// Environment variable naming a TOML client config to load at startup.
const CONFIG_ENV: &str = "QUERYLENS_CONFIG";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("QueryLens"),
        ..Default::default()
    };

    eframe::run_native(
        "QueryLens",
        options,
        Box::new(|cc| Ok(Box::new(app::QueryLensApp::new(&cc.egui_ctx, config)?))),
    )
}

fn load_config() -> ClientConfig {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return ClientConfig::default();
    };
    let path = std::path::PathBuf::from(path);
    match ClientConfig::load(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "Loaded client config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "Falling back to default config: {e}");
            ClientConfig::default()
        }
    }
}
