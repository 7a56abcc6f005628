use color_eyre::Result;
use eframe::egui;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use tidewalk::booking::{
    BookingHandle, BookingSettings, HttpMailTransport, LogTransport, MailTransport,
};
use tidewalk::persistence::{BookingConfig, SiteConfig, TransportKind};
use tidewalk::ui::SiteUI;

#[tokio::main]
async fn main() -> Result<()> {
    setup()?;

    let config = setup_config().await?;

    let transport = build_transport(&config.booking);
    info!("Booking inquiries delivered via {}", transport.name());
    let booking = BookingHandle::spawn(transport, BookingSettings::from(&config.booking));

    info!("Starting UI");
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport =
        egui::ViewportBuilder::default().with_fullscreen(config.ui.fullscreen);

    eframe::run_native(
        "Tidewalk",
        native_options,
        Box::new(|cc| Ok(Box::new(SiteUI::new(cc, config, booking)))),
    )
    .map_err(|e| color_eyre::eyre::eyre!("UI exited with error: {}", e))?;

    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}

async fn setup_config() -> Result<SiteConfig> {
    let path = SiteConfig::default_path();

    // Make sure the operator has a file to edit
    SiteConfig::ensure_default_config(&path).await?;

    Ok(SiteConfig::load_or_default(&path).await)
}

fn build_transport(config: &BookingConfig) -> Arc<dyn MailTransport> {
    match config.transport {
        TransportKind::Log => Arc::new(LogTransport),
        TransportKind::Http => {
            match HttpMailTransport::from_env(config.endpoint.clone(), &config.api_key_env) {
                Ok(transport) => Arc::new(transport),
                Err(e) => {
                    warn!("Falling back to log transport: {}", e);
                    Arc::new(LogTransport)
                }
            }
        }
    }
}
