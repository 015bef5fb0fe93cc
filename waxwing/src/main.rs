use std::sync::{Arc, RwLock};

use clap::Parser;

mod config;
mod ui;

use waxwing_core as wc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Collection (album) identifier to look up at startup
    collection_id: Option<String>,
}

struct App {
    logic: wc::Logic,
    config: config::Config,
    alert: Arc<RwLock<Option<String>>>,
    ui_state: ui::UiState,
}
impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}

fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let args = Args::parse();

    // Load and save config at startup
    let config = config::Config::load();
    config.save();

    // The alert slot the core reports user-visible errors into; rendered by
    // the error window in `ui`.
    let alert: Arc<RwLock<Option<String>>> = Arc::new(RwLock::new(None));
    let on_alert: wc::AlertCallback = Arc::new({
        let alert = alert.clone();
        move |message| {
            *alert.write().unwrap() = message;
        }
    });

    let logic = wc::Logic::new(
        waxwing_itunes::Client::new(config.catalog.base_url.clone()),
        on_alert,
    );

    if let Some(collection_id) = args.collection_id.as_deref() {
        logic.set_collection(collection_id);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.general.window_width, config.general.window_height]),
        ..eframe::NativeOptions::default()
    };

    eframe::run_native(
        "waxwing",
        native_options,
        Box::new(move |cc| {
            let ui_state = ui::initialize(cc, &config, args.collection_id.unwrap_or_default());
            Ok(Box::new(App {
                logic,
                config,
                alert,
                ui_state,
            }))
        }),
    )
    .unwrap();
}
