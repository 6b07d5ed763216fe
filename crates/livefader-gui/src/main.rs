//! LiveFader demo - fader showcase and multi-edit fader bank.

use clap::Parser;
use eframe::egui;
use livefader_config::{
    ConfigError, factory_layouts, layout_name_from_path, list_user_layouts, load_layout,
    validate_layout,
};
use livefader_gui::{FaderBank, LiveFaderApp, Theme};

/// LiveFader demo application.
#[derive(Parser, Debug)]
#[command(name = "livefader")]
#[command(about = "Fader controls with multi-edit, built on egui")]
#[command(version)]
struct Args {
    /// Layout for the fader bank: a factory layout name, a user layout name,
    /// or a path to a TOML file
    #[arg(long, default_value = "mixer")]
    layout: String,

    /// List available layouts and exit
    #[arg(long)]
    list_layouts: bool,

    /// Start the fader bank in multi-edit mode
    #[arg(long)]
    multi_edit: bool,
}

fn list_layouts() {
    println!("Factory layouts:");
    for layout in factory_layouts() {
        let description = layout.description.as_deref().unwrap_or("");
        println!("  {:<12} {:>3} faders  {description}", layout.name.to_lowercase(), layout.len());
    }

    let user = list_user_layouts();
    if !user.is_empty() {
        println!("\nUser layouts:");
        for path in user {
            if let Some(name) = layout_name_from_path(&path) {
                println!("  {name:<12} {}", path.display());
            }
        }
    }
}

fn load_bank(name: &str, theme: &Theme) -> Result<FaderBank, ConfigError> {
    let layout = load_layout(name)?;
    if let Err(err) = validate_layout(&layout) {
        tracing::warn!(layout = %layout.name, %err, "layout has problems; values will be clamped");
    }
    tracing::info!(layout = %layout.name, faders = layout.len(), "loaded layout");
    FaderBank::from_layout(&layout, theme.fader_colors())
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Bridge log:: records from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    if args.list_layouts {
        list_layouts();
        return Ok(());
    }

    let theme = Theme::default();
    let banks = load_bank("showcase", &theme).and_then(|showcase| {
        let mut bank = load_bank(&args.layout, &theme)?;
        if args.multi_edit {
            bank.group.set_multi_edit_enabled(true);
        }
        Ok((showcase, bank))
    });
    let (showcase, bank) = match banks {
        Ok(banks) => banks,
        Err(err) => {
            tracing::error!(%err, "failed to load layout");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        bank = %bank.name,
        multi_edit = bank.group.is_multi_edit_enabled(),
        "Starting LiveFader"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 520.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("LiveFader"),
        ..Default::default()
    };

    eframe::run_native(
        "LiveFader",
        options,
        Box::new(move |cc| Ok(Box::new(LiveFaderApp::new(cc, showcase, bank)))),
    )
}
