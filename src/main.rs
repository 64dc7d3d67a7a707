//! plot-palette - build, print and preview color palettes
//!
//! This is the main entry point for the plot-palette command line tool.

use std::time::Instant;

use tracing::{error, info};

use plot_palette::colormaps::builtin_registry;
use plot_palette::config::Command;
use plot_palette::{
    init_tracing, log_error, log_operation_end, log_operation_start, log_timed_operation,
    ColorSource, Config, PaletteBuilder, PaletteError, PresetParams, Result,
};

fn main() -> Result<()> {
    // Load configuration
    let (config, command) = Config::load()?;

    init_tracing(&config.log_level);

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    match command {
        Command::ListColormaps => list_colormaps(),
        Command::ShowPresets => show_presets(),
        Command::Build => build(&config),
    }
}

fn list_colormaps() -> Result<()> {
    for (name, kind) in builtin_registry()?.names() {
        println!("{:<12} {}", name, kind);
    }
    Ok(())
}

fn show_presets() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&PresetParams::all())?);
    Ok(())
}

fn build(config: &Config) -> Result<()> {
    let source_text = config.source.as_deref().ok_or_else(|| PaletteError::Config {
        message: "No color source given. Pass a colormap name or a color list".to_string(),
    })?;

    let start = Instant::now();
    log_operation_start("build_palette", Some(source_text));

    let palette = log_timed_operation("resolve_source", || source_text.parse::<ColorSource>())
        .and_then(|source| PaletteBuilder::new(source, &config.palette))
        .map_err(|e| {
            log_error(&e, "build_palette");
            log_operation_end("build_palette", start, false);
            e
        })?;

    log_operation_end("build_palette", start, true);
    info!(
        colors = palette.color_count(),
        bins = palette.bin_count(),
        "Palette ready"
    );

    match config.output.format.as_str() {
        "json" => println!("{}", serde_json::to_string(&palette.hex_colors())?),
        "rgba" => {
            for color in palette.iter() {
                println!("{:.4} {:.4} {:.4} {:.4}", color.r, color.g, color.b, color.a);
            }
        }
        _ => {
            for hex in palette.hex_colors() {
                println!("{}", hex);
            }
        }
    }

    if let Some(path) = &config.output.image {
        palette.save_visualization(path, config.render.width, config.render.row_height)?;
        info!("Wrote palette image to {}", path.display());
    }

    Ok(())
}
