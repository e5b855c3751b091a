//! floorsign command-line front end.
//!
//! Wires the engine crates together: resolve fonts, fit the text size,
//! render, and write files. Batch export prints the same progress phases a
//! UI would show.

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use sign_config::{FloorsignConfig, PresetStore};
use sign_core::{Color, FontStyle, FontWeight, StyleSettings, symbol_set};
use sign_export::{
    ARCHIVE_FILE_NAME, BatchExporter, RasterFormat, archive, encode_target, single_file_name,
};
use sign_render::{RenderTarget, render, render_vector};
use sign_text::{FIT_CANDIDATES, FontStore, MAX_TEXT_WIDTH, fit_font_size};

const PRESETS_FILE: &str = "floorsign-presets.toml";

#[derive(Parser)]
#[command(name = "floorsign", version, about = "Render floor-sign images and export sign sets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a single sign to a file
    Render {
        #[command(flatten)]
        style: StyleArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "png")]
        format: OutputFormat,
    },
    /// Render every symbol in the fixed set and bundle them into one ZIP
    Set {
        #[command(flatten)]
        style: StyleArgs,
        /// Also keep the individual per-symbol PNGs next to the archive
        #[arg(long)]
        keep_files: bool,
    },
    /// Manage saved style presets
    Preset {
        #[command(subcommand)]
        action: PresetCommand,
    },
    /// List the curated font families, optionally filtered
    Fonts {
        /// Case-insensitive substring to filter by
        term: Option<String>,
    },
}

#[derive(Subcommand)]
enum PresetCommand {
    /// Save the given style under a name
    Save {
        name: String,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// List saved preset names
    List,
    /// Delete a saved preset
    Delete { name: String },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Png,
    Jpeg,
    Svg,
}

/// Style overrides layered over a preset (or the defaults).
#[derive(Args)]
struct StyleArgs {
    /// Start from a saved preset instead of the defaults
    #[arg(long)]
    preset: Option<String>,
    /// Sign text
    #[arg(long)]
    text: Option<String>,
    /// Font family name
    #[arg(long)]
    family: Option<String>,
    /// CSS font weight (100..900, or normal/bold)
    #[arg(long)]
    weight: Option<FontWeight>,
    /// Font style (normal or italic)
    #[arg(long)]
    style: Option<FontStyle>,
    /// Text color (hex or named)
    #[arg(long)]
    color: Option<Color>,
    /// Gradient start color
    #[arg(long)]
    bg_start: Option<Color>,
    /// Gradient end color
    #[arg(long)]
    bg_end: Option<Color>,
    /// Gradient angle in degrees
    #[arg(long)]
    angle: Option<f32>,
}

impl StyleArgs {
    fn resolve(&self, presets: &PresetStore) -> Result<StyleSettings> {
        let mut settings = match &self.preset {
            Some(name) => presets
                .get(name)
                .cloned()
                .with_context(|| format!("no preset named {name:?}"))?,
            None => StyleSettings::default(),
        };
        if let Some(text) = &self.text {
            settings.text = text.clone();
        }
        if let Some(family) = &self.family {
            settings.font_family = family.clone();
        }
        if let Some(weight) = self.weight {
            settings.font_weight = weight;
        }
        if let Some(style) = self.style {
            settings.font_style = style;
        }
        if let Some(color) = self.color {
            settings.font_color = color;
        }
        if let Some(color) = self.bg_start {
            settings.bg_color_start = color;
        }
        if let Some(color) = self.bg_end {
            settings.bg_color_end = color;
        }
        if let Some(angle) = self.angle {
            settings.gradient_angle = angle.rem_euclid(360.0);
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = FloorsignConfig::load();

    match cli.command {
        Command::Render { style, format } => cmd_render(&config, &style, format),
        Command::Set { style, keep_files } => cmd_set(&config, &style, keep_files),
        Command::Preset { action } => cmd_preset(action),
        Command::Fonts { term } => {
            for family in sign_text::catalog::filter_families(term.as_deref().unwrap_or("")) {
                println!("{family}");
            }
            Ok(())
        }
    }
}

fn cmd_render(config: &FloorsignConfig, style: &StyleArgs, format: OutputFormat) -> Result<()> {
    let presets = PresetStore::open(PRESETS_FILE);
    let mut settings = style.resolve(&presets)?;
    let mut store = font_store(config);
    refit(&mut settings, &mut store);

    let out_dir = output_dir(config)?;
    let path = match format {
        OutputFormat::Svg => {
            let markup = render_vector(&settings);
            let path = out_dir.join(single_file_name(&settings.text, "svg"));
            fs::write(&path, markup)?;
            path
        }
        OutputFormat::Png | OutputFormat::Jpeg => {
            let raster = if format == OutputFormat::Png {
                RasterFormat::Png
            } else {
                RasterFormat::Jpeg
            };
            let face =
                store.ensure_ready(&settings.font_family, settings.font_weight, settings.font_style);
            let mut target = RenderTarget::new();
            render(&settings, face.as_deref(), &mut target);
            let bytes = encode_target(&target, raster)?;
            let path = out_dir.join(single_file_name(&settings.text, raster.extension()));
            fs::write(&path, bytes)?;
            path
        }
    };

    println!("Wrote {}", path.display());
    Ok(())
}

fn cmd_set(config: &FloorsignConfig, style: &StyleArgs, keep_files: bool) -> Result<()> {
    let presets = PresetStore::open(PRESETS_FILE);
    let mut settings = style.resolve(&presets)?;
    let mut store = font_store(config);
    // One fit for the whole batch; every symbol shares this size.
    refit(&mut settings, &mut store);

    let symbols = symbol_set();
    let mut exporter = BatchExporter::new();
    let artifacts = exporter.export_all(&settings, &mut store, &symbols, |done, total| {
        let percent = (done as f32 / total as f32 * 100.0).round() as u32;
        print!("\rGenerating... ({percent}%)");
        let _ = std::io::stdout().flush();
    })?;
    println!();
    println!("Zipping files...");

    let bundle = archive(&artifacts)?;
    let out_dir = output_dir(config)?;
    let archive_path = out_dir.join(ARCHIVE_FILE_NAME);
    fs::write(&archive_path, bundle)?;

    if keep_files {
        for artifact in &artifacts {
            fs::write(out_dir.join(&artifact.file_name), &artifact.bytes)?;
        }
    }

    println!("Wrote {} ({} signs)", archive_path.display(), artifacts.len());
    Ok(())
}

fn cmd_preset(action: PresetCommand) -> Result<()> {
    let mut presets = PresetStore::open(PRESETS_FILE);
    match action {
        PresetCommand::Save { name, style } => {
            let settings = style.resolve(&presets)?;
            presets
                .save(name.as_str(), settings)
                .map_err(anyhow::Error::msg)?;
            println!("Preset {name:?} saved");
        }
        PresetCommand::List => {
            if presets.names().is_empty() {
                println!("(no presets saved)");
            }
            for name in presets.names() {
                println!("{name}");
            }
        }
        PresetCommand::Delete { name } => {
            if presets.delete(&name).map_err(anyhow::Error::msg)? {
                println!("Preset {name:?} deleted");
            } else {
                println!("No preset named {name:?}");
            }
        }
    }
    Ok(())
}

fn font_store(config: &FloorsignConfig) -> FontStore {
    let mut store = if config.fonts.no_system_fonts {
        FontStore::empty()
    } else {
        FontStore::system()
    };
    if let Some(dir) = &config.fonts.dir {
        store.load_fonts_dir(dir);
    }
    log::debug!("font database holds {} faces", store.face_count());
    store
}

/// Refit the derived font size to the current text/font combination.
fn refit(settings: &mut StyleSettings, store: &mut FontStore) {
    match store.ensure_ready(&settings.font_family, settings.font_weight, settings.font_style) {
        Some(face) => {
            settings.font_size_px =
                fit_font_size(face.as_ref(), &settings.text, &FIT_CANDIDATES, MAX_TEXT_WIDTH);
        }
        // No measurable face; the render degrades to background-only, so
        // the size only matters for the vector output.
        None => settings.font_size_px = FIT_CANDIDATES[0],
    }
}

fn output_dir(config: &FloorsignConfig) -> Result<PathBuf> {
    let dir = config
        .output
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create output directory {}", dir.display()))?;
    Ok(dir)
}
