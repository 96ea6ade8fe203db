//! Fenboard - renders chess positions to PNG images.
//!
//! Reads a position in FEN notation and draws it as a themed board with
//! piece artwork, using either the built-in theme catalog or a catalog
//! loaded from a JSON file.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fenboard_render::{render_fen_to_file, Perspective, RenderOptions};
use fenboard_themes::{builtin_catalog, ThemeCatalog, DEFAULT_THEME};

/// Fenboard - renders chess positions to PNG images.
#[derive(Parser)]
#[command(name = "fenboard")]
#[command(about = "Renders chess positions to PNG images")]
struct Cli {
    /// Theme catalog JSON file (defaults to the built-in catalog)
    #[arg(long, value_name = "FILE", global = true)]
    themes: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a position to a PNG file
    Render {
        /// Position in FEN notation (the board field is enough)
        fen: String,
        /// Output file path
        #[arg(short, long, default_value = "board.png")]
        output: PathBuf,
        /// Image width and height in pixels
        #[arg(short, long, default_value_t = RenderOptions::DEFAULT_SIZE)]
        size: u32,
        /// Theme name
        #[arg(short, long, default_value = DEFAULT_THEME)]
        theme: String,
        /// Side from whose point of view the board is drawn
        #[arg(short, long, value_enum, default_value_t = Pov::White)]
        perspective: Pov,
    },
    /// List the themes in the catalog
    Themes,
    /// Print one theme's details as JSON
    Info {
        /// Theme name
        name: String,
    },
}

/// Board orientations accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Pov {
    White,
    Black,
}

impl From<Pov> for Perspective {
    fn from(pov: Pov) -> Self {
        match pov {
            Pov::White => Perspective::White,
            Pov::Black => Perspective::Black,
        }
    }
}

fn load_catalog(path: &Option<PathBuf>) -> anyhow::Result<ThemeCatalog> {
    match path {
        Some(path) => ThemeCatalog::load(path)
            .with_context(|| format!("failed to load theme catalog from {}", path.display())),
        None => Ok(builtin_catalog()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let catalog = load_catalog(&cli.themes)?;

    match cli.command {
        Commands::Render {
            fen,
            output,
            size,
            theme,
            perspective,
        } => {
            let theme = catalog.get(&theme)?;
            let options = RenderOptions {
                size,
                perspective: perspective.into(),
            };
            render_fen_to_file(&fen, theme, &options, &output)?;
            tracing::info!("Rendered {}x{} image to {:?}", size, size, output);
            println!("{}", output.display());
        }
        Commands::Themes => {
            for name in catalog.names() {
                let info = catalog.info(name)?;
                println!(
                    "{}: [{}, {}] ({} pieces)",
                    info.name,
                    info.board_colors.light(),
                    info.board_colors.dark(),
                    info.piece_count
                );
            }
        }
        Commands::Info { name } => {
            let info = catalog.info(&name)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
