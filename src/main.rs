use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use block_quant::{sample_at, BlockConverter, Palette, PixelBuffer};
use blockart::error::AppError;
use blockart::palette_source;
use blockart::report;

#[derive(Parser)]
#[command(name = "blockart")]
#[command(about = "Convert raster images into fixed-palette block art")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to block art
    Convert {
        /// Input image path
        input: PathBuf,

        /// Output image path (format inferred from the extension)
        #[arg(short, long)]
        output: PathBuf,

        /// Block edge length in pixels
        #[arg(short, long, default_value_t = 10)]
        block_size: u32,

        /// Palette JSON file (defaults to the embedded palette)
        #[arg(long)]
        palette: Option<PathBuf>,

        /// Palette as comma-separated hex RGB (e.g. "#000000,#FFFFFF,#ED1C24")
        #[arg(long)]
        colors: Option<String>,

        /// Suppress the conversion summary
        #[arg(short, long)]
        quiet: bool,
    },
    /// List the swatches of a palette
    Palette {
        /// Palette JSON file (defaults to the embedded palette)
        #[arg(long)]
        palette: Option<PathBuf>,

        /// Palette as comma-separated hex RGB
        #[arg(long)]
        colors: Option<String>,
    },
    /// Report which palette color a converted image has at a coordinate
    Sample {
        /// Converted image path
        image: PathBuf,

        /// Pixel x coordinate
        x: u32,

        /// Pixel y coordinate
        y: u32,

        /// Palette JSON file (defaults to the embedded palette)
        #[arg(long)]
        palette: Option<PathBuf>,

        /// Palette as comma-separated hex RGB
        #[arg(long)]
        colors: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            block_size,
            palette,
            colors,
            quiet,
        }) => run_convert(
            &input,
            &output,
            block_size,
            palette.as_deref(),
            colors.as_deref(),
            quiet,
        ),
        Some(Commands::Palette { palette, colors }) => {
            run_palette(palette.as_deref(), colors.as_deref())
        }
        Some(Commands::Sample {
            image,
            x,
            y,
            palette,
            colors,
        }) => run_sample(&image, x, y, palette.as_deref(), colors.as_deref()),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI use
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blockart=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Decode an image file into an RGBA pixel buffer.
fn decode_image(path: &Path) -> Result<PixelBuffer, AppError> {
    let decoded = image::open(path).map_err(AppError::Decode)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(PixelBuffer::from_raw(decoded.into_raw(), width, height)?)
}

fn run_convert(
    input: &Path,
    output: &Path,
    block_size: u32,
    palette_file: Option<&Path>,
    colors: Option<&str>,
    quiet: bool,
) -> anyhow::Result<()> {
    init_tracing();

    let palette = palette_source::resolve_palette(palette_file, colors)?;
    let start = Instant::now();

    let buffer = decode_image(input)?;
    tracing::info!(
        width = buffer.width(),
        height = buffer.height(),
        block_size,
        swatches = palette.len(),
        "Converting image"
    );

    let converter = BlockConverter::new(palette).block_size(block_size);
    let art = converter.convert(&buffer)?;
    let (pixels, summary) = art.into_parts();

    let (width, height) = (summary.width, summary.height);
    let encoded = image::RgbaImage::from_raw(width, height, pixels.into_raw())
        .ok_or_else(|| anyhow::anyhow!("output buffer does not match image dimensions"))?;
    encoded.save(output).map_err(AppError::Encode)?;

    tracing::info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        blocks = summary.block_count,
        "Conversion finished"
    );
    println!("Wrote {} ({} x {} px)", output.display(), width, height);

    if !quiet {
        report::write_summary(&mut io::stdout(), &summary)?;
    }

    Ok(())
}

fn run_palette(palette_file: Option<&Path>, colors: Option<&str>) -> anyhow::Result<()> {
    init_tracing();

    let palette = palette_source::resolve_palette(palette_file, colors)?;
    print_swatches(&palette);
    Ok(())
}

fn print_swatches(palette: &Palette) {
    let name_width = palette
        .swatches()
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(0);

    println!("Palette ({} colors):", palette.len());
    for swatch in palette.swatches() {
        println!(
            "  {:<name_width$}  {}  rgb({}, {}, {})",
            swatch.name, swatch.rgb, swatch.rgb.r, swatch.rgb.g, swatch.rgb.b
        );
    }
}

fn run_sample(
    image: &Path,
    x: u32,
    y: u32,
    palette_file: Option<&Path>,
    colors: Option<&str>,
) -> anyhow::Result<()> {
    init_tracing();

    let palette = palette_source::resolve_palette(palette_file, colors)?;
    let buffer = decode_image(image)?;

    match sample_at(&buffer, &palette, x, y) {
        Some(swatch) => {
            println!("({}, {}): {} {}", x, y, swatch.name, swatch.rgb);
        }
        None => {
            // A miss is a normal answer: the pixel either lies outside the
            // image or does not exactly match any swatch.
            println!("({}, {}): no exact palette match", x, y);
        }
    }

    Ok(())
}

/// Display status information (no subcommand given)
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("blockart v{VERSION}");
    println!("Convert raster images into fixed-palette block art\n");

    match palette_source::default_palette() {
        Ok(palette) => {
            println!("Embedded palette: {} colors", palette.len());
        }
        Err(e) => {
            println!("Embedded palette: unavailable ({e})");
        }
    }

    println!("\nCommands:");
    println!("  blockart convert   Convert an image to block art");
    println!("  blockart palette   List the swatches of a palette");
    println!("  blockart sample    Inspect a pixel of a converted image");
    println!("\nRun 'blockart --help' for more details.");
}
