use anyhow::{Context, Result, bail};
use clap::Parser;
use palette_extractor::export::DEFAULT_OUT_DIR;
use palette_extractor::{
    ExtractOptions, LabelFormat, OutputPaths, PaletteEntry, PaletteError, encode_png,
    extract_palette, load_image, render_palette, write_outputs,
};
use std::path::{Path, PathBuf};

/// Extract a color palette from an image.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the input image (repeat for several images)
    #[arg(short, long, required = true)]
    image: Vec<PathBuf>,

    /// Number of dominant colors to extract
    #[arg(short, long, default_value_t = 5)]
    colors: usize,

    /// Label format drawn under each swatch
    #[arg(short, long, value_enum, default_value_t = LabelFormat::Hex)]
    format: LabelFormat,

    /// Minimum RGB distance between palette colors; smaller allows more similar colors
    #[arg(short, long, default_value_t = 40.0)]
    threshold: f64,

    /// Extra k-means clusters requested beyond --colors
    #[arg(short, long, default_value_t = 12)]
    buffer: usize,

    /// k-means seed
    #[arg(short, long, default_value_t = palette_extractor::DEFAULT_SEED)]
    seed: u64,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Also print the palette as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let opts = ExtractOptions {
        count: args.colors,
        threshold: args.threshold,
        buffer: args.buffer,
        seed: args.seed,
    };
    opts.validate().context("invalid arguments")?;

    let mut failed = 0usize;
    for input in &args.image {
        if let Err(err) = process(input, &opts, &args) {
            failed += 1;
            eprintln!("Error: {}: {err:#}", input.display());
            if let Some(hint) = err.downcast_ref::<PaletteError>().and_then(PaletteError::hint) {
                eprintln!("  hint: {hint}");
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} image(s) failed", args.image.len());
    }
    Ok(())
}

fn process(input: &Path, opts: &ExtractOptions, args: &Args) -> Result<()> {
    let img = load_image(input)?;
    let entries = extract_palette(&img, opts)?;
    if entries.len() < opts.count {
        eprintln!(
            "Note: only {} of {} requested colors are at least {} apart",
            entries.len(),
            opts.count,
            opts.threshold
        );
    }

    let colors: Vec<_> = entries.iter().map(|e| e.color).collect();
    let png = encode_png(&render_palette(&colors, args.format))?;
    let paths = OutputPaths::new(input, &args.out_dir);
    write_outputs(&paths, &png, &colors)
        .with_context(|| format!("writing palette for {}", input.display()))?;

    println!("Color swatches saved to {}", paths.image.display());
    println!("Color codes saved to {}", paths.text.display());

    if args.json {
        println!("{}", palette_json(input, &entries));
    }
    Ok(())
}

fn palette_json(input: &Path, entries: &[PaletteEntry]) -> serde_json::Value {
    let colors: Vec<serde_json::Value> = entries
        .iter()
        .map(|e| {
            serde_json::json!({
                "hex": e.hex,
                "rgb": e.rgb,
                "channels": e.color.channels(),
            })
        })
        .collect();
    serde_json::json!({
        "image": input.display().to_string(),
        "colors": colors,
    })
}
