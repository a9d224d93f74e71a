//! `crop-gif` entrypoint: crop an animated GIF by a pixel box, compositing
//! delta-encoded frames into full frames first so the crop applies cleanly
//! to every frame.
use std::path::PathBuf;

use clap::Parser;

use imgprep::{CropBox, crop_gif_file};

#[derive(Parser)]
#[command(
    name = "crop-gif",
    version,
    about = "Crop an animated GIF by compositing full frames and applying a crop"
)]
struct Args {
    /// Input GIF file path
    input: PathBuf,

    /// Output cropped GIF file path
    output: PathBuf,

    /// Left coordinate for cropping
    #[arg(long)]
    left: i64,

    /// Top coordinate for cropping
    #[arg(long)]
    top: i64,

    /// Right coordinate for cropping
    #[arg(long)]
    right: i64,

    /// Bottom coordinate for cropping
    #[arg(long)]
    bottom: i64,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    log: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let crop = CropBox::new(args.left, args.top, args.right, args.bottom);
    crop_gif_file(&args.input, &args.output, crop)?;
    println!("Cropped GIF saved as '{}'.", args.output.display());
    Ok(())
}
