//! `crop-avatar` entrypoint: crop an image to a circle with a white border.
use std::path::PathBuf;

use clap::Parser;

use imgprep::{DEFAULT_BORDER, avatar_file};

#[derive(Parser)]
#[command(
    name = "crop-avatar",
    version,
    about = "Crop an image to a circle with a white border"
)]
struct Args {
    /// Path to the input image
    input: PathBuf,

    /// Path for the output image
    output: PathBuf,

    /// Border size in pixels
    #[arg(long, default_value_t = DEFAULT_BORDER)]
    border: u32,

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

    avatar_file(&args.input, &args.output, args.border)?;
    println!(
        "Saved circle-cropped image with border as '{}'.",
        args.output.display()
    );
    Ok(())
}
