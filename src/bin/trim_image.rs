//! `trim-image` entrypoint: remove uniform-color margins from a still image.
//!
//! When the image is uniformly the background color the run is a no-op and
//! no output file is written.
use std::path::PathBuf;

use clap::Parser;

use imgprep::trim_file;

#[derive(Parser)]
#[command(
    name = "trim-image",
    version,
    about = "Trim uniform-color margins from an image"
)]
struct Args {
    /// Path to the input image
    input: PathBuf,

    /// Path for the output image
    output: PathBuf,

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

    if trim_file(&args.input, &args.output)? {
        println!("Trimmed image saved as '{}'.", args.output.display());
    }
    Ok(())
}
