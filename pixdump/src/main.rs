//! A CLI tool for dumping the first frame of a DICOM image file
//! as a binary PGM or PPM image.
use attribute::{pixel_data, ImageAttributes};
use clap::Parser;
use dcm_parser::{open_file, DecodeOptions};
use snafu::{Report, ResultExt, Whatever};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::{error, info, Level};

mod attribute;
mod pnm;

/// Dump the pixel data of a DICOM file as a PGM or PPM image
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// Path to the DICOM file to read
    file: PathBuf,

    /// Path to the output image
    /// (default is to replace the input extension with `.pgm` or `.ppm`)
    #[arg(short = 'o', long = "out")]
    output: Option<PathBuf>,

    /// The maximum number of data elements to decode
    #[arg(long = "max-tags", default_value = "4096")]
    max_tags: usize,

    /// The maximum sequence nesting depth
    #[arg(long = "max-depth", default_value = "64")]
    max_depth: u32,

    /// Print more information about the image and the output file
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let App {
        file,
        output,
        max_tags,
        max_depth,
        verbose,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .with_writer(std::io::stderr)
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let source = open_file(&file).unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
        std::process::exit(-1);
    });

    let options = DecodeOptions::new()
        .max_tags(max_tags)
        .max_depth(max_depth);
    let decoded = source.decode(options).unwrap_or_else(|e| {
        error!("{}: {}", file.display(), Report::from_error(e));
        std::process::exit(-2);
    });

    let attrs = ImageAttributes::from_dataset(&decoded.dataset)
        .and_then(|attrs| Ok((attrs, pixel_data(&decoded.dataset)?)));
    let (attrs, pixels) = attrs.unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
        std::process::exit(-3);
    });

    if verbose {
        info!(
            "{}x{}x{} image, {}-bit in {} bits",
            attrs.columns,
            attrs.rows,
            attrs.samples_per_pixel,
            attrs.bits_stored,
            attrs.bits_allocated
        );
    }

    let output = output.unwrap_or_else(|| {
        let mut path = file.clone();
        path.set_extension(pnm::extension(&attrs));
        path
    });

    let written: Result<(), Whatever> = File::create(&output)
        .whatever_context("Could not create output file")
        .and_then(|out| {
            pnm::write_first_frame(BufWriter::new(out), &attrs, pixels.data())
                .whatever_context("Could not write output file")
        });
    written.unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
        std::process::exit(-4);
    });

    if verbose {
        info!("Image saved to {}", output.display());
    }
}

#[cfg(test)]
mod tests {
    use crate::App;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }
}
