//! A CLI tool for reporting the SOP Instance, Study Instance
//! and Series Instance UIDs of DICOM files as JSON.
use clap::Parser;
use dcm_parser::{open_file, DecodeOptions, Error as DecodeError};
use rayon::prelude::*;
use report::{write_reports, UidReport};
use snafu::{whatever, Report, ResultExt, Whatever};
use std::path::{Path, PathBuf};
use tracing::{debug, error, Level};
use walkdir::WalkDir;

mod report;

/// Exit code for when a file could not be reported on.
const ERROR_READ: i32 = -1;

/// Report the UIDs of DICOM files as JSON
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// The DICOM files to read, or directories to search for them
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// The maximum number of data elements to decode per file
    #[arg(long = "max-tags", default_value = "4096")]
    max_tags: usize,
    /// The maximum sequence nesting depth
    #[arg(long = "max-depth", default_value = "64")]
    max_depth: u32,
    /// Stop at the first file which cannot be decoded
    #[arg(long = "fail-first")]
    fail_first: bool,
    /// verbose mode
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// The result of processing one file.
#[derive(Debug)]
enum Outcome {
    Reported(UidReport),
    NotDicom,
    Failed(DecodeError),
}

fn main() {
    run().unwrap_or_else(|e| {
        eprintln!("{}", Report::from_error(e));
        std::process::exit(ERROR_READ);
    });
}

fn run() -> Result<(), Whatever> {
    let App {
        files,
        max_tags,
        max_depth,
        fail_first,
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

    let files = collect_files(files);
    let nfiles = files.len();
    let fail_first = nfiles == 1 || fail_first;
    let options = DecodeOptions::new()
        .max_tags(max_tags)
        .max_depth(max_depth);

    // each file is decoded on its own, output order follows the input
    let outcomes: Vec<Outcome> = files.par_iter().map(|f| process(f, options)).collect();

    let mut reports = Vec::with_capacity(nfiles);
    let mut errors: i32 = 0;
    for (file, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Outcome::Reported(report) => {
                for name in &report.missing {
                    error!("{} not found in {}", name, file.display());
                }
                reports.push(report);
            }
            Outcome::NotDicom if nfiles == 1 => {
                whatever!("{} does not appear to be a DICOM file", file.display());
            }
            Outcome::NotDicom => {
                debug!("Skipping {}: not a DICOM file", file.display());
            }
            Outcome::Failed(e) => {
                error!("{}: {}", file.display(), Report::from_error(e));
                if fail_first {
                    std::process::exit(ERROR_READ);
                }
                errors += 1;
            }
        }
    }

    write_reports(std::io::stdout().lock(), &reports, nfiles > 1)
        .whatever_context("Could not write the report")?;

    if errors > 0 {
        std::process::exit(errors);
    }
    Ok(())
}

/// Expand the given paths into the list of files to process,
/// searching directories recursively.
fn collect_files(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for file in WalkDir::new(path.as_path())
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
                .filter(|f| !f.file_type().is_dir())
            {
                files.push(file.into_path());
            }
        } else {
            files.push(path);
        }
    }
    files
}

fn process(file: &Path, options: DecodeOptions) -> Outcome {
    debug!("Opening file '{}'...", file.display());
    let source = match open_file(file) {
        Ok(source) => source,
        Err(e) => return Outcome::Failed(e),
    };
    match source.decode(options) {
        Ok(decoded) => Outcome::Reported(UidReport::new(file.display().to_string(), &decoded)),
        Err(DecodeError::NotDicom { .. }) => Outcome::NotDicom,
        Err(e) => Outcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::{collect_files, process, App, Outcome};
    use clap::CommandFactory;
    use dcm_parser::{DecodeOptions, Error};
    use std::fs;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }

    /// A file with only a meta group declaring the given transfer syntax.
    fn meta_only(transfer_syntax: &[u8]) -> Vec<u8> {
        let mut data = vec![0u8; 128];
        data.extend_from_slice(b"DICM");
        data.extend_from_slice(&[0x02, 0x00, 0x03, 0x00, b'U', b'I', 0x04, 0x00]);
        data.extend_from_slice(b"1.2\0");
        data.extend_from_slice(&[0x02, 0x00, 0x10, 0x00, b'U', b'I']);
        data.extend_from_slice(&(transfer_syntax.len() as u16).to_le_bytes());
        data.extend_from_slice(transfer_syntax);
        data
    }

    #[test]
    fn collects_directories_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.dcm"), b"").unwrap();
        fs::write(dir.path().join("sub").join("a.dcm"), b"").unwrap();
        let single = dir.path().join("b.dcm");

        let files = collect_files(vec![dir.path().to_path_buf(), single.clone()]);
        assert_eq!(
            files,
            vec![
                dir.path().join("b.dcm"),
                dir.path().join("sub").join("a.dcm"),
                single,
            ]
        );
    }

    #[test]
    fn classifies_files() {
        let dir = tempfile::tempdir().unwrap();

        let text = dir.path().join("notes.txt");
        fs::write(&text, b"nothing to see here").unwrap();
        assert!(matches!(
            process(&text, DecodeOptions::default()),
            Outcome::NotDicom
        ));

        let big_endian = dir.path().join("be.dcm");
        fs::write(&big_endian, meta_only(b"1.2.840.10008.1.2.2\0")).unwrap();
        assert!(matches!(
            process(&big_endian, DecodeOptions::default()),
            Outcome::Failed(Error::UnsupportedTransferSyntax { .. })
        ));

        let good = dir.path().join("good.dcm");
        fs::write(&good, meta_only(b"1.2.840.10008.1.2.1\0")).unwrap();
        match process(&good, DecodeOptions::default()) {
            Outcome::Reported(report) => {
                assert_eq!(report.sop_instance_uid, "1.2");
                assert_eq!(report.filename, good.display().to_string());
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        assert!(matches!(
            process(&dir.path().join("missing.dcm"), DecodeOptions::default()),
            Outcome::Failed(Error::OpenFile { .. })
        ));
    }
}
