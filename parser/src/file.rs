//! Loading DICOM files into memory.

use crate::error::{OpenFileSnafu, ReadFileSnafu, ReadMetadataSnafu, Result};
use crate::source::ByteSource;
use crate::{decode_source, DecodeOptions, DecodedFile};
use snafu::ResultExt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The full contents of a file, held in memory.
///
/// Decoding borrows from this buffer,
/// so it must be kept alive while decoded elements are in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl FileSource {
    /// The path the file was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The length of the file in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// A byte source over the file contents.
    pub fn source(&self) -> ByteSource<'_> {
        ByteSource::new(&self.bytes)
    }

    /// Decode the file with the given options.
    pub fn decode(&self, options: DecodeOptions) -> Result<DecodedFile<'_>> {
        decode_source(self.source(), options)
    }

    /// Take the file contents.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Read a whole file into memory.
///
/// Failing to open the file, to determine its size,
/// or to read it are reported as distinct errors.
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<FileSource> {
    let path = path.as_ref();
    let mut file = File::open(path).context(OpenFileSnafu { filename: path })?;
    let size = file
        .metadata()
        .context(ReadMetadataSnafu { filename: path })?
        .len();

    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    file.read_to_end(&mut bytes)
        .context(ReadFileSnafu { filename: path })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(FileSource {
        path: path.to_path_buf(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::open_file;
    use crate::Error;
    use std::io::Write;

    #[test]
    fn reads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x08\x00\x60\x00CS\x02\x00CT").unwrap();
        file.flush().unwrap();

        let loaded = open_file(file.path()).unwrap();
        assert_eq!(loaded.len(), 10);
        assert_eq!(loaded.path(), file.path());
        assert_eq!(loaded.source().read_u16(0).unwrap(), 0x0008);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nothing.dcm");
        match open_file(&path) {
            Err(Error::OpenFile { filename, .. }) => assert_eq!(filename, path),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
