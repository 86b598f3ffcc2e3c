use std::ffi::OsStr;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::bufread::GzDecoder;

// Inputs may arrive gzip-compressed; the decision is made once here by
// extension so that downstream parsers always see plain text.
pub fn open(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let reader = BufReader::new(File::open(path)?);
    match path.extension().and_then(OsStr::to_str) {
        Some("gz") => Ok(Box::new(BufReader::new(GzDecoder::new(reader)))),
        _ => Ok(Box::new(reader)),
    }
}
