//! Output format dispatch and encoding
//!
//! Each supported format is one stateless [`Encoder`]. Dispatch is a fixed
//! startup-time mapping from format name to encoder; adding a format means
//! adding an encoder implementation and one arm in [`resolve`], nothing else.

pub mod json;
pub mod xml;

use crate::error::{ConvertError, ConvertResult};
use crate::parser::Record;
use std::path::{Path, PathBuf};

/// A stateless converter from a record sequence to a serialized file.
///
/// Implementations must overwrite the destination, preserve non-ASCII text
/// losslessly, honor the pretty flag, and wrap any underlying serialization
/// failure into a conversion error naming the format.
pub trait Encoder: std::fmt::Debug {
    /// The format name this encoder answers to.
    fn format_name(&self) -> &'static str;

    /// Serialize the full ordered record sequence into `path`.
    fn encode(&self, path: &Path, records: &[Record], pretty: bool) -> ConvertResult<()>;
}

/// Resolve a format name to its encoder.
///
/// Lookup is case-insensitive. An unknown name is a `FormatterNotFound`
/// error naming the requested format.
pub fn resolve(format: &str) -> ConvertResult<Box<dyn Encoder>> {
    match format.to_ascii_lowercase().as_str() {
        "json" => Ok(Box::new(json::JsonEncoder)),
        "xml" => Ok(Box::new(xml::XmlEncoder)),
        other => Err(ConvertError::formatter_not_found(other)),
    }
}

/// Destination path for one requested format: `<dir>/<output_name>.<format>`.
///
/// Computed fresh per format so simultaneous formats never collide.
pub fn output_path(dir: &Path, output_name: &str, format: &str) -> PathBuf {
    dir.join(format!("{}.{}", output_name, format.to_ascii_lowercase()))
}

/// Resolve the encoder for `format` and write the records to
/// `<dir>/<output_name>.<format>`. Returns the written path.
pub fn dispatch(
    format: &str,
    records: &[Record],
    dir: &Path,
    output_name: &str,
    pretty: bool,
) -> ConvertResult<PathBuf> {
    let encoder = resolve(format)?;
    let destination = output_path(dir, output_name, format);
    encoder.encode(&destination, records, pretty)?;
    Ok(destination)
}
