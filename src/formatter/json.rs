//! JSON encoder: the record sequence as an array of field-mappings

use crate::error::{ConvertError, ConvertResult};
use crate::formatter::Encoder;
use crate::parser::Record;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn encode(&self, path: &Path, records: &[Record], pretty: bool) -> ConvertResult<()> {
        let file = File::create(path).map_err(|e| {
            ConvertError::conversion_with_source(self.format_name(), anyhow::Error::new(e))
        })?;
        let mut writer = BufWriter::new(file);

        let result = if pretty {
            serde_json::to_writer_pretty(&mut writer, records)
        } else {
            serde_json::to_writer(&mut writer, records)
        };
        result.map_err(|e| {
            ConvertError::conversion_with_source(self.format_name(), anyhow::Error::new(e))
        })?;

        writer.flush().map_err(|e| {
            ConvertError::conversion_with_source(self.format_name(), anyhow::Error::new(e))
        })
    }
}
