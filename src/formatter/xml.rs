//! XML encoder: the record sequence as a generated element tree

use crate::error::{ConvertError, ConvertResult};
use crate::formatter::Encoder;
use crate::parser::Record;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const ROOT_TAG: &str = "root";
const ITEM_TAG: &str = "item";

#[derive(Debug)]
pub struct XmlEncoder;

impl XmlEncoder {
    fn wrap<E>(error: E) -> ConvertError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConvertError::conversion_with_source("xml", anyhow::Error::new(error))
    }

    fn write_records<W: Write>(
        &self,
        writer: &mut Writer<W>,
        records: &[Record],
    ) -> ConvertResult<()> {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(Self::wrap)?;
        writer
            .write_event(Event::Start(BytesStart::new(ROOT_TAG)))
            .map_err(Self::wrap)?;

        for record in records {
            writer
                .write_event(Event::Start(BytesStart::new(ITEM_TAG)))
                .map_err(Self::wrap)?;

            if let Some(fields) = record.as_object() {
                for (field, value) in fields {
                    let text = match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    writer
                        .write_event(Event::Start(BytesStart::new(field.as_str())))
                        .map_err(Self::wrap)?;
                    writer
                        .write_event(Event::Text(BytesText::new(&text)))
                        .map_err(Self::wrap)?;
                    writer
                        .write_event(Event::End(BytesEnd::new(field.as_str())))
                        .map_err(Self::wrap)?;
                }
            }

            writer
                .write_event(Event::End(BytesEnd::new(ITEM_TAG)))
                .map_err(Self::wrap)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(ROOT_TAG)))
            .map_err(Self::wrap)
    }
}

impl Encoder for XmlEncoder {
    fn format_name(&self) -> &'static str {
        "xml"
    }

    fn encode(&self, path: &Path, records: &[Record], pretty: bool) -> ConvertResult<()> {
        let file = File::create(path).map_err(Self::wrap)?;
        let buffered = BufWriter::new(file);

        let mut writer = if pretty {
            Writer::new_with_indent(buffered, b' ', 4)
        } else {
            Writer::new(buffered)
        };

        self.write_records(&mut writer, records)?;
        writer.into_inner().flush().map_err(Self::wrap)
    }
}
