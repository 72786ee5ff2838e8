// OSS Select Rust Library for Alibaba Cloud Object Storage Service
// Copyright 2025 The oss-select Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `CsvMetaRequest` body of the CreateSelectObjectMeta operation

use super::{CompressionType, encode_field, push_element, push_optional};
use crate::oss::error::ValidationErr;

/// One setting of a [`CsvMetaRequest`], applied by [`CsvMetaRequest::with_options`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CsvMetaOption {
    OverwriteIfExists(bool),
    /// One of `None`, `GZIP`
    CompressionType(String),
    RecordDelimiter(String),
    FieldDelimiter(String),
    QuoteCharacter(String),
}

/// Body of a CreateSelectObjectMeta request over a CSV object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsvMetaRequest {
    overwrite_if_exists: bool,
    compression_type: CompressionType,
    record_delimiter: Option<String>,
    field_delimiter: Option<String>,
    quote_character: Option<String>,
}

impl CsvMetaRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a request and applies `options` in order; the first invalid
    /// option aborts construction.
    pub fn with_options<I>(options: I) -> Result<Self, ValidationErr>
    where
        I: IntoIterator<Item = CsvMetaOption>,
    {
        options
            .into_iter()
            .try_fold(Self::new(), |request, option| -> Result<Self, ValidationErr> {
                Ok(match option {
                    CsvMetaOption::OverwriteIfExists(v) => request.overwrite_if_exists(v),
                    CsvMetaOption::CompressionType(v) => request.compression_type(v.parse()?),
                    CsvMetaOption::RecordDelimiter(v) => request.record_delimiter(&v),
                    CsvMetaOption::FieldDelimiter(v) => request.field_delimiter(&v),
                    CsvMetaOption::QuoteCharacter(v) => request.quote_character(&v),
                })
            })
    }

    /// Rebuilds the metadata even when the server already holds it.
    pub fn overwrite_if_exists(mut self, overwrite: bool) -> Self {
        self.overwrite_if_exists = overwrite;
        self
    }

    pub fn compression_type(mut self, compression_type: CompressionType) -> Self {
        self.compression_type = compression_type;
        self
    }

    pub fn record_delimiter(mut self, delimiter: &str) -> Self {
        self.record_delimiter = encode_field(delimiter);
        self
    }

    pub fn field_delimiter(mut self, delimiter: &str) -> Self {
        self.field_delimiter = encode_field(delimiter);
        self
    }

    pub fn quote_character(mut self, quote: &str) -> Self {
        self.quote_character = encode_field(quote);
        self
    }

    pub fn is_overwrite_if_exists(&self) -> bool {
        self.overwrite_if_exists
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from("<CsvMetaRequest>");

        data.push_str("<InputSerialization>");
        push_element(
            &mut data,
            "CompressionType",
            &self.compression_type.to_string(),
        );
        if self.record_delimiter.is_some()
            || self.field_delimiter.is_some()
            || self.quote_character.is_some()
        {
            data.push_str("<CSV>");
            push_optional(&mut data, "RecordDelimiter", &self.record_delimiter);
            push_optional(&mut data, "FieldDelimiter", &self.field_delimiter);
            push_optional(&mut data, "QuoteCharacter", &self.quote_character);
            data.push_str("</CSV>");
        }
        data.push_str("</InputSerialization>");

        if self.overwrite_if_exists {
            data.push_str("<OverwriteIfExists>true</OverwriteIfExists>");
        }

        data.push_str("</CsvMetaRequest>");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_xml() {
        assert_eq!(
            CsvMetaRequest::new().to_xml(),
            "<CsvMetaRequest><InputSerialization><CompressionType>None</CompressionType>\
             </InputSerialization></CsvMetaRequest>"
        );
    }

    #[test]
    fn test_all_fields_to_xml() {
        let request = CsvMetaRequest::with_options([
            CsvMetaOption::RecordDelimiter("\n".into()),
            CsvMetaOption::FieldDelimiter(",".into()),
            CsvMetaOption::QuoteCharacter("\"".into()),
            CsvMetaOption::OverwriteIfExists(true),
        ])
        .unwrap();

        assert_eq!(
            request.to_xml(),
            "<CsvMetaRequest><InputSerialization><CompressionType>None</CompressionType>\
             <CSV><RecordDelimiter>Cg==</RecordDelimiter><FieldDelimiter>LA==</FieldDelimiter>\
             <QuoteCharacter>Ig==</QuoteCharacter></CSV></InputSerialization>\
             <OverwriteIfExists>true</OverwriteIfExists></CsvMetaRequest>"
        );
    }

    #[test]
    fn test_with_options_rejects_unknown_compression() {
        assert!(matches!(
            CsvMetaRequest::with_options([CsvMetaOption::CompressionType("zip".into())]),
            Err(ValidationErr::InvalidCompressionType(_))
        ));
    }
}
