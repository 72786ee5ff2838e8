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

//! `SelectRequest` body of the SelectObject operation

use super::{
    CompressionType, FileHeaderInfo, RangeMode, SelectRange, encode_field, push_element,
    push_optional,
};
use crate::oss::error::ValidationErr;
use crate::oss::utils::b64encode;

/// One setting of a [`SelectRequest`], for callers that assemble options as data.
///
/// Values are validated when applied by [`SelectRequest::with_options`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOption {
    /// One of `Use`, `Ignore`, `None`
    FileHeaderInfo(String),
    /// One of `None`, `GZIP`
    CompressionType(String),
    InputRecordDelimiter(String),
    InputFieldDelimiter(String),
    QuoteCharacter(String),
    CommentCharacter(String),
    /// `mode` is one of `line`, `split`
    Range { mode: String, start: u64, end: u64 },
    OutputRawData(bool),
    OutputRecordDelimiter(String),
    OutputFieldDelimiter(String),
    KeepAllColumns(bool),
}

/// Body of a SelectObject request over a CSV object.
///
/// The expression and every delimiter, quote and comment value are stored
/// base64 encoded; they are encoded once, when set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectRequest {
    expression: String,
    compression_type: CompressionType,
    file_header_info: FileHeaderInfo,
    input_record_delimiter: Option<String>,
    input_field_delimiter: Option<String>,
    quote_character: Option<String>,
    comment_character: Option<String>,
    range: Option<SelectRange>,
    output_raw_data: bool,
    output_record_delimiter: Option<String>,
    output_field_delimiter: Option<String>,
    keep_all_columns: bool,
}

impl SelectRequest {
    /// Creates a request for given SQL expression with default settings: no
    /// compression, no header line and raw output data.
    ///
    /// # Examples
    ///
    /// ```
    /// use oss_select::oss::types::{FileHeaderInfo, RangeMode, SelectRequest};
    ///
    /// let request = SelectRequest::new("select * from ossobject")
    ///     .unwrap()
    ///     .file_header_info(FileHeaderInfo::Use)
    ///     .input_field_delimiter("|")
    ///     .range(RangeMode::Line, 0, 99)
    ///     .unwrap();
    /// ```
    pub fn new(expression: &str) -> Result<Self, ValidationErr> {
        if expression.is_empty() {
            return Err(ValidationErr::InvalidSelectExpression(
                "select expression cannot be empty".into(),
            ));
        }

        Ok(SelectRequest {
            expression: b64encode(expression),
            compression_type: CompressionType::None,
            file_header_info: FileHeaderInfo::None,
            input_record_delimiter: None,
            input_field_delimiter: None,
            quote_character: None,
            comment_character: None,
            range: None,
            output_raw_data: true,
            output_record_delimiter: None,
            output_field_delimiter: None,
            keep_all_columns: false,
        })
    }

    /// Creates a request and applies `options` in order. Later options
    /// overwrite earlier ones; the first invalid option aborts construction.
    pub fn with_options<I>(expression: &str, options: I) -> Result<Self, ValidationErr>
    where
        I: IntoIterator<Item = SelectOption>,
    {
        options
            .into_iter()
            .try_fold(Self::new(expression)?, |request, option| request.apply(option))
    }

    fn apply(self, option: SelectOption) -> Result<Self, ValidationErr> {
        Ok(match option {
            SelectOption::FileHeaderInfo(v) => self.file_header_info(v.parse()?),
            SelectOption::CompressionType(v) => self.compression_type(v.parse()?),
            SelectOption::InputRecordDelimiter(v) => self.input_record_delimiter(&v),
            SelectOption::InputFieldDelimiter(v) => self.input_field_delimiter(&v),
            SelectOption::QuoteCharacter(v) => self.quote_character(&v),
            SelectOption::CommentCharacter(v) => self.comment_character(&v),
            SelectOption::Range { mode, start, end } => self.range(mode.parse()?, start, end)?,
            SelectOption::OutputRawData(v) => self.output_raw_data(v),
            SelectOption::OutputRecordDelimiter(v) => self.output_record_delimiter(&v),
            SelectOption::OutputFieldDelimiter(v) => self.output_field_delimiter(&v),
            SelectOption::KeepAllColumns(v) => self.keep_all_columns(v),
        })
    }

    pub fn compression_type(mut self, compression_type: CompressionType) -> Self {
        self.compression_type = compression_type;
        self
    }

    pub fn file_header_info(mut self, file_header_info: FileHeaderInfo) -> Self {
        self.file_header_info = file_header_info;
        self
    }

    pub fn input_record_delimiter(mut self, delimiter: &str) -> Self {
        self.input_record_delimiter = encode_field(delimiter);
        self
    }

    pub fn input_field_delimiter(mut self, delimiter: &str) -> Self {
        self.input_field_delimiter = encode_field(delimiter);
        self
    }

    pub fn quote_character(mut self, quote: &str) -> Self {
        self.quote_character = encode_field(quote);
        self
    }

    pub fn comment_character(mut self, comment: &str) -> Self {
        self.comment_character = encode_field(comment);
        self
    }

    /// Restricts the scan to lines or splits `start..=end`.
    pub fn range(mut self, mode: RangeMode, start: u64, end: u64) -> Result<Self, ValidationErr> {
        self.range = Some(SelectRange::new(mode, start, end)?);
        Ok(self)
    }

    pub fn output_raw_data(mut self, output_raw_data: bool) -> Self {
        self.output_raw_data = output_raw_data;
        self
    }

    pub fn output_record_delimiter(mut self, delimiter: &str) -> Self {
        self.output_record_delimiter = encode_field(delimiter);
        self
    }

    pub fn output_field_delimiter(mut self, delimiter: &str) -> Self {
        self.output_field_delimiter = encode_field(delimiter);
        self
    }

    pub fn keep_all_columns(mut self, keep_all_columns: bool) -> Self {
        self.keep_all_columns = keep_all_columns;
        self
    }

    /// Base64 encoded expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn get_file_header_info(&self) -> FileHeaderInfo {
        self.file_header_info
    }

    pub fn get_compression_type(&self) -> CompressionType {
        self.compression_type
    }

    /// Base64 encoded input field delimiter, if set.
    pub fn get_input_field_delimiter(&self) -> Option<&str> {
        self.input_field_delimiter.as_deref()
    }

    /// Base64 encoded input record delimiter, if set.
    pub fn get_input_record_delimiter(&self) -> Option<&str> {
        self.input_record_delimiter.as_deref()
    }

    pub fn get_range(&self) -> Option<&SelectRange> {
        self.range.as_ref()
    }

    pub fn is_output_raw_data(&self) -> bool {
        self.output_raw_data
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from("<SelectRequest>");
        push_element(&mut data, "Expression", &self.expression);

        data.push_str("<InputSerialization>");
        push_element(
            &mut data,
            "CompressionType",
            &self.compression_type.to_string(),
        );
        data.push_str("<CSV>");
        push_element(
            &mut data,
            "FileHeaderInfo",
            &self.file_header_info.to_string(),
        );
        push_optional(&mut data, "RecordDelimiter", &self.input_record_delimiter);
        push_optional(&mut data, "FieldDelimiter", &self.input_field_delimiter);
        push_optional(&mut data, "QuoteCharacter", &self.quote_character);
        push_optional(&mut data, "CommentCharacter", &self.comment_character);
        if let Some(range) = &self.range {
            push_element(&mut data, "Range", &range.to_string());
        }
        data.push_str("</CSV>");
        data.push_str("</InputSerialization>");

        let has_csv_output = self.output_record_delimiter.is_some()
            || self.output_field_delimiter.is_some()
            || self.keep_all_columns;
        if self.output_raw_data || has_csv_output {
            data.push_str("<OutputSerialization>");
            if self.output_raw_data {
                data.push_str("<OutputRawData>true</OutputRawData>");
            }
            if has_csv_output {
                data.push_str("<CSV>");
                push_optional(&mut data, "RecordDelimiter", &self.output_record_delimiter);
                push_optional(&mut data, "FieldDelimiter", &self.output_field_delimiter);
                if self.keep_all_columns {
                    data.push_str("<KeepAllColumns>true</KeepAllColumns>");
                }
                data.push_str("</CSV>");
            }
            data.push_str("</OutputSerialization>");
        }

        data.push_str("</SelectRequest>");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;

    fn decode(value: &str) -> String {
        String::from_utf8(STANDARD.decode(value).unwrap()).unwrap()
    }

    #[test]
    fn test_defaults_to_xml() {
        let request = SelectRequest::new("select * from ossobject").unwrap();
        assert_eq!(
            request.to_xml(),
            "<SelectRequest>\
             <Expression>c2VsZWN0ICogZnJvbSBvc3NvYmplY3Q=</Expression>\
             <InputSerialization><CompressionType>None</CompressionType>\
             <CSV><FileHeaderInfo>None</FileHeaderInfo></CSV></InputSerialization>\
             <OutputSerialization><OutputRawData>true</OutputRawData></OutputSerialization>\
             </SelectRequest>"
        );
    }

    #[test]
    fn test_all_fields_to_xml() {
        let request = SelectRequest::new("select _1 from ossobject")
            .unwrap()
            .compression_type(CompressionType::Gzip)
            .file_header_info(FileHeaderInfo::Use)
            .input_record_delimiter("\r\n")
            .input_field_delimiter(",")
            .quote_character("\"")
            .comment_character("#")
            .range(RangeMode::Line, 0, 10)
            .unwrap()
            .output_raw_data(false)
            .output_record_delimiter("\n")
            .output_field_delimiter("|")
            .keep_all_columns(true);

        assert_eq!(
            request.to_xml(),
            "<SelectRequest>\
             <Expression>c2VsZWN0IF8xIGZyb20gb3Nzb2JqZWN0</Expression>\
             <InputSerialization><CompressionType>GZIP</CompressionType>\
             <CSV><FileHeaderInfo>Use</FileHeaderInfo>\
             <RecordDelimiter>DQo=</RecordDelimiter><FieldDelimiter>LA==</FieldDelimiter>\
             <QuoteCharacter>Ig==</QuoteCharacter><CommentCharacter>Iw==</CommentCharacter>\
             <Range>line-range=0-10</Range></CSV></InputSerialization>\
             <OutputSerialization><CSV><RecordDelimiter>Cg==</RecordDelimiter>\
             <FieldDelimiter>fA==</FieldDelimiter><KeepAllColumns>true</KeepAllColumns></CSV>\
             </OutputSerialization></SelectRequest>"
        );
    }

    #[test]
    fn test_output_serialization_omitted_when_empty() {
        let request = SelectRequest::new("select * from ossobject")
            .unwrap()
            .output_raw_data(false);
        assert!(!request.to_xml().contains("OutputSerialization"));
    }

    #[test]
    fn test_empty_expression_rejected() {
        assert!(matches!(
            SelectRequest::new(""),
            Err(ValidationErr::InvalidSelectExpression(_))
        ));
    }

    #[test]
    fn test_empty_delimiter_is_unset() {
        let request = SelectRequest::new("select * from ossobject")
            .unwrap()
            .input_field_delimiter(",")
            .input_field_delimiter("");
        assert_eq!(request.get_input_field_delimiter(), None);
        assert!(!request.to_xml().contains("FieldDelimiter"));
    }

    #[test]
    fn test_multibyte_delimiter_encoded_once() {
        let request = SelectRequest::new("select * from ossobject")
            .unwrap()
            .input_record_delimiter("\u{2028}")
            .input_field_delimiter("\t");
        assert_eq!(decode(request.get_input_record_delimiter().unwrap()), "\u{2028}");
        assert_eq!(decode(request.get_input_field_delimiter().unwrap()), "\t");
        assert!(!request.to_xml().contains('\t'));
    }

    #[test]
    fn test_with_options_applies_in_order() {
        let request = SelectRequest::with_options(
            "select * from ossobject",
            [
                SelectOption::FileHeaderInfo("Use".into()),
                SelectOption::InputFieldDelimiter(";".into()),
                SelectOption::FileHeaderInfo("Ignore".into()),
                SelectOption::Range {
                    mode: "split".into(),
                    start: 1,
                    end: 2,
                },
            ],
        )
        .unwrap();
        assert_eq!(request.get_file_header_info(), FileHeaderInfo::Ignore);
        assert_eq!(decode(request.get_input_field_delimiter().unwrap()), ";");
        assert_eq!(request.get_range().unwrap().to_string(), "split-range=1-2");
    }

    #[test]
    fn test_with_options_rejects_invalid_file_header_info() {
        let result = SelectRequest::with_options(
            "select * from ossobject",
            [
                SelectOption::InputFieldDelimiter(",".into()),
                SelectOption::FileHeaderInfo("Maybe".into()),
            ],
        );
        assert!(matches!(
            result,
            Err(ValidationErr::InvalidFileHeaderInfo(v)) if v == "Maybe"
        ));
    }

    #[test]
    fn test_with_options_rejects_invalid_range_mode() {
        let result = SelectRequest::with_options(
            "select * from ossobject",
            [SelectOption::Range {
                mode: "page".into(),
                start: 0,
                end: 1,
            }],
        );
        assert!(matches!(result, Err(ValidationErr::InvalidRangeMode(_))));
    }

    quickcheck! {
        fn prop_delimiter_decodes_to_input(value: String) -> bool {
            let request = SelectRequest::new("select * from ossobject")
                .unwrap()
                .output_field_delimiter(&value);
            match request.output_field_delimiter.as_deref() {
                None => value.is_empty(),
                Some(encoded) => decode(encoded) == value,
            }
        }
    }
}
