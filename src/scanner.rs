use std::io::{self, BufRead};
use std::mem;

use log::{debug, trace};
use thiserror::Error;

use crate::dns_parser::{Message, PresentationDecoder, RecordDecoder};
use crate::extract::{self, ExtractError};
use crate::section::{Marker, Section};

/// Error parsing `dig` output
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: failed to parse {section} section")]
    Section {
        line: usize,
        section: Section,
        #[source]
        source: ExtractError,
    },
    #[error("error reading input")]
    Io(#[from] io::Error),
}

/// Splits `dig` output into sections and assembles the messages it prints
///
/// A parser holds no state between calls, so one value can be reused for
/// any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct DigParser<D = PresentationDecoder> {
    decoder: D,
    lenient_questions: bool,
}

impl DigParser {
    pub fn new() -> DigParser {
        DigParser::default()
    }
}

impl<D: RecordDecoder> DigParser<D> {
    /// Creates a parser handing answer, authority and additional lines to
    /// `decoder`
    pub fn with_decoder(decoder: D) -> DigParser<D> {
        DigParser {
            decoder,
            lenient_questions: false,
        }
    }

    /// When set, an unknown question class or type is recorded as code zero
    /// instead of failing the parse
    pub fn lenient_questions(mut self, lenient: bool) -> DigParser<D> {
        self.lenient_questions = lenient;
        self
    }

    pub fn parse(&self, text: &str) -> Result<Vec<Message>, ParseError> {
        self.parse_reader(text.as_bytes())
    }

    /// Parses every message found in `reader`, in the order their header
    /// lines appear
    ///
    /// The first failing line aborts the whole parse.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Message>, ParseError> {
        let mut messages = Vec::new();
        let mut message = Message::default();
        let mut section = Section::None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;

            let data = match Marker::recognize(&line) {
                Some(marker) => {
                    if marker.starts_message() && message.is_present() {
                        debug!("parsed message with id {}", message.header.id);
                        messages.push(mem::take(&mut message));
                    }
                    section = marker.section();
                    trace!("line {}: entering {} section", idx + 1, section);
                    match marker.payload() {
                        Some(data) => data,
                        None => continue,
                    }
                }
                None => line.as_str(),
            };

            self.extract(section, data, &mut message)
                .map_err(|source| ParseError::Section {
                    line: idx + 1,
                    section,
                    source,
                })?;
        }

        if message.is_present() {
            debug!("parsed message with id {}", message.header.id);
            messages.push(message);
        }

        Ok(messages)
    }

    fn extract(
        &self,
        section: Section,
        data: &str,
        message: &mut Message,
    ) -> Result<(), ExtractError> {
        match section {
            Section::None => Ok(()),
            Section::Header => extract::header(data, message),
            Section::Flags => extract::flags(data, message),
            Section::Question => extract::question(data, message, self.lenient_questions),
            Section::Answer => {
                if let Some(rr) = extract::record(data, &self.decoder)? {
                    message.answers.push(rr);
                }
                Ok(())
            }
            Section::Authority => {
                if let Some(rr) = extract::record(data, &self.decoder)? {
                    message.authority.push(rr);
                }
                Ok(())
            }
            Section::Additional => {
                if let Some(rr) = extract::record(data, &self.decoder)? {
                    message.additional.push(rr);
                }
                Ok(())
            }
        }
    }
}
