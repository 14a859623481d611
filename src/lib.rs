//! Parser for the text output of the `dig` DNS lookup tool.
//!
//! `dig` prints each DNS message as a sequence of labelled sections:
//!
//! ```text
//! ;; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 7
//! ;; flags: qr rd; QUERY: 1, ANSWER: 1, AUTHORITY: 0, ADDITIONAL: 0
//!
//! ;; QUESTION SECTION:
//! ;example.com.			IN	A
//!
//! ;; ANSWER SECTION:
//! example.com.		30	IN	A	10.0.0.1
//! ```
//!
//! [`parse`] turns such text back into [`Message`] values. Output of several
//! `dig` invocations may be concatenated, each `->>HEADER<<-` line starts a
//! new message.
//!
//! ```
//! let text = ";; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 7\n\
//!             ;; flags: qr rd; QUERY: 1, ANSWER: 1\n\
//!             ;; QUESTION SECTION:\n\
//!             ;example.com.\tIN\tA\n\
//!             ;; ANSWER SECTION:\n\
//!             example.com.\t30\tIN\tA\t10.0.0.1\n";
//!
//! let messages = digparse::parse(text).unwrap();
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].header.id, 7);
//! assert_eq!(messages[0].answers[0].data.to_string(), "10.0.0.1");
//! ```

pub mod dns_parser;
mod extract;
mod scanner;
mod section;

pub use crate::dns_parser::{Message, Question, RRData, ResourceRecord};
pub use crate::extract::ExtractError;
pub use crate::scanner::{DigParser, ParseError};
pub use crate::section::Section;

/// Parses `dig` output with the default record decoder
pub fn parse(text: &str) -> Result<Vec<Message>, ParseError> {
    DigParser::new().parse(text)
}
