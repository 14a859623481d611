//! Field extractors, one per section of `dig` output.
//!
//! Each extractor receives the text of one line (for the header and flags
//! sections, only the text after the marker) and updates the message being
//! built. Blank lines are always a no-op.

use log::{trace, warn};
use thiserror::Error;

use crate::dns_parser::{
    Class, Message, Opcode, Question, RecordDecoder, RecordSyntaxError, ResourceRecord,
    ResponseCode, Type,
};

/// Error produced while extracting fields from a single line
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid {field} value {value:?} in header")]
    InvalidHeaderField { field: &'static str, value: String },
    #[error("question has no {0} field")]
    MissingQuestionField(&'static str),
    #[error("invalid {field} {value:?} in question")]
    InvalidQuestionField { field: &'static str, value: String },
    #[error("invalid resource record")]
    Record(#[from] RecordSyntaxError),
}

fn invalid_header(field: &'static str, value: &str) -> ExtractError {
    ExtractError::InvalidHeaderField {
        field,
        value: value.to_owned(),
    }
}

/// Reads `opcode: QUERY, status: NOERROR, id: 1`
///
/// Tokens that are not a `key: value` pair and unknown keys are skipped.
pub fn header(data: &str, message: &mut Message) -> Result<(), ExtractError> {
    if data.trim().is_empty() {
        return Ok(());
    }

    for token in data.split(", ") {
        let (key, value) = match token.split_once(": ") {
            Some((key, value)) => (key.trim(), value.trim()),
            None => {
                trace!("skipping malformed header field {:?}", token);
                continue;
            }
        };

        match key {
            "opcode" => {
                message.header.opcode =
                    Opcode::from_name(value).ok_or_else(|| invalid_header("opcode", value))?
            }
            "status" => {
                message.header.response_code =
                    ResponseCode::from_name(value).ok_or_else(|| invalid_header("status", value))?
            }
            "id" => message.header.id = value.parse().map_err(|_| invalid_header("id", value))?,
            _ => trace!("ignoring header field {:?}", key),
        }
    }

    Ok(())
}

/// Reads `qr rd ra; QUERY: 1, ANSWER: 0, ...`
///
/// Only `qr`, `rd` and `ra` are recorded. Flags are set, never cleared.
pub fn flags(data: &str, message: &mut Message) -> Result<(), ExtractError> {
    let flags = data.split(';').next().unwrap_or_default().trim();

    for flag in flags.split_whitespace() {
        match flag {
            "qr" => message.header.response = true,
            "rd" => message.header.recursion_desired = true,
            "ra" => message.header.recursion_available = true,
            _ => trace!("ignoring flag {:?}", flag),
        }
    }

    Ok(())
}

/// Reads `;example.com.  IN  A`
///
/// A question line carries exactly one leading `;` glued to the name. Lines
/// with `;;` or `; ` in front, such as the `;; Query time:` footer or the
/// `; <<>> DiG` banner of a following output, are comments.
///
/// With `lenient` set, an unknown class or type becomes code zero instead
/// of an error.
pub fn question(data: &str, message: &mut Message, lenient: bool) -> Result<(), ExtractError> {
    let data = data.trim();
    let body = data.strip_prefix(';').unwrap_or(data);
    if body.is_empty() || body.starts_with(|c: char| c == ';' || c.is_whitespace()) {
        if !data.is_empty() {
            trace!("skipping comment {:?} in question section", data);
        }
        return Ok(());
    }

    let mut fields = body.split_whitespace();
    let qname = fields
        .next()
        .ok_or(ExtractError::MissingQuestionField("name"))?;
    let qclass = fields
        .next()
        .ok_or(ExtractError::MissingQuestionField("class"))?;
    let qtype = fields
        .next()
        .ok_or(ExtractError::MissingQuestionField("type"))?;

    let qclass = match Class::from_name(qclass) {
        Some(qclass) => qclass,
        None if lenient => {
            warn!("unknown question class {:?}, using class 0", qclass);
            Class::Unknown(0)
        }
        None => {
            return Err(ExtractError::InvalidQuestionField {
                field: "class",
                value: qclass.to_owned(),
            })
        }
    };
    let qtype = match Type::from_name(qtype) {
        Some(qtype) => qtype,
        None if lenient => {
            warn!("unknown question type {:?}, using type 0", qtype);
            Type::Unknown(0)
        }
        None => {
            return Err(ExtractError::InvalidQuestionField {
                field: "type",
                value: qtype.to_owned(),
            })
        }
    };

    message.questions.push(Question {
        qname: qname
            .parse()
            .map_err(|_| ExtractError::InvalidQuestionField {
                field: "name",
                value: qname.to_owned(),
            })?,
        qclass,
        qtype,
    });

    Ok(())
}

/// Decodes one answer, authority or additional line
///
/// Comment lines, such as the `;; Query time:` footer following the last
/// section, produce no record.
pub fn record<D: RecordDecoder + ?Sized>(
    data: &str,
    decoder: &D,
) -> Result<Option<ResourceRecord>, ExtractError> {
    let data = data.trim();
    if data.is_empty() || data.starts_with(';') {
        return Ok(None);
    }

    Ok(Some(decoder.decode(data)?))
}

#[cfg(test)]
mod test {
    use std::net::Ipv4Addr;

    use super::{flags, header, question, record, ExtractError};
    use crate::dns_parser::{
        Class, Message, Opcode, PresentationDecoder, RRData, RecordSyntaxError, ResponseCode,
        Type,
    };

    #[test]
    fn header_fields() {
        let mut message = Message::default();
        header("opcode: NOTIFY, status: NXDOMAIN, id: 4242", &mut message).unwrap();
        assert_eq!(message.header.opcode, Opcode::Notify);
        assert_eq!(message.header.response_code, ResponseCode::NameError);
        assert_eq!(message.header.id, 4242);
    }

    #[test]
    fn header_skips_malformed_and_unknown_fields() {
        let mut message = Message::default();
        header("garbage, opcode:QUERY, future: 1, id: 9", &mut message).unwrap();
        assert_eq!(message.header.id, 9);
        assert_eq!(message.header.opcode, Opcode::Query);
    }

    #[test]
    fn header_blank_is_noop() {
        let mut message = Message::default();
        header("   ", &mut message).unwrap();
        assert_eq!(message, Message::default());
    }

    #[test]
    fn header_rejects_bad_values() {
        let mut message = Message::default();
        match header("opcode: FROB", &mut message) {
            Err(ExtractError::InvalidHeaderField { field, value }) => {
                assert_eq!(field, "opcode");
                assert_eq!(value, "FROB");
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(
            header("status: NOPE", &mut message),
            Err(ExtractError::InvalidHeaderField { field: "status", .. })
        ));
        assert!(matches!(
            header("id: 65536", &mut message),
            Err(ExtractError::InvalidHeaderField { field: "id", .. })
        ));
        assert!(matches!(
            header("id: -1", &mut message),
            Err(ExtractError::InvalidHeaderField { field: "id", .. })
        ));
    }

    #[test]
    fn flags_ignore_counts_and_unknown_tokens() {
        let mut message = Message::default();
        flags("qr aa rd ad; QUERY: 1, ANSWER: 0, ra: 1", &mut message).unwrap();
        assert!(message.header.response);
        assert!(message.header.recursion_desired);
        assert!(!message.header.recursion_available);
    }

    #[test]
    fn flags_are_never_cleared() {
        let mut message = Message::default();
        flags("qr rd ra;", &mut message).unwrap();
        flags("; EDNS: version: 0, flags:; udp: 1232", &mut message).unwrap();
        flags("", &mut message).unwrap();
        assert!(message.header.response);
        assert!(message.header.recursion_desired);
        assert!(message.header.recursion_available);
    }

    #[test]
    fn question_fields() {
        let mut message = Message::default();
        question(";example.com.\t\tIN\tMX", &mut message, false).unwrap();
        assert_eq!(message.questions.len(), 1);
        let q = &message.questions[0];
        assert_eq!(q.qname.as_str(), "example.com.");
        assert_eq!(q.qclass, Class::IN);
        assert_eq!(q.qtype, Type::MX);
    }

    #[test]
    fn question_missing_fields() {
        let mut message = Message::default();
        assert!(matches!(
            question(";example.com. IN", &mut message, false),
            Err(ExtractError::MissingQuestionField("type"))
        ));
        assert!(message.questions.is_empty());
    }

    #[test]
    fn question_skips_comment_lines() {
        let comments = [
            "",
            ";",
            ";; Got answer:",
            ";; Query time: 4 msec",
            ";; SERVER: 127.0.0.53#53(127.0.0.53) (UDP)",
            ";; MSG SIZE  rcvd: 40",
            "; <<>> DiG 9.18.24 <<>> example.com MX",
        ];
        for &lenient in [false, true].iter() {
            let mut message = Message::default();
            for line in comments.iter() {
                question(line, &mut message, lenient).unwrap();
            }
            assert!(message.questions.is_empty());
        }
    }

    #[test]
    fn question_unknown_names() {
        let mut message = Message::default();
        assert!(matches!(
            question(";example.com. XX A", &mut message, false),
            Err(ExtractError::InvalidQuestionField { field: "class", .. })
        ));
        assert!(matches!(
            question(";example.com. IN BOGUS", &mut message, false),
            Err(ExtractError::InvalidQuestionField { field: "type", .. })
        ));

        question(";example.com. XX BOGUS", &mut message, true).unwrap();
        assert_eq!(message.questions[0].qclass, Class::Unknown(0));
        assert_eq!(message.questions[0].qtype, Type::Unknown(0));
    }

    #[test]
    fn record_lines() {
        let rr = record("example.com.\t30\tIN\tA\t10.0.0.1", &PresentationDecoder)
            .unwrap()
            .unwrap();
        assert_eq!(rr.data, RRData::A(Ipv4Addr::new(10, 0, 0, 1)));

        assert!(record("", &PresentationDecoder).unwrap().is_none());
        assert!(record(";; Query time: 3 msec", &PresentationDecoder)
            .unwrap()
            .is_none());

        assert!(matches!(
            record("example.com. 30 IN A nope", &PresentationDecoder),
            Err(ExtractError::Record(RecordSyntaxError::InvalidAddress(_)))
        ));
    }
}
