use std::fmt::Debug;

use super::{Class, Name, RRData, RecordSyntaxError, ResourceRecord, Type};

/// TTL assumed for records printed without one
pub const DEFAULT_TTL: u32 = 3600;

/// Turns one line of resource-record presentation format into a record
///
/// The section scanner only ever talks to this trait, so a different record
/// syntax can be plugged in without touching the scanner.
pub trait RecordDecoder: Debug {
    fn decode(&self, line: &str) -> Result<ResourceRecord, RecordSyntaxError>;
}

/// Decoder for the `name [ttl] [class] type rdata...` syntax `dig` prints
///
/// TTL and class may be left out and may come in either order. Typed data
/// is produced for the common record types, anything else keeps the RDATA
/// text verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationDecoder;

impl RecordDecoder for PresentationDecoder {
    fn decode(&self, line: &str) -> Result<ResourceRecord, RecordSyntaxError> {
        let mut fields = Fields::new(line);
        let name = fields.required("name")?.text.parse::<Name>()?;

        let mut ttl = None;
        let mut cls = None;
        let typ = loop {
            let field = fields.required("type")?;
            if field.quoted {
                return Err(RecordSyntaxError::InvalidType(field.text.to_owned()));
            }
            if ttl.is_none() && field.text.starts_with(|c: char| c.is_ascii_digit()) {
                let value = field
                    .text
                    .parse::<u32>()
                    .map_err(|_| RecordSyntaxError::InvalidTtl(field.text.to_owned()))?;
                ttl = Some(value);
                continue;
            }
            if cls.is_none() {
                if let Some(value) = Class::from_name(field.text) {
                    cls = Some(value);
                    continue;
                }
            }
            break Type::from_name(field.text)
                .ok_or_else(|| RecordSyntaxError::InvalidType(field.text.to_owned()))?;
        };

        let data = RRData::parse(typ, &mut fields)?;

        Ok(ResourceRecord {
            name,
            cls: cls.unwrap_or(Class::IN),
            ttl: ttl.unwrap_or(DEFAULT_TTL),
            data,
        })
    }
}

/// One whitespace-separated field, or the contents of a quoted string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Field<'a> {
    pub text: &'a str,
    pub quoted: bool,
}

/// Splits a presentation-format line into fields
///
/// Quoted strings form a single field with the quotes removed; escapes
/// inside them are kept as written.
#[derive(Debug)]
pub(crate) struct Fields<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Fields<'a> {
    pub fn new(line: &'a str) -> Fields<'a> {
        Fields { line, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.line[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    pub fn next_field(&mut self) -> Result<Option<Field<'a>>, RecordSyntaxError> {
        self.skip_whitespace();
        let rest = &self.line[self.pos..];
        if rest.is_empty() {
            return Ok(None);
        }

        if let Some(quoted) = rest.strip_prefix('"') {
            let mut escaped = false;
            for (idx, c) in quoted.char_indices() {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => {
                        self.pos += idx + 2;
                        return Ok(Some(Field {
                            text: &quoted[..idx],
                            quoted: true,
                        }));
                    }
                    _ => {}
                }
            }
            return Err(RecordSyntaxError::UnterminatedString);
        }

        let end = rest.find(char::is_whitespace).unwrap_or_else(|| rest.len());
        self.pos += end;
        Ok(Some(Field {
            text: &rest[..end],
            quoted: false,
        }))
    }

    /// Like `next_field`, but running out of fields is an error
    pub fn required(&mut self, what: &'static str) -> Result<Field<'a>, RecordSyntaxError> {
        self.next_field()?
            .ok_or(RecordSyntaxError::MissingField(what))
    }

    /// Everything not consumed yet, without surrounding whitespace
    pub fn rest(&mut self) -> &'a str {
        let rest = self.line[self.pos..].trim();
        self.pos = self.line.len();
        rest
    }

    pub fn finish(&mut self) -> Result<(), RecordSyntaxError> {
        match self.rest() {
            "" => Ok(()),
            rest => Err(RecordSyntaxError::TrailingData(rest.to_owned())),
        }
    }
}

#[cfg(test)]
mod test {
    use std::net::Ipv4Addr;

    use super::{Field, Fields, PresentationDecoder, RecordDecoder, DEFAULT_TTL};
    use crate::dns_parser::{Class, RRData, RecordSyntaxError, Type};

    #[test]
    fn decode_a_record() {
        let rr = PresentationDecoder
            .decode("example.com.\t30\tIN\tA\t10.0.0.1")
            .unwrap();
        assert_eq!(rr.name.as_str(), "example.com.");
        assert_eq!(rr.ttl, 30);
        assert_eq!(rr.cls, Class::IN);
        assert_eq!(rr.data, RRData::A(Ipv4Addr::new(10, 0, 0, 1)));
    }

    #[test]
    fn ttl_and_class_are_optional() {
        let rr = PresentationDecoder.decode("example.com. A 10.0.0.1").unwrap();
        assert_eq!(rr.ttl, DEFAULT_TTL);
        assert_eq!(rr.cls, Class::IN);

        let rr = PresentationDecoder
            .decode("version.bind. CH 0 TXT \"9.18\"")
            .unwrap();
        assert_eq!(rr.ttl, 0);
        assert_eq!(rr.cls, Class::CH);
        assert_eq!(rr.data.typ(), Type::TXT);
    }

    #[test]
    fn missing_type() {
        assert_eq!(
            PresentationDecoder.decode("example.com. 30 IN"),
            Err(RecordSyntaxError::MissingField("type"))
        );
    }

    #[test]
    fn bad_type_and_ttl() {
        assert_eq!(
            PresentationDecoder.decode("example.com. 30 IN BOGUS 1"),
            Err(RecordSyntaxError::InvalidType("BOGUS".into()))
        );
        assert_eq!(
            PresentationDecoder.decode("example.com. 30s IN A 10.0.0.1"),
            Err(RecordSyntaxError::InvalidTtl("30s".into()))
        );
    }

    #[test]
    fn split_quoted_fields() {
        let mut fields = Fields::new(r#"  "a b" c  "d\"e" "#);
        assert_eq!(
            fields.next_field().unwrap(),
            Some(Field { text: "a b", quoted: true })
        );
        assert_eq!(
            fields.next_field().unwrap(),
            Some(Field { text: "c", quoted: false })
        );
        assert_eq!(
            fields.next_field().unwrap(),
            Some(Field { text: r#"d\"e"#, quoted: true })
        );
        assert_eq!(fields.next_field().unwrap(), None);
    }

    #[test]
    fn unterminated_string() {
        let mut fields = Fields::new("\"abc");
        assert_eq!(fields.next_field(), Err(RecordSyntaxError::UnterminatedString));
    }
}
