use std::fmt;

use super::{Class, Name, Opcode, RRData, ResponseCode, Type};

/// Header fields `dig` prints on its `->>HEADER<<-` and `flags:` lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Transaction id, zero until a header line set it
    pub id: u16,
    pub opcode: Opcode,
    pub response_code: ResponseCode,
    pub response: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
}

/// One DNS transaction as printed by `dig`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl Message {
    /// A message is only worth emitting once a header gave it an id
    pub fn is_present(&self) -> bool {
        self.header.id != 0
    }
}

/// An entry of the question section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: Name,
    pub qclass: Class,
    pub qtype: Type,
}

/// A single DNS record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Name,
    pub cls: Class,
    pub ttl: u32,
    pub data: RRData,
}

impl fmt::Display for Question {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, ";{}\t{}\t {}", self.qname, self.qclass, self.qtype)
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{}\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            self.cls,
            self.data.typ(),
            self.data
        )
    }
}

impl fmt::Display for Header {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            fmt,
            ";; opcode: {}, status: {}, id: {}",
            self.opcode, self.response_code, self.id
        )?;
        fmt.write_str(";; flags:")?;
        let flags = [
            (self.response, "qr"),
            (self.recursion_desired, "rd"),
            (self.recursion_available, "ra"),
        ];
        for &(set, flag) in flags.iter() {
            if set {
                write!(fmt, " {}", flag)?;
            }
        }
        fmt.write_str(";")
    }
}

fn write_section<T: fmt::Display>(
    fmt: &mut fmt::Formatter,
    title: &str,
    entries: &[T],
) -> fmt::Result {
    if entries.is_empty() {
        return Ok(());
    }
    writeln!(fmt, "\n;; {} SECTION:", title)?;
    for entry in entries {
        writeln!(fmt, "{}", entry)?;
    }
    Ok(())
}

/// Renders the message the way `dig` lays it out, minus the
/// `->>HEADER<<-` marker
impl fmt::Display for Message {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            fmt,
            "{} QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            self.header,
            self.questions.len(),
            self.answers.len(),
            self.authority.len(),
            self.additional.len()
        )?;
        write_section(fmt, "QUESTION", &self.questions)?;
        write_section(fmt, "ANSWER", &self.answers)?;
        write_section(fmt, "AUTHORITY", &self.authority)?;
        write_section(fmt, "ADDITIONAL", &self.additional)
    }
}
