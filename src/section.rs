use std::fmt;

const HEADER_MARKER: &str = ";; ->>HEADER<<- ";
const FLAGS_MARKER: &str = ";; flags: ";
const QUESTION_MARKER: &str = ";; QUESTION SECTION:";
const ANSWER_MARKER: &str = ";; ANSWER SECTION:";
const AUTHORITY_MARKER: &str = ";; AUTHORITY SECTION:";
const ADDITIONAL_MARKER: &str = ";; ADDITIONAL SECTION:";

/// The region of `dig` output the scanner is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// No marker seen yet, lines are ignored
    None,
    Header,
    Flags,
    Question,
    Answer,
    Authority,
    Additional,
}

impl Default for Section {
    fn default() -> Section {
        Section::None
    }
}

impl fmt::Display for Section {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(match *self {
            Section::None => "no",
            Section::Header => "header",
            Section::Flags => "flags",
            Section::Question => "question",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        })
    }
}

/// A line that opens a section
///
/// The header and flags markers carry data on the same line, which is kept
/// as the payload. The other markers stand alone on their line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    Header(&'a str),
    Flags(&'a str),
    Question,
    Answer,
    Authority,
    Additional,
}

impl<'a> Marker<'a> {
    /// Matches the fixed marker prefixes, case and whitespace sensitive
    pub fn recognize(line: &'a str) -> Option<Marker<'a>> {
        if let Some(rest) = line.strip_prefix(HEADER_MARKER) {
            Some(Marker::Header(rest))
        } else if let Some(rest) = line.strip_prefix(FLAGS_MARKER) {
            Some(Marker::Flags(rest))
        } else if line.starts_with(QUESTION_MARKER) {
            Some(Marker::Question)
        } else if line.starts_with(ANSWER_MARKER) {
            Some(Marker::Answer)
        } else if line.starts_with(AUTHORITY_MARKER) {
            Some(Marker::Authority)
        } else if line.starts_with(ADDITIONAL_MARKER) {
            Some(Marker::Additional)
        } else {
            None
        }
    }

    /// The section this marker switches to
    pub fn section(self) -> Section {
        match self {
            Marker::Header(_) => Section::Header,
            Marker::Flags(_) => Section::Flags,
            Marker::Question => Section::Question,
            Marker::Answer => Section::Answer,
            Marker::Authority => Section::Authority,
            Marker::Additional => Section::Additional,
        }
    }

    /// Data carried on the marker line itself, `None` if the line is consumed
    pub fn payload(self) -> Option<&'a str> {
        match self {
            Marker::Header(rest) | Marker::Flags(rest) => Some(rest),
            _ => None,
        }
    }

    /// A header marker starts a new message
    pub fn starts_message(self) -> bool {
        matches!(self, Marker::Header(_))
    }
}
