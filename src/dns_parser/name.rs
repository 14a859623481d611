use std::fmt;
use std::hash;
use std::str::FromStr;

use super::RecordSyntaxError;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;

/// A domain name in presentation format
///
/// The text is kept exactly as `dig` printed it, including the trailing dot
/// of fully-qualified names. Comparison and hashing ignore ASCII case, the
/// way DNS compares names.
#[derive(Debug, Clone)]
pub struct Name(String);

/// Splits at the dots that are not escaped with a backslash
fn split_labels(name: &str) -> Vec<&str> {
    let mut labels = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (idx, c) in name.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '.' => {
                labels.push(&name[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    labels.push(&name[start..]);
    labels
}

/// Length of a label once `\X` and `\DDD` escapes stand for one byte each
fn label_len(label: &str) -> usize {
    let bytes = label.as_bytes();
    let mut len = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] == b'\\' {
            let decimal = bytes
                .get(pos + 1..pos + 4)
                .map_or(false, |digits| digits.iter().all(u8::is_ascii_digit));
            pos += if decimal { 4 } else { 2 };
        } else {
            pos += 1;
        }
        len += 1;
    }
    len
}

impl Name {
    pub fn root() -> Name {
        Name(".".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the name ends with the root label
    pub fn is_fqdn(&self) -> bool {
        split_labels(&self.0).last() == Some(&"")
    }

    /// The labels as printed, escapes left in place
    pub fn labels(&self) -> Vec<&str> {
        if self.0 == "." {
            return Vec::new();
        }
        let mut labels = split_labels(&self.0);
        if labels.len() > 1 && labels.last() == Some(&"") {
            labels.pop();
        }
        labels
    }

    /// Length of the name once encoded as a sequence of length-prefixed labels
    fn wire_len(&self) -> usize {
        self.labels()
            .iter()
            .map(|label| label_len(label) + 1)
            .sum::<usize>()
            + 1
    }
}

impl FromStr for Name {
    type Err = RecordSyntaxError;

    fn from_str(name: &str) -> Result<Name, RecordSyntaxError> {
        if name == "." {
            return Ok(Name::root());
        }
        let name = Name(name.to_owned());
        let valid_labels = name
            .labels()
            .iter()
            .all(|label| !label.is_empty() && label_len(label) <= MAX_LABEL_LEN);
        if !valid_labels {
            return Err(RecordSyntaxError::InvalidLabel(name.0));
        }
        if name.wire_len() > MAX_NAME_LEN {
            return Err(RecordSyntaxError::NameTooLong(name.0));
        }
        Ok(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}

impl hash::Hash for Name {
    fn hash<H>(&self, state: &mut H)
    where
        H: hash::Hasher,
    {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Name) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Name {}

#[cfg(test)]
mod test {
    use super::Name;
    use crate::dns_parser::RecordSyntaxError;

    #[test]
    fn keeps_trailing_dot() {
        let name: Name = "example.com.".parse().unwrap();
        assert!(name.is_fqdn());
        assert_eq!(name.to_string(), "example.com.");
        assert_eq!(name.labels(), vec!["example", "com"]);
    }

    #[test]
    fn root_has_no_labels() {
        let name: Name = ".".parse().unwrap();
        assert!(name.is_fqdn());
        assert!(name.labels().is_empty());
    }

    #[test]
    fn compares_case_insensitively() {
        let lower: Name = "example.com.".parse().unwrap();
        let upper: Name = "EXAMPLE.com.".parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn rejects_empty_label() {
        assert_eq!(
            "example..com.".parse::<Name>(),
            Err(RecordSyntaxError::InvalidLabel("example..com.".into()))
        );
    }

    #[test]
    fn rejects_long_label() {
        let name = format!("{}.com.", "a".repeat(64));
        assert!(matches!(
            name.parse::<Name>(),
            Err(RecordSyntaxError::InvalidLabel(_))
        ));
    }

    #[test]
    fn rejects_long_name() {
        let name = format!("{}.", vec!["a".repeat(60); 5].join("."));
        assert!(matches!(
            name.parse::<Name>(),
            Err(RecordSyntaxError::NameTooLong(_))
        ));
    }

    #[test]
    fn escaped_dot_stays_in_label() {
        let name: Name = r"a\.b.example.com.".parse().unwrap();
        assert_eq!(name.labels(), vec![r"a\.b", "example", "com"]);
        assert!(name.is_fqdn());
    }

    #[test]
    fn escapes_count_as_one_byte() {
        // 63 escaped bytes print as 252 characters but fill one label exactly
        let label = r"\065".repeat(63);
        let name = format!("{}.{}.{}.", label, label, label);
        assert!(name.len() > 255);
        assert!(name.parse::<Name>().is_ok());

        let too_long = format!("{}A.com.", label);
        assert!(matches!(
            too_long.parse::<Name>(),
            Err(RecordSyntaxError::InvalidLabel(_))
        ));
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            "".parse::<Name>(),
            Err(RecordSyntaxError::InvalidLabel(_))
        ));
    }
}
