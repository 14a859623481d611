use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::decoder::{Field, Fields};
use super::{Name, RecordSyntaxError, Type};

/// The enumeration that represents known types of DNS resource records data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RRData {
    CNAME(Name),
    NS(Name),
    PTR(Name),
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: Name,
    },
    MX {
        preference: u16,
        exchange: Name,
    },
    /// Character strings as printed, without the surrounding quotes
    TXT(Vec<String>),
    SOA {
        mname: Name,
        rname: Name,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    CAA {
        flags: u8,
        tag: String,
        value: String,
    },
    // Anything that isn't parsed further, RDATA kept as printed
    Unknown {
        typ: Type,
        data: String,
    },
}

fn number<T: FromStr>(field: Field) -> Result<T, RecordSyntaxError> {
    field
        .text
        .parse()
        .map_err(|_| RecordSyntaxError::InvalidNumber(field.text.to_owned()))
}

fn name(field: Field) -> Result<Name, RecordSyntaxError> {
    field.text.parse()
}

impl RRData {
    pub fn typ(&self) -> Type {
        match *self {
            RRData::CNAME(..) => Type::CNAME,
            RRData::NS(..) => Type::NS,
            RRData::PTR(..) => Type::PTR,
            RRData::A(..) => Type::A,
            RRData::AAAA(..) => Type::AAAA,
            RRData::SRV { .. } => Type::SRV,
            RRData::MX { .. } => Type::MX,
            RRData::TXT(..) => Type::TXT,
            RRData::SOA { .. } => Type::SOA,
            RRData::CAA { .. } => Type::CAA,
            RRData::Unknown { typ, .. } => typ,
        }
    }

    /// Reads the RDATA of a record of type `typ` from the remaining fields
    pub(crate) fn parse(typ: Type, fields: &mut Fields) -> Result<RRData, RecordSyntaxError> {
        let data = match typ {
            Type::A => {
                let field = fields.required("address")?;
                RRData::A(
                    field
                        .text
                        .parse()
                        .map_err(|_| RecordSyntaxError::InvalidAddress(field.text.to_owned()))?,
                )
            }
            Type::AAAA => {
                let field = fields.required("address")?;
                RRData::AAAA(
                    field
                        .text
                        .parse()
                        .map_err(|_| RecordSyntaxError::InvalidAddress(field.text.to_owned()))?,
                )
            }
            Type::CNAME => RRData::CNAME(name(fields.required("target")?)?),
            Type::NS => RRData::NS(name(fields.required("nameserver")?)?),
            Type::PTR => RRData::PTR(name(fields.required("target")?)?),
            Type::MX => RRData::MX {
                preference: number(fields.required("preference")?)?,
                exchange: name(fields.required("exchange")?)?,
            },
            Type::SRV => RRData::SRV {
                priority: number(fields.required("priority")?)?,
                weight: number(fields.required("weight")?)?,
                port: number(fields.required("port")?)?,
                target: name(fields.required("target")?)?,
            },
            Type::TXT => {
                let mut strings = Vec::new();
                while let Some(field) = fields.next_field()? {
                    strings.push(field.text.to_owned());
                }
                if strings.is_empty() {
                    return Err(RecordSyntaxError::MissingField("text"));
                }
                RRData::TXT(strings)
            }
            Type::SOA => RRData::SOA {
                mname: name(fields.required("mname")?)?,
                rname: name(fields.required("rname")?)?,
                serial: number(fields.required("serial")?)?,
                refresh: number(fields.required("refresh")?)?,
                retry: number(fields.required("retry")?)?,
                expire: number(fields.required("expire")?)?,
                minimum: number(fields.required("minimum")?)?,
            },
            Type::CAA => RRData::CAA {
                flags: number(fields.required("flags")?)?,
                tag: fields.required("tag")?.text.to_owned(),
                value: fields.required("value")?.text.to_owned(),
            },
            typ => RRData::Unknown {
                typ,
                data: fields.rest().to_owned(),
            },
        };
        fields.finish()?;
        Ok(data)
    }
}

impl fmt::Display for RRData {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RRData::CNAME(ref name) | RRData::NS(ref name) | RRData::PTR(ref name) => {
                write!(fmt, "{}", name)
            }
            RRData::A(ip) => write!(fmt, "{}", ip),
            RRData::AAAA(ip) => write!(fmt, "{}", ip),
            RRData::SRV {
                priority,
                weight,
                port,
                ref target,
            } => write!(fmt, "{} {} {} {}", priority, weight, port, target),
            RRData::MX {
                preference,
                ref exchange,
            } => write!(fmt, "{} {}", preference, exchange),
            RRData::TXT(ref strings) => {
                for (idx, text) in strings.iter().enumerate() {
                    if idx != 0 {
                        fmt.write_str(" ")?;
                    }
                    write!(fmt, "\"{}\"", text)?;
                }
                Ok(())
            }
            RRData::SOA {
                ref mname,
                ref rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => write!(
                fmt,
                "{} {} {} {} {} {} {}",
                mname, rname, serial, refresh, retry, expire, minimum
            ),
            RRData::CAA {
                flags,
                ref tag,
                ref value,
            } => write!(fmt, "{} {} \"{}\"", flags, tag, value),
            RRData::Unknown { ref data, .. } => fmt.write_str(data),
        }
    }
}
