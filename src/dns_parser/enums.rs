//! Name tables mapping DNS mnemonics to their numeric codes.
//!
//! Each table is a pair of directions: `code()`/`Display` go from a value to
//! the code and name `dig` prints, `from_code()`/`from_name()` go back. The
//! name lookups are backed by maps built once on first use and never
//! mutated afterwards.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

macro_rules! name_table {
    (
        $(#[$meta:meta])*
        pub enum $enum:ident($repr:ty), generic $prefix:literal, table $table:ident {
            $( $variant:ident = $code:literal => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $enum {
            $( $variant, )+
            /// A code without a mnemonic of its own, printed as
            #[doc = concat!("`", $prefix, "<code>`")]
            Unknown($repr),
        }

        lazy_static! {
            static ref $table: HashMap<&'static str, $enum> = {
                let mut table = HashMap::new();
                $( table.insert($text, $enum::$variant); )+
                table
            };
        }

        impl $enum {
            pub fn code(self) -> $repr {
                match self {
                    $( $enum::$variant => $code, )+
                    $enum::Unknown(code) => code,
                }
            }

            pub fn from_code(code: $repr) -> $enum {
                match code {
                    $( $code => $enum::$variant, )+
                    code => $enum::Unknown(code),
                }
            }

            /// Looks up a mnemonic, also accepting the generic
            #[doc = concat!("`", $prefix, "<code>`")]
            /// spelling
            pub fn from_name(name: &str) -> Option<$enum> {
                if let Some(value) = $table.get(name) {
                    return Some(*value);
                }
                name.strip_prefix($prefix)
                    .and_then(|code| code.parse::<$repr>().ok())
                    .map($enum::from_code)
            }
        }

        impl fmt::Display for $enum {
            fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
                match *self {
                    $( $enum::$variant => fmt.write_str($text), )+
                    $enum::Unknown(code) => write!(fmt, concat!($prefix, "{}"), code),
                }
            }
        }
    };
}

name_table! {
    /// The OPCODE value of the header
    pub enum Opcode(u8), generic "RESERVED", table OPCODE_NAMES {
        Query = 0 => "QUERY",
        InverseQuery = 1 => "IQUERY",
        Status = 2 => "STATUS",
        Notify = 4 => "NOTIFY",
        Update = 5 => "UPDATE",
    }
}

name_table! {
    /// The RCODE value of the header, `status` in `dig` terms
    pub enum ResponseCode(u16), generic "RESERVED", table RCODE_NAMES {
        NoError = 0 => "NOERROR",
        FormatError = 1 => "FORMERR",
        ServerFailure = 2 => "SERVFAIL",
        NameError = 3 => "NXDOMAIN",
        NotImplemented = 4 => "NOTIMP",
        Refused = 5 => "REFUSED",
        YxDomain = 6 => "YXDOMAIN",
        YxRrSet = 7 => "YXRRSET",
        NxRrSet = 8 => "NXRRSET",
        NotAuth = 9 => "NOTAUTH",
        NotZone = 10 => "NOTZONE",
        BadSig = 16 => "BADSIG",
        BadKey = 17 => "BADKEY",
        BadTime = 18 => "BADTIME",
        BadMode = 19 => "BADMODE",
        BadName = 20 => "BADNAME",
        BadAlg = 21 => "BADALG",
        BadTrunc = 22 => "BADTRUNC",
        BadCookie = 23 => "BADCOOKIE",
    }
}

name_table! {
    /// The CLASS value of a question or resource record
    pub enum Class(u16), generic "CLASS", table CLASS_NAMES {
        IN = 1 => "IN",
        CS = 2 => "CS",
        CH = 3 => "CH",
        HS = 4 => "HS",
        None = 254 => "NONE",
        Any = 255 => "ANY",
    }
}

name_table! {
    /// The TYPE value of a question or resource record
    pub enum Type(u16), generic "TYPE", table TYPE_NAMES {
        A = 1 => "A",
        NS = 2 => "NS",
        CNAME = 5 => "CNAME",
        SOA = 6 => "SOA",
        PTR = 12 => "PTR",
        HINFO = 13 => "HINFO",
        MX = 15 => "MX",
        TXT = 16 => "TXT",
        AAAA = 28 => "AAAA",
        LOC = 29 => "LOC",
        SRV = 33 => "SRV",
        NAPTR = 35 => "NAPTR",
        OPT = 41 => "OPT",
        DS = 43 => "DS",
        SSHFP = 44 => "SSHFP",
        RRSIG = 46 => "RRSIG",
        NSEC = 47 => "NSEC",
        DNSKEY = 48 => "DNSKEY",
        NSEC3 = 50 => "NSEC3",
        NSEC3PARAM = 51 => "NSEC3PARAM",
        TLSA = 52 => "TLSA",
        SVCB = 64 => "SVCB",
        HTTPS = 65 => "HTTPS",
        SPF = 99 => "SPF",
        IXFR = 251 => "IXFR",
        AXFR = 252 => "AXFR",
        Any = 255 => "ANY",
        CAA = 257 => "CAA",
    }
}

impl Default for Opcode {
    fn default() -> Opcode {
        Opcode::Query
    }
}

impl Default for ResponseCode {
    fn default() -> ResponseCode {
        ResponseCode::NoError
    }
}
