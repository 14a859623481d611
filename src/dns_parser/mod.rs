//! DNS data model and the presentation-format record decoder.

mod decoder;
mod enums;
mod error;
mod name;
mod rrdata;
mod structs;

pub use self::decoder::{PresentationDecoder, RecordDecoder, DEFAULT_TTL};
pub use self::enums::{Class, Opcode, ResponseCode, Type};
pub use self::error::RecordSyntaxError;
pub use self::name::Name;
pub use self::rrdata::RRData;
pub use self::structs::{Header, Message, Question, ResourceRecord};
