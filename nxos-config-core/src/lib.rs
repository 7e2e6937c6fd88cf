//! Tolerant parsing of NX-OS style VLAN interface configuration.
//!
//! Input is processed line by line. Each trimmed line is classified
//! ([`classify`]) and fed into a [`RecordBuilder`], which folds the lines of
//! every `interface` block into one [`InterfaceRecord`]. Several syntax
//! dialects are accepted side by side: dotted-mask and CIDR addressing,
//! single-line `standby` HSRP and block `hsrp`, and DHCP relay address lists
//! that wrap onto the following line.
//!
//! Malformed fragments never fail the parse; they are skipped and whatever can
//! be recovered is returned.

pub mod address;
pub mod builder;
pub mod classify;
pub mod parser;
pub mod record;

pub use address::extract_ipv4;
pub use builder::RecordBuilder;
pub use classify::{classify, LineKind};
pub use parser::{parse, parse_file, read_uplink, uplink_name, ParseError};
pub use record::{InterfaceRecord, DESCRIPTION_MAX_CHARS};
