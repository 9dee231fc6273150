//! Registry of standardized MODP groups.
//!
//! Groups are addressed by their IKE identifiers: 1 and 2 from RFC 2409,
//! 14 and 15 from RFC 3526. Every registered group uses generator 2.
//! Identifier 0 (and anything below it) selects [`GroupId::DEFAULT_GROUP`].

use std::fmt;

use num_bigint::BigUint;
use tracing::debug;

use crate::{DhGroup, Error, Result};

/// RFC 2409 Oakley groups 1 and 2.
pub mod rfc2409;
/// RFC 3526 MODP groups 14 and 15.
pub mod rfc3526;

/// Identifier of a well-known group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub i32);

impl GroupId {
    /// RFC 2409 group 1, 768-bit.
    pub const OAKLEY_1: GroupId = GroupId(1);
    /// RFC 2409 group 2, 1024-bit.
    pub const OAKLEY_2: GroupId = GroupId(2);
    /// RFC 3526 group 14, 2048-bit.
    pub const MODP_2048: GroupId = GroupId(14);
    /// RFC 3526 group 15, 3072-bit.
    pub const MODP_3072: GroupId = GroupId(15);
    /// Sentinel asking for the recommended default.
    pub const DEFAULT: GroupId = GroupId(0);
    /// The group the sentinel resolves to.
    pub const DEFAULT_GROUP: GroupId = GroupId::MODP_2048;

    /// Every concrete identifier the registry serves.
    pub const KNOWN: [GroupId; 4] = [
        GroupId::OAKLEY_1,
        GroupId::OAKLEY_2,
        GroupId::MODP_2048,
        GroupId::MODP_3072,
    ];

    /// Applies the sentinel rule: any id `<= 0` means the default group.
    pub fn resolve(self) -> GroupId {
        if self <= GroupId::DEFAULT {
            GroupId::DEFAULT_GROUP
        } else {
            self
        }
    }

    /// Human readable name, or `None` for an id the registry does not know.
    pub fn name(self) -> Option<&'static str> {
        match self.resolve() {
            GroupId::OAKLEY_1 => Some("rfc2409-modp768"),
            GroupId::OAKLEY_2 => Some("rfc2409-modp1024"),
            GroupId::MODP_2048 => Some("rfc3526-modp2048"),
            GroupId::MODP_3072 => Some("rfc3526-modp3072"),
            _ => None,
        }
    }

    /// Whether [`lookup`] would succeed for this id.
    pub fn is_known(self) -> bool {
        self.name().is_some()
    }
}

impl From<i32> for GroupId {
    fn from(id: i32) -> Self {
        GroupId(id)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fetches a group defined in RFC 2409 or RFC 3526.
///
/// Pass `0` (or [`GroupId::DEFAULT`]) when unsure; it selects the 2048-bit
/// group 14.
///
/// # Errors
///
/// [`Error::UnknownGroup`] for any positive id other than 1, 2, 14 or 15.
pub fn lookup(id: impl Into<GroupId>) -> Result<DhGroup> {
    let requested = id.into();
    let id = requested.resolve();
    if id != requested {
        debug!(requested = requested.0, resolved = id.0, "using default DH group");
    }

    let p = match id {
        GroupId::OAKLEY_1 => &*rfc2409::OAKLEY_1_P,
        GroupId::OAKLEY_2 => &*rfc2409::OAKLEY_2_P,
        GroupId::MODP_2048 => &*rfc3526::MODP_2048_P,
        GroupId::MODP_3072 => &*rfc3526::MODP_3072_P,
        _ => return Err(Error::UnknownGroup(requested.0)),
    };

    Ok(DhGroup::from_parts(p.clone(), BigUint::from(2u32)))
}

fn parse_hex(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16)
        .unwrap_or_else(|| unreachable!("RFC MODP constants are valid hex"))
}
