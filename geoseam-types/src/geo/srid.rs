//! Compact spatial reference identifiers.
//!
//! A [`Srid`] pairs a spatial reference authority with a numeric code and can
//! be packed into a single `u32`: the top 4 bits hold the authority index,
//! the low 28 bits hold the code. The binary form wraps the packed integer
//! with a leading version byte so future encodings can coexist with this one.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoseamTypesError;

/// Version byte prepended to the binary form of a [`Srid`].
pub const SRID_ENCODING_VERSION: u8 = 1;

const CODE_BITS: u32 = 28;
const CODE_MASK: u32 = (1 << CODE_BITS) - 1;

/// Spatial reference authorities with a defined compact encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    /// The EPSG registry.
    Epsg,
    /// The OGC `CRS` authority (e.g. `CRS:84`).
    Crs,
}

impl Authority {
    fn index(&self) -> u32 {
        match self {
            Authority::Epsg => 0,
            Authority::Crs => 1,
        }
    }

    fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Authority::Epsg),
            1 => Some(Authority::Crs),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("EPSG") {
            Some(Authority::Epsg)
        } else if name.eq_ignore_ascii_case("CRS") {
            Some(Authority::Crs)
        } else {
            None
        }
    }

    /// Canonical name of the authority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Authority::Epsg => "EPSG",
            Authority::Crs => "CRS",
        }
    }
}

/// Resolves spatial reference codes of authorities without a defined compact
/// encoding to equivalent EPSG codes.
///
/// This is an external registry seam: the crate itself does not know any
/// authority but the ones listed in [`Authority`], and it never maps an
/// unrecognized authority to an arbitrary index silently.
pub trait AuthorityResolver {
    /// Returns the EPSG code equivalent to the given authority/code pair, or
    /// `None` if the pair is not known to the registry.
    fn to_epsg(&self, authority: &str, code: u32) -> Option<u32>;
}

/// Compact identifier of a spatial reference system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Srid {
    authority: Authority,
    code: u32,
}

impl Srid {
    /// Identifier of the WGS84 geographic CRS (EPSG:4326).
    pub const WGS84: Srid = Srid {
        authority: Authority::Epsg,
        code: 4326,
    };

    /// Identifier of the web mercator projected CRS (EPSG:3857).
    pub const WEB_MERCATOR: Srid = Srid {
        authority: Authority::Epsg,
        code: 3857,
    };

    /// Creates a new identifier.
    ///
    /// Fails with `InvalidFormat` if the code does not fit into 28 bits.
    pub fn new(authority: Authority, code: u32) -> Result<Self, GeoseamTypesError> {
        if code > CODE_MASK {
            return Err(GeoseamTypesError::InvalidFormat(format!(
                "spatial reference code {code} does not fit into {CODE_BITS} bits"
            )));
        }

        Ok(Self { authority, code })
    }

    /// Authority that assigned the code.
    pub fn authority(&self) -> Authority {
        self.authority
    }

    /// Numeric code of the spatial reference system.
    pub fn code(&self) -> u32 {
        self.code
    }

    /// Packs the identifier into a single integer.
    pub fn to_compact(&self) -> u32 {
        self.authority.index() << CODE_BITS | self.code
    }

    /// Unpacks an identifier packed by [`Srid::to_compact`].
    ///
    /// Fails with `UnknownAuthority` if the authority index is not defined;
    /// such values are rejected rather than coerced to a known authority.
    pub fn from_compact(value: u32) -> Result<Self, GeoseamTypesError> {
        let index = value >> CODE_BITS;
        let authority = Authority::from_index(index).ok_or_else(|| {
            GeoseamTypesError::UnknownAuthority(format!("authority index {index}"))
        })?;

        Ok(Self {
            authority,
            code: value & CODE_MASK,
        })
    }

    /// Binary form of the identifier: the version byte followed by the packed
    /// integer in big-endian byte order.
    pub fn to_bytes(&self) -> [u8; 5] {
        let compact = self.to_compact().to_be_bytes();
        [
            SRID_ENCODING_VERSION,
            compact[0],
            compact[1],
            compact[2],
            compact[3],
        ]
    }

    /// Decodes the binary form produced by [`Srid::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GeoseamTypesError> {
        let [version, rest @ ..] = bytes else {
            return Err(GeoseamTypesError::InvalidFormat(
                "empty spatial reference encoding".into(),
            ));
        };

        if *version != SRID_ENCODING_VERSION {
            return Err(GeoseamTypesError::InvalidFormat(format!(
                "unsupported spatial reference encoding version {version}"
            )));
        }

        let compact: [u8; 4] = rest.try_into().map_err(|_| {
            GeoseamTypesError::InvalidFormat(format!(
                "expected 4 bytes of encoded value, got {}",
                rest.len()
            ))
        })?;

        Self::from_compact(u32::from_be_bytes(compact))
    }

    /// Parses an `"AUTHORITY:CODE"` string, resolving authorities without a
    /// defined compact encoding through the given registry.
    pub fn parse_with(
        value: &str,
        resolver: &impl AuthorityResolver,
    ) -> Result<Self, GeoseamTypesError> {
        let (name, code) = split_identifier(value)?;
        match Authority::from_name(name) {
            Some(authority) => Self::new(authority, code),
            None => {
                let epsg = resolver.to_epsg(name, code).ok_or_else(|| {
                    GeoseamTypesError::UnknownAuthority(name.to_string())
                })?;
                Self::new(Authority::Epsg, epsg)
            }
        }
    }
}

fn split_identifier(value: &str) -> Result<(&str, u32), GeoseamTypesError> {
    let Some((name, code)) = value.split_once(':') else {
        return Err(GeoseamTypesError::InvalidFormat(format!(
            "expected AUTHORITY:CODE, got {value}"
        )));
    };

    let code = code
        .parse::<u32>()
        .map_err(|_| GeoseamTypesError::InvalidFormat(format!("invalid code in {value}")))?;

    Ok((name, code))
}

impl FromStr for Srid {
    type Err = GeoseamTypesError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (name, code) = split_identifier(value)?;
        let authority = Authority::from_name(name)
            .ok_or_else(|| GeoseamTypesError::UnknownAuthority(name.to_string()))?;
        Self::new(authority, code)
    }
}

impl Display for Srid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.authority.as_str(), self.code)
    }
}
