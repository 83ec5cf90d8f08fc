//! Factory pattern: one entry point turns a transport name into a boxed
//! [`Transport`].

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::{PatternError, Result};

pub trait Transport {
    fn kind(&self) -> TransportKind;

    /// Human readable description of how this transport delivers.
    fn method(&self) -> &str;

    fn deliver(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.method())?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truck {
    method: String,
}

impl Truck {
    pub fn new() -> Self {
        Self {
            method: "Delivering on a truck on land!".to_string(),
        }
    }
}

impl Default for Truck {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for Truck {
    fn kind(&self) -> TransportKind {
        TransportKind::Truck
    }

    fn method(&self) -> &str {
        &self.method
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    method: String,
}

impl Ship {
    pub fn new() -> Self {
        Self {
            method: "Delivering on a ship on water!".to_string(),
        }
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for Ship {
    fn kind(&self) -> TransportKind {
        TransportKind::Ship
    }

    fn method(&self) -> &str {
        &self.method
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    Truck,
    Ship,
}

impl TransportKind {
    pub const ALL: [TransportKind; 2] = [TransportKind::Truck, TransportKind::Ship];

    pub fn name(self) -> &'static str {
        match self {
            TransportKind::Truck => "truck",
            TransportKind::Ship => "ship",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact, case-sensitive match on the transport name.
impl FromStr for TransportKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        TransportKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PatternError::unknown_transport(s))
    }
}

pub struct TransportFactory;

impl TransportFactory {
    pub fn create_transport(kind: &str) -> Result<Box<dyn Transport>> {
        let kind = kind.parse::<TransportKind>().map_err(|err| {
            warn!(requested = kind, "unknown transport type");
            err
        })?;
        info!(%kind, "creating transport");
        Ok(Self::create(kind))
    }

    pub fn create(kind: TransportKind) -> Box<dyn Transport> {
        match kind {
            TransportKind::Truck => Box::new(Truck::new()),
            TransportKind::Ship => Box::new(Ship::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truck_delivers_on_land() {
        let truck = TransportFactory::create_transport("truck").unwrap();
        assert_eq!(truck.kind(), TransportKind::Truck);
        assert!(truck.method().contains("truck"));
        assert!(truck.method().contains("land"));
    }

    #[test]
    fn test_ship_delivers_on_water() {
        let ship = TransportFactory::create_transport("ship").unwrap();
        assert_eq!(ship.kind(), TransportKind::Ship);
        assert!(ship.method().contains("ship"));
        assert!(ship.method().contains("water"));
    }

    #[test]
    fn test_unknown_type_fails() {
        for kind in ["plane", "", "Truck", " ship", "ships"] {
            match TransportFactory::create_transport(kind) {
                Err(PatternError::UnknownTransport { kind: got }) => assert_eq!(got, kind),
                Err(other) => panic!("unexpected error for {kind:?}: {other}"),
                Ok(_) => panic!("{kind:?} should not produce a transport"),
            }
        }
    }

    #[test]
    fn test_deliver_writes_method_line() {
        let mut out = Vec::new();
        TransportFactory::create(TransportKind::Ship)
            .deliver(&mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Delivering on a ship on water!\n");
    }

    #[test]
    fn test_each_call_builds_fresh_instance() {
        let a = TransportFactory::create_transport("truck").unwrap();
        let b = TransportFactory::create_transport("truck").unwrap();
        let a_ptr = a.as_ref() as *const dyn Transport as *const u8;
        let b_ptr = b.as_ref() as *const dyn Transport as *const u8;
        // zero-sized types could share an address, Truck is not zero-sized
        assert_ne!(a_ptr, b_ptr);
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in TransportKind::ALL {
            assert_eq!(kind.to_string().parse::<TransportKind>().unwrap(), kind);
            assert_eq!(TransportFactory::create(kind).kind(), kind);
        }
    }
}
