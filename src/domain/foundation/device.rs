//! Device classification for session binding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Recognized client device types.
///
/// The set is closed: a sign-in request naming anything else is rejected
/// before a session is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Device {
    Web,
    Mobile,
    Desktop,
}

impl Device {
    /// Returns all recognized device types.
    pub fn all() -> &'static [Device] {
        &[Device::Web, Device::Mobile, Device::Desktop]
    }

    /// Parses a raw device string against the recognized set.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` naming the rejected value if it is not recognized
    pub fn parse(raw: &str) -> Result<Device, ValidationError> {
        match raw {
            "web" => Ok(Device::Web),
            "mobile" => Ok(Device::Mobile),
            "desktop" => Ok(Device::Desktop),
            other => Err(ValidationError::invalid_format(
                "device",
                format!("unrecognized device type '{}'", other),
            )),
        }
    }

    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Web => "web",
            Device::Mobile => "mobile",
            Device::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Device {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Device::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_returns_three_device_types() {
        assert_eq!(Device::all().len(), 3);
    }

    #[test]
    fn parse_accepts_every_recognized_value() {
        for device in Device::all() {
            assert_eq!(Device::parse(device.as_str()).unwrap(), *device);
        }
    }

    #[test]
    fn parse_rejects_unrecognized_value() {
        let result = Device::parse("invalid-device");
        match result {
            Err(ValidationError::InvalidFormat { field, reason }) => {
                assert_eq!(field, "device");
                assert!(reason.contains("invalid-device"));
            }
            _ => panic!("Expected InvalidFormat error"),
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(Device::parse("Web").is_err());
        assert!(Device::parse("WEB").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let device: Device = "mobile".parse().unwrap();
        assert_eq!(device, Device::Mobile);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&Device::Web).unwrap(), "\"web\"");
        assert_eq!(serde_json::to_string(&Device::Desktop).unwrap(), "\"desktop\"");
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let device: Device = serde_json::from_str("\"mobile\"").unwrap();
        assert_eq!(device, Device::Mobile);
    }

    proptest! {
        #[test]
        fn parse_never_accepts_strings_outside_the_set(raw in "[a-z]{1,12}") {
            match Device::parse(&raw) {
                Ok(device) => prop_assert_eq!(device.as_str(), raw),
                Err(_) => prop_assert!(Device::all().iter().all(|d| d.as_str() != raw)),
            }
        }
    }
}
