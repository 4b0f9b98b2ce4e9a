//! Byte counts expressed in binary units

use std::fmt;

/// Binary size units, each 1024 times the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeUnit {
    Byte,
    KB,
    MB,
    GB,
    TB,
    PB,
    EB,
    ZB,
    YB,
}

impl SizeUnit {
    pub const ALL: [SizeUnit; 9] = [
        SizeUnit::Byte,
        SizeUnit::KB,
        SizeUnit::MB,
        SizeUnit::GB,
        SizeUnit::TB,
        SizeUnit::PB,
        SizeUnit::EB,
        SizeUnit::ZB,
        SizeUnit::YB,
    ];

    /// Power of 1024 this unit stands for.
    pub fn exponent(self) -> u32 {
        self as u32
    }

    /// Number of bytes in one unit. `YB` is 2^80 and still fits.
    pub fn factor(self) -> u128 {
        1024u128.pow(self.exponent())
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Byte => "B",
            Self::KB => "KB",
            Self::MB => "MB",
            Self::GB => "GB",
            Self::TB => "TB",
            Self::PB => "PB",
            Self::EB => "EB",
            Self::ZB => "ZB",
            Self::YB => "YB",
        };
        f.write_str(name)
    }
}

/// Converts a byte count to `unit` with two decimals.
///
/// # Example
/// ```
/// use codehelpers::size::{to_size_unit_string, SizeUnit};
/// assert_eq!(to_size_unit_string(1536, SizeUnit::KB), "1.50");
/// ```
pub fn to_size_unit_string(value: i64, unit: SizeUnit) -> String {
    format!("{:.2}", value as f64 / unit.factor() as f64)
}

/// Converts a wide byte count to `unit` using integer division.
///
/// The quotient is truncated toward zero before formatting, so the decimals
/// are always `.00`.
pub fn to_size_unit_string_wide(value: i128, unit: SizeUnit) -> String {
    // factor() <= 2^80, so the cast is lossless
    let quotient = value / unit.factor() as i128;
    format!("{}.00", quotient)
}

/// Extension form of the size conversions.
pub trait SizeExt {
    fn to_size_unit_string(&self, unit: SizeUnit) -> String;
}

impl SizeExt for i64 {
    fn to_size_unit_string(&self, unit: SizeUnit) -> String {
        to_size_unit_string(*self, unit)
    }
}

impl SizeExt for i128 {
    fn to_size_unit_string(&self, unit: SizeUnit) -> String {
        to_size_unit_string_wide(*self, unit)
    }
}
