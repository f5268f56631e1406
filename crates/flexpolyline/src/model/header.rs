//! Header metadata carried at the front of every encoded polyline.

/// Meaning of the optional third coordinate dimension (3-bit header field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ThirdDim {
    /// Coordinates are 2D (latitude, longitude only).
    Absent = 0,
    Level = 1,
    Altitude = 2,
    Elevation = 3,
    /// Reserved; never produced by a conforming encoder, but accepted.
    Reserved4 = 4,
    /// Reserved; never produced by a conforming encoder, but accepted.
    Reserved5 = 5,
    Custom1 = 6,
    Custom2 = 7,
}

impl ThirdDim {
    /// Creates a ThirdDim from its wire representation.
    ///
    /// Total over the 3-bit field; only the low three bits are inspected.
    pub fn from_u8(v: u8) -> ThirdDim {
        match v & 0x7 {
            0 => ThirdDim::Absent,
            1 => ThirdDim::Level,
            2 => ThirdDim::Altitude,
            3 => ThirdDim::Elevation,
            4 => ThirdDim::Reserved4,
            5 => ThirdDim::Reserved5,
            6 => ThirdDim::Custom1,
            _ => ThirdDim::Custom2,
        }
    }

    /// Returns true if coordinates carry a third axis.
    pub fn is_present(self) -> bool {
        self != ThirdDim::Absent
    }
}

/// Decoded header: precision and third-dimension metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Decimal digits of latitude/longitude precision (scale `10^precision`).
    pub precision: u32,
    /// Semantics of the third dimension, if any.
    pub third_dim: ThirdDim,
    /// Decimal digits of third-dimension precision (scale `10^third_dim_precision`).
    pub third_dim_precision: u32,
}

impl Header {
    /// Number of unsigned values consumed per coordinate under this header.
    pub fn dimensionality(&self) -> usize {
        if self.third_dim.is_present() { 3 } else { 2 }
    }
}
