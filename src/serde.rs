//! Serde-deserializable field descriptions.
//!
//! These types describe the *shape* of a field layout. They are intended to
//! be read from a configuration format (for example a register map shipped
//! with your application) and then converted into core `bitlens` types.

use serde::{Deserialize, Serialize};

/// Bit order within a field's span.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub enum BitOrderDef {
    #[default]
    /// Field bit 0 at the low end of the span.
    LsbFirst,
    /// Field bit 0 at the high end of the span.
    MsbFirst,
}

impl From<BitOrderDef> for crate::order::BitOrder {
    fn from(value: BitOrderDef) -> Self {
        match value {
            BitOrderDef::LsbFirst => crate::order::BitOrder::LsbFirst,
            BitOrderDef::MsbFirst => crate::order::BitOrder::MsbFirst,
        }
    }
}

/// Description of a single field.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    /// Offset of the field's first bit from the low bit of byte 0.
    pub position: usize,
    /// Width of the field in bits.
    pub size: usize,
    /// Bit order inside the field; defaults to LSB-first.
    #[serde(default)]
    pub order: BitOrderDef,
}

/// A field together with the region it is compiled against.
///
/// Convert with `Codec::try_from`, which applies the same validation as
/// [crate::codec::Codec::compile].
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CodecDef {
    /// Byte length of the addressed region.
    pub region_bytes: usize,
    /// The field to access within that region.
    pub field: FieldDef,
}
