//! Definition of a bit-level field within a region of bytes.

use crate::order::BitOrder;

/// Describes one field: where it starts, how wide it is, and its bit order.
///
/// Positions count from the low bit of byte 0 of the region. A `Field` is
/// plain data; validation happens when it is compiled into a
/// [crate::codec::Codec].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Offset of the field's first bit.
    pub position: usize,
    /// Width in bits.
    pub size: usize,
    /// Bit order within the field's span.
    pub order: BitOrder,
}

impl Field {
    /// A field with the default (LSB-first) bit order.
    pub fn new(position: usize, size: usize) -> Self {
        Field {
            position,
            size,
            order: Default::default(),
        }
    }

    pub fn with_order(position: usize, size: usize, order: BitOrder) -> Self {
        Field {
            position,
            size,
            order,
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for Field {
    fn from(value: crate::serde::FieldDef) -> Self {
        Field {
            position: value.position,
            size: value.size,
            order: value.order.into(),
        }
    }
}
