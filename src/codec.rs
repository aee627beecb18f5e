//! Compiled field accessors for regions whose layout is only known at
//! runtime.
//!
//! Where [crate::bitfield::Bitfield] fixes everything at compile time, a
//! [Codec] is built from a [Field] value and a declared region size, checked
//! once with [Codec::compile], and then reused without re-validation. This
//! is the form to reach for when field layouts arrive from data rather than
//! from the type system.

use crate::{
    bits,
    errors::{CompileError, ReadError, WriteError},
    field::Field,
    order::BitOrder,
};

/// A validated accessor for one field within a region of known byte length.
///
/// # Example
///
/// ```
/// use bitlens::codec::Codec;
/// use bitlens::field::Field;
///
/// let codec = Codec::compile(Field::new(2, 3), 1).unwrap();
/// let mut data = [0u8; 1];
/// codec.write(&mut data, 0b101).unwrap();
/// assert_eq!(codec.read(&data).unwrap(), 0b101);
/// ```
#[derive(Debug, Clone)]
pub struct Codec {
    field: Field,
    region_bytes: usize,
}

impl Codec {
    /// Validates `field` against a region of `region_bytes` bytes.
    ///
    /// Fails if the width is 0 or over 64 bits, or if the field's span
    /// extends past the end of the region. A field ending exactly on the
    /// region's last bit is legal.
    pub fn compile(field: Field, region_bytes: usize) -> Result<Self, CompileError> {
        if field.size == 0 || field.size > 64 {
            return Err(CompileError::InvalidFieldSize);
        }

        let end = field
            .position
            .checked_add(field.size)
            .ok_or(CompileError::OutOfRegion)?;

        if end > region_bytes * 8 {
            return Err(CompileError::OutOfRegion);
        }

        Ok(Self {
            field,
            region_bytes,
        })
    }

    /// The field this codec was compiled from.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Byte length of the region this codec was compiled for.
    pub fn region_bytes(&self) -> usize {
        self.region_bytes
    }

    /// Decodes the field from `data`, which must cover the compiled region.
    /// Bits above the field width are always 0 in the result.
    pub fn read(&self, data: &[u8]) -> Result<u64, ReadError> {
        if data.len() < self.region_bytes {
            return Err(ReadError::RegionTooShort);
        }

        let raw = bits::read_bits_at(data, self.field.position, self.field.size)?;

        Ok(match self.field.order {
            BitOrder::LsbFirst => raw,
            BitOrder::MsbFirst => bits::reverse_bits_n(raw, self.field.size),
        })
    }

    /// Encodes `value` into the field's span of `data`, preserving every bit
    /// outside it. Bits of `value` above the field width are ignored.
    pub fn write(&self, data: &mut [u8], value: u64) -> Result<(), WriteError> {
        if data.len() < self.region_bytes {
            return Err(WriteError::RegionTooShort);
        }

        let raw = match self.field.order {
            BitOrder::LsbFirst => value,
            BitOrder::MsbFirst => bits::reverse_bits_n(value, self.field.size),
        };

        bits::write_bits_at(data, self.field.position, self.field.size, raw)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::CodecDef> for Codec {
    type Error = CompileError;

    fn try_from(value: crate::serde::CodecDef) -> Result<Self, Self::Error> {
        Codec::compile(value.field.into(), value.region_bytes)
    }
}
