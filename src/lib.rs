//! # bitlens
//!
//! Bit-level field accessors for byte buffers.
//!
//! A field is an arbitrary span of bits at an arbitrary position within a
//! byte region, read and written under one of two bit orders: LSB-first
//! (field bit 0 at the low end of the span, the natural machine order) or
//! MSB-first (field bit 0 at the high end, bits reversed within the span).
//! Positions count from the low bit of byte 0, continuing across byte
//! boundaries as one bit stream.
//!
//! Two layers expose the same semantics:
//! - [bitfield::Bitfield] fixes position, width, order, and value type as
//!   type and const parameters; out-of-bounds fields fail to compile.
//! - [codec::Codec] compiles a runtime [field::Field] descriptor once,
//!   validating it against a declared region size, and is then reused
//!   without re-validation.
//!
//! ## Example
//!
//! ```
//! use bitlens::bitfield::Bitfield;
//! use bitlens::order::{Lsb0, Msb0};
//!
//! // A 9-bit counter straddling the first two bytes of a packet.
//! let packet = [0b0000_0010, 0b0010_0001, 0b1000_0000];
//! let count: u16 = Bitfield::<u16, Lsb0, 7, 9>::read(&packet);
//! assert_eq!(count, 66);
//!
//! // A reversed 4-bit command code in a single register byte.
//! let mut reg = 0b1010_0011;
//! Bitfield::<u8, Msb0, 0, 4>::set(&mut reg, 5);
//! assert_eq!(reg, 0b1010_1010);
//! ```

pub mod bitfield;
pub mod bits;
pub mod codec;
pub mod errors;
pub mod field;
pub mod order;
#[cfg(feature = "serde")]
pub mod serde;
pub mod value;
