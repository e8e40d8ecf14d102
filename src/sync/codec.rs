//! Wire layout of the velocity and spawn messages.
//!
//! Multi-byte values are big-endian, matching the host's packet buffers.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use glam::DVec3;

use super::SyncError;

/// Longest VarInt the host accepts for an `i32`.
const VARINT_MAX_BYTES: usize = 5;
/// Spawn velocities travel as 1/8000 block per tick.
const VELOCITY_SCALE: f64 = 8000.0;
/// Spawn velocities are clamped to this magnitude per axis before encoding.
const VELOCITY_LIMIT: f64 = 3.9;

/// Read cursor over a received payload.
#[derive(Debug)]
pub(super) struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    pub(super) const fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Fails with [`SyncError::Truncated`] unless `needed` bytes are left.
    fn ensure(&self, needed: usize) -> Result<(), SyncError> {
        let remaining = self.buf.remaining();
        if remaining < needed {
            return Err(SyncError::Truncated { needed, remaining });
        }
        Ok(())
    }

    pub(super) fn read_u8(&mut self) -> Result<u8, SyncError> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    pub(super) fn read_i16(&mut self) -> Result<i16, SyncError> {
        self.ensure(2)?;
        Ok(self.buf.get_i16())
    }

    pub(super) fn read_i32(&mut self) -> Result<i32, SyncError> {
        self.ensure(4)?;
        Ok(self.buf.get_i32())
    }

    pub(super) fn read_f64(&mut self) -> Result<f64, SyncError> {
        self.ensure(8)?;
        Ok(self.buf.get_f64())
    }

    pub(super) fn read_u128(&mut self) -> Result<u128, SyncError> {
        self.ensure(16)?;
        Ok(self.buf.get_u128())
    }

    pub(super) fn read_vec3(&mut self) -> Result<DVec3, SyncError> {
        Ok(DVec3::new(self.read_f64()?, self.read_f64()?, self.read_f64()?))
    }

    #[expect(
        clippy::cast_possible_wrap,
        reason = "VarInts carry the two's complement bit pattern of an i32."
    )]
    pub(super) fn read_var_i32(&mut self) -> Result<i32, SyncError> {
        let mut value: u32 = 0;
        for index in 0..VARINT_MAX_BYTES {
            let byte = self.read_u8()?;
            value |= u32::from(byte & 0x7f) << (7 * index);
            if byte & 0x80 == 0 {
                return Ok(value as i32);
            }
        }
        Err(SyncError::VarIntTooLong)
    }

    pub(super) fn remaining(&self) -> usize {
        self.buf.remaining()
    }
}

/// Append-only payload builder.
#[derive(Debug, Default)]
pub(super) struct Writer {
    buf: BytesMut,
}

impl Writer {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    pub(super) fn freeze(self) -> Bytes {
        self.buf.freeze()
    }

    pub(super) fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub(super) fn write_i16(&mut self, value: i16) {
        self.buf.put_i16(value);
    }

    pub(super) fn write_i32(&mut self, value: i32) {
        self.buf.put_i32(value);
    }

    pub(super) fn write_u128(&mut self, value: u128) {
        self.buf.put_u128(value);
    }

    pub(super) fn write_vec3(&mut self, value: DVec3) {
        self.buf.put_f64(value.x);
        self.buf.put_f64(value.y);
        self.buf.put_f64(value.z);
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "VarInts carry the two's complement bit pattern in seven-bit groups."
    )]
    pub(super) fn write_var_i32(&mut self, value: i32) {
        let mut rest = value as u32;
        while rest >= 0x80 {
            self.buf.put_u8((rest & 0x7f) as u8 | 0x80);
            rest >>= 7;
        }
        self.buf.put_u8(rest as u8);
    }
}

/// Packs an angle in degrees into a single byte, 256 steps per turn.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The angle is reduced modulo one turn before the cast."
)]
#[must_use]
pub fn pack_angle(degrees: f64) -> u8 {
    let steps = (degrees * 256.0 / 360.0).floor();
    steps.rem_euclid(256.0) as u8
}

/// Inverse of [`pack_angle`], in `[0, 360)` degrees.
#[must_use]
pub fn unpack_angle(packed: u8) -> f64 {
    f64::from(packed) * 360.0 / 256.0
}

/// Encodes one velocity axis as 1/8000 block per tick.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped well inside the i16 range before the cast."
)]
#[must_use]
pub fn pack_velocity_axis(value: f64) -> i16 {
    let clamped = if value.is_finite() {
        value.clamp(-VELOCITY_LIMIT, VELOCITY_LIMIT)
    } else {
        0.0
    };
    (clamped * VELOCITY_SCALE) as i16
}

/// Inverse of [`pack_velocity_axis`].
#[must_use]
pub fn unpack_velocity_axis(value: i16) -> f64 {
    f64::from(value) / VELOCITY_SCALE
}
