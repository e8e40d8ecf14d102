//! Velocity mirroring for observers of a leaping actor.
//!
//! A leap changes the actor's velocity on the authoritative side. Actors
//! driven by a remote client (players) do not pick that change up from the
//! regular entity tracking, so the new velocity is published explicitly on
//! the [`Channel::PlayerVelocity`] channel. The spawn layout is kept here as
//! well so both messages share one codec.
//!
//! Transport framing and channel registration stay with the host; this
//! module only produces and consumes payload bytes.

mod codec;

pub use codec::{pack_angle, pack_velocity_axis, unpack_angle, unpack_velocity_axis};

use bytes::Bytes;
use glam::DVec3;
use log::debug;
use thiserror::Error;

use codec::{Reader, Writer};

/// Failures while encoding, decoding or publishing sync payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The payload ended before a field was complete.
    #[error("payload truncated: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes the field required.
        needed: usize,
        /// Bytes left in the payload.
        remaining: usize,
    },
    /// A VarInt ran past five bytes.
    #[error("VarInt is too long")]
    VarIntTooLong,
    /// Bytes were left over after the message was decoded.
    #[error("{0} trailing bytes after message")]
    TrailingBytes(usize),
    /// The sink refused the payload.
    #[error("sink rejected payload: {0}")]
    Sink(String),
}

/// Named payload channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Server to client entity spawn.
    SpawnEntity,
    /// Server to client velocity of a player-controlled actor.
    PlayerVelocity,
    /// Connectivity check.
    ClientTest,
}

impl Channel {
    /// Path component of the channel identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SpawnEntity => "spawn_entity",
            Self::PlayerVelocity => "player_velocity",
            Self::ClientTest => "client_test",
        }
    }

    /// Full `namespace:name` identifier.
    ///
    /// # Examples
    /// ```
    /// use lunge::sync::Channel;
    /// assert_eq!(Channel::PlayerVelocity.identifier("lunge"), "lunge:player_velocity");
    /// ```
    #[must_use]
    pub fn identifier(self, namespace: &str) -> String {
        format!("{namespace}:{}", self.name())
    }
}

/// Velocity update for a remotely controlled actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityPacket {
    /// New velocity in blocks per tick.
    pub velocity: DVec3,
}

impl VelocityPacket {
    /// Encoded size in bytes.
    pub const LEN: usize = 24;

    /// Three big-endian doubles.
    #[must_use]
    pub fn encode(&self) -> Bytes {
        let mut writer = Writer::with_capacity(Self::LEN);
        writer.write_vec3(self.velocity);
        writer.freeze()
    }

    /// Decodes a payload produced by [`Self::encode`].
    ///
    /// # Errors
    /// Returns [`SyncError::Truncated`] for short payloads and
    /// [`SyncError::TrailingBytes`] for long ones.
    pub fn decode(bytes: &[u8]) -> Result<Self, SyncError> {
        let mut reader = Reader::new(bytes);
        let velocity = reader.read_vec3()?;
        finish(&reader)?;
        Ok(Self { velocity })
    }
}

/// Entity spawn in the host's vanilla layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPacket {
    /// Network id of the entity.
    pub entity_id: i32,
    /// Persistent identity of the entity.
    pub uuid: u128,
    /// Registry index of the entity type.
    pub entity_type: i32,
    /// Feet position in world space.
    pub position: DVec3,
    /// Degrees; travels as an angle byte.
    pub pitch: f64,
    /// Degrees; travels as an angle byte.
    pub yaw: f64,
    /// Type-specific extra data.
    pub data: i32,
    /// Blocks per tick; travels as fixed point clamped to ±3.9 per axis.
    pub velocity: DVec3,
}

impl SpawnPacket {
    /// Serialises the packet.
    #[must_use]
    pub fn encode(&self) -> Bytes {
        let mut writer = Writer::with_capacity(64);
        writer.write_var_i32(self.entity_id);
        writer.write_u128(self.uuid);
        writer.write_var_i32(self.entity_type);
        writer.write_vec3(self.position);
        writer.write_u8(pack_angle(self.pitch));
        writer.write_u8(pack_angle(self.yaw));
        writer.write_i32(self.data);
        writer.write_i16(pack_velocity_axis(self.velocity.x));
        writer.write_i16(pack_velocity_axis(self.velocity.y));
        writer.write_i16(pack_velocity_axis(self.velocity.z));
        writer.freeze()
    }

    /// Parses a spawn payload. Angles and velocity come back quantised.
    ///
    /// # Errors
    /// Returns [`SyncError`] when the payload is truncated, carries a
    /// malformed VarInt or has trailing bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, SyncError> {
        let mut reader = Reader::new(bytes);
        let entity_id = reader.read_var_i32()?;
        let uuid = reader.read_u128()?;
        let entity_type = reader.read_var_i32()?;
        let position = reader.read_vec3()?;
        let pitch = unpack_angle(reader.read_u8()?);
        let yaw = unpack_angle(reader.read_u8()?);
        let data = reader.read_i32()?;
        let velocity = DVec3::new(
            unpack_velocity_axis(reader.read_i16()?),
            unpack_velocity_axis(reader.read_i16()?),
            unpack_velocity_axis(reader.read_i16()?),
        );
        finish(&reader)?;
        Ok(Self {
            entity_id,
            uuid,
            entity_type,
            position,
            pitch,
            yaw,
            data,
            velocity,
        })
    }
}

fn finish(reader: &Reader<'_>) -> Result<(), SyncError> {
    match reader.remaining() {
        0 => Ok(()),
        extra => Err(SyncError::TrailingBytes(extra)),
    }
}

/// Outbound payload transport.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait VelocitySink {
    /// Queues `payload` on `channel`.
    ///
    /// # Errors
    /// Returns [`SyncError::Sink`] when the transport refuses the payload.
    fn send(&mut self, channel: Channel, payload: Bytes) -> Result<(), SyncError>;
}

/// Velocity holder as seen by [`VelocitySync`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SyncedBody {
    /// Blocks per tick.
    pub velocity: DVec3,
    /// Whether a remote client drives this actor.
    pub remote_controlled: bool,
}

/// Applies velocities and mirrors them to remote clients when needed.
#[derive(Debug)]
pub struct VelocitySync<S> {
    sink: S,
}

impl<S: VelocitySink> VelocitySync<S> {
    /// Publishes through `sink`.
    #[must_use]
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Sets the body's velocity and, for remotely controlled bodies,
    /// publishes it.
    ///
    /// The velocity is applied even when publishing fails.
    ///
    /// # Errors
    /// Propagates the sink's [`SyncError`].
    pub fn apply(&mut self, body: &mut SyncedBody, velocity: DVec3) -> Result<(), SyncError> {
        body.velocity = velocity;
        if !body.remote_controlled {
            return Ok(());
        }
        debug!("publishing velocity {velocity:?}");
        self.sink
            .send(Channel::PlayerVelocity, VelocityPacket { velocity }.encode())
    }

    /// Client side: decodes a received velocity payload.
    ///
    /// # Errors
    /// See [`VelocityPacket::decode`].
    pub fn receive(bytes: &[u8]) -> Result<DVec3, SyncError> {
        VelocityPacket::decode(bytes).map(|packet| packet.velocity)
    }

    /// Gives the sink back.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
