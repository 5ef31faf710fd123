/**
 * MIT License
 *
 * Copyright (c) 2025 Takatoshi Kondo
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */
use crate::mqtt::packet::PacketType;
use crate::mqtt::packet::enum_packet::{GenericPacket, GenericPacketDisplay, GenericPacketTrait};
use crate::mqtt::packet::qos::Qos;
use crate::mqtt::packet::v5_0;
use crate::mqtt::packet::IsPacketId;
use crate::mqtt::result_code::MqttError;
use alloc::vec::Vec;
use serde::Serialize;
#[cfg(feature = "std")]
use std::io::IoSlice;

/// Which response packet is still outstanding for a stored (retransmittable)
/// packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponsePacket {
    Puback,
    Pubrec,
    Pubcomp,
}

/// A packet that must be retained until its handshake completes, so it can be
/// retransmitted (with DUP set) across a reconnect. Only QoS 1/2 PUBLISH and
/// PUBREL packets are ever stored.
#[derive(Serialize, Clone, PartialEq, Eq)]
pub enum GenericStorePacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    Publish(v5_0::GenericPublish<PacketIdType>),
    Pubrel(v5_0::GenericPubrel<PacketIdType>),
}

// Type alias for commonly used u16 PacketIdType
pub type StorePacket = GenericStorePacket<u16>;

impl<PacketIdType> core::fmt::Debug for GenericStorePacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.fmt_debug(f)
    }
}

impl<PacketIdType> core::fmt::Display for GenericStorePacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.fmt_display(f)
    }
}

impl<PacketIdType> GenericPacketTrait for GenericStorePacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    fn size(&self) -> usize {
        match self {
            GenericStorePacket::Publish(p) => p.size(),
            GenericStorePacket::Pubrel(p) => p.size(),
        }
    }

    #[cfg(feature = "std")]
    fn to_buffers(&self) -> Vec<IoSlice<'_>> {
        match self {
            GenericStorePacket::Publish(p) => p.to_buffers(),
            GenericStorePacket::Pubrel(p) => p.to_buffers(),
        }
    }

    fn to_continuous_buffer(&self) -> Vec<u8> {
        match self {
            GenericStorePacket::Publish(p) => p.to_continuous_buffer(),
            GenericStorePacket::Pubrel(p) => p.to_continuous_buffer(),
        }
    }
}

impl<PacketIdType> GenericPacketDisplay for GenericStorePacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    fn fmt_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GenericStorePacket::Publish(p) => p.fmt_debug(f),
            GenericStorePacket::Pubrel(p) => p.fmt_debug(f),
        }
    }

    fn fmt_display(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GenericStorePacket::Publish(p) => p.fmt_display(f),
            GenericStorePacket::Pubrel(p) => p.fmt_display(f),
        }
    }
}

impl<PacketIdType> GenericStorePacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    /// Get the packet type
    pub fn packet_type(&self) -> PacketType {
        match self {
            GenericStorePacket::Publish(_) => PacketType::Publish,
            GenericStorePacket::Pubrel(_) => PacketType::Pubrel,
        }
    }

    /// Get the packet ID of this store packet
    pub fn packet_id(&self) -> PacketIdType {
        match self {
            GenericStorePacket::Publish(p) => p.packet_id().unwrap(),
            GenericStorePacket::Pubrel(p) => p.packet_id(),
        }
    }

    /// Set the DUP flag, used when retransmitting after a reconnect.
    pub fn set_dup(self, dup: bool) -> Self {
        match self {
            GenericStorePacket::Publish(p) => GenericStorePacket::Publish(p.set_dup(dup)),
            GenericStorePacket::Pubrel(p) => GenericStorePacket::Pubrel(p),
        }
    }

    /// Get the response packet type for this store packet
    pub fn response_packet(&self) -> ResponsePacket {
        match self {
            GenericStorePacket::Publish(p) => match p.qos() {
                Qos::AtLeastOnce => ResponsePacket::Puback,
                Qos::ExactlyOnce => ResponsePacket::Pubrec,
                Qos::AtMostOnce => panic!("QoS 0 packets should not be stored"),
            },
            GenericStorePacket::Pubrel(_) => ResponsePacket::Pubcomp,
        }
    }
}

impl<PacketIdType> TryFrom<v5_0::GenericPublish<PacketIdType>> for GenericStorePacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    type Error = MqttError;

    fn try_from(publish: v5_0::GenericPublish<PacketIdType>) -> Result<Self, Self::Error> {
        match publish.qos() {
            Qos::AtMostOnce => Err(MqttError::InvalidQos),
            _ => Ok(GenericStorePacket::Publish(publish)),
        }
    }
}

impl<PacketIdType> TryFrom<v5_0::GenericPubrel<PacketIdType>> for GenericStorePacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    type Error = MqttError;

    fn try_from(pubrel: v5_0::GenericPubrel<PacketIdType>) -> Result<Self, Self::Error> {
        Ok(GenericStorePacket::Pubrel(pubrel))
    }
}

impl<PacketIdType> From<GenericStorePacket<PacketIdType>> for GenericPacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    fn from(store_packet: GenericStorePacket<PacketIdType>) -> Self {
        match store_packet {
            GenericStorePacket::Publish(p) => GenericPacket::Publish(p),
            GenericStorePacket::Pubrel(p) => GenericPacket::Pubrel(p),
        }
    }
}
