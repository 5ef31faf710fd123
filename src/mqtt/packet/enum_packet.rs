// MIT License
//
// Copyright (c) 2025 Takatoshi Kondo
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
use crate::mqtt::packet::v5_0;
use crate::mqtt::packet::IsPacketId;
use crate::mqtt::packet::PacketType;
use alloc::vec::Vec;
use enum_dispatch::enum_dispatch;
use serde::Serialize;
#[cfg(feature = "std")]
use std::io::IoSlice;

#[enum_dispatch]
pub trait GenericPacketTrait {
    fn size(&self) -> usize;

    /// Create a continuous buffer containing the complete packet data
    ///
    /// Returns a vector containing all packet bytes in a single continuous buffer.
    /// This method is compatible with no-std environments.
    ///
    /// The returned buffer contains the complete packet serialized according
    /// to the MQTT protocol specification.
    ///
    /// # Returns
    ///
    /// A vector containing the complete packet data
    fn to_continuous_buffer(&self) -> Vec<u8>;

    #[cfg(feature = "std")]
    fn to_buffers(&self) -> Vec<IoSlice<'_>>;
}

#[enum_dispatch]
pub trait GenericPacketDisplay {
    fn fmt_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result;
    fn fmt_display(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result;
}

/// Tagged union of every MQTT v5.0 control packet this crate's connection
/// state machine can send or receive.
#[enum_dispatch(GenericPacketTrait, GenericPacketDisplay)]
#[derive(Serialize, Clone, PartialEq, Eq)]
pub enum GenericPacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    Connect(v5_0::Connect),
    Connack(v5_0::Connack),
    Subscribe(v5_0::GenericSubscribe<PacketIdType>),
    Suback(v5_0::GenericSuback<PacketIdType>),
    Unsubscribe(v5_0::GenericUnsubscribe<PacketIdType>),
    Unsuback(v5_0::GenericUnsuback<PacketIdType>),
    Publish(v5_0::GenericPublish<PacketIdType>),
    Puback(v5_0::GenericPuback<PacketIdType>),
    Pubrec(v5_0::GenericPubrec<PacketIdType>),
    Pubrel(v5_0::GenericPubrel<PacketIdType>),
    Pubcomp(v5_0::GenericPubcomp<PacketIdType>),
    Disconnect(v5_0::Disconnect),
    Pingreq(v5_0::Pingreq),
    Pingresp(v5_0::Pingresp),
    Auth(v5_0::Auth),
}

// Type alias for the u16 packet-id instantiation used everywhere in this crate.
pub type Packet = GenericPacket<u16>;

impl<PacketIdType> core::fmt::Debug for GenericPacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.fmt_debug(f)
    }
}

impl<PacketIdType> core::fmt::Display for GenericPacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.fmt_display(f)
    }
}

impl<PacketIdType> GenericPacket<PacketIdType>
where
    PacketIdType: IsPacketId + Serialize,
{
    /// Get the packet type
    pub fn packet_type(&self) -> PacketType {
        match self {
            GenericPacket::Connect(_) => PacketType::Connect,
            GenericPacket::Connack(_) => PacketType::Connack,
            GenericPacket::Subscribe(_) => PacketType::Subscribe,
            GenericPacket::Suback(_) => PacketType::Suback,
            GenericPacket::Unsubscribe(_) => PacketType::Unsubscribe,
            GenericPacket::Unsuback(_) => PacketType::Unsuback,
            GenericPacket::Publish(_) => PacketType::Publish,
            GenericPacket::Puback(_) => PacketType::Puback,
            GenericPacket::Pubrec(_) => PacketType::Pubrec,
            GenericPacket::Pubrel(_) => PacketType::Pubrel,
            GenericPacket::Pubcomp(_) => PacketType::Pubcomp,
            GenericPacket::Disconnect(_) => PacketType::Disconnect,
            GenericPacket::Pingreq(_) => PacketType::Pingreq,
            GenericPacket::Pingresp(_) => PacketType::Pingresp,
            GenericPacket::Auth(_) => PacketType::Auth,
        }
    }
}
