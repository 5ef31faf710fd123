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

//! Convenience re-export of the traits and event types needed to drive a
//! [`crate::mqtt::Connection`] without spelling out their home modules.
//!
//! `use mqtt_protocol_core::mqtt::prelude::*;` brings in the trait methods
//! (`size()`, `to_buffers()`, `into_payload()`) that
//! [`crate::mqtt::packet::GenericPacket`] and payload conversions rely on, plus
//! the event/timer types returned by `Connection::send`/`Connection::recv`.

pub use crate::mqtt::common::IntoPayload;
pub use crate::mqtt::connection::event::{Event, GenericEvent, TimerKind};
pub use crate::mqtt::packet::{GenericPacketDisplay, GenericPacketTrait};
