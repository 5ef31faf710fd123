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

pub mod role;

mod version;
pub use self::version::Version;

pub mod event;
pub use self::event::{Event, GenericEvent, TimerKind};

mod store;
pub use self::store::{GenericStore, Store};

mod packet_builder;
mod packet_id_manager;

mod subscription_registry;
pub use self::subscription_registry::{SubscriptionRegistry, TopicSubscription};

mod sendable_role;
mod sendable_version;
mod sendable_helper;
mod sendable;
pub use self::sendable::{Sendable, SendBehavior, SendableHelper};

#[allow(clippy::module_inception)]
mod core;
pub use self::core::{GenericConnection, Connection, RecvBehavior};
