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

use crate::mqtt::common::HashMap;
use crate::mqtt::packet::{CompiledFilter, Qos, SubEntry};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A single active subscription: the filter the application asked for, the
/// compiled matcher derived from it, and the QoS the broker actually granted
/// once SUBACK arrives.
#[derive(Debug, Clone)]
pub struct TopicSubscription {
    filter: String,
    compiled: CompiledFilter,
    requested_qos: Qos,
    granted_qos: Option<Qos>,
}

impl TopicSubscription {
    /// The topic filter string, as subscribed.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The QoS requested in the SUBSCRIBE packet.
    pub fn requested_qos(&self) -> Qos {
        self.requested_qos
    }

    /// The QoS granted by the broker's SUBACK, once it has arrived.
    /// `None` before SUBACK is received.
    pub fn granted_qos(&self) -> Option<Qos> {
        self.granted_qos
    }

    fn matches(&self, topic: &str) -> bool {
        self.compiled.matches(topic)
    }
}

/// A subscription awaiting SUBACK, keyed by the filters it named, in the
/// order they appeared in the SUBSCRIBE packet (SUBACK returns one reason
/// code per filter, in the same order).
struct PendingSubscribe {
    filters: Vec<String>,
}

/// Session-scoped table of topic subscriptions: it tracks in-flight
/// SUBSCRIBE/UNSUBSCRIBE requests by packet id and, once acknowledged,
/// the set of filters currently active, each with a matcher compiled once
/// from the filter string so that dispatching an inbound PUBLISH does not
/// re-parse every filter.
pub struct SubscriptionRegistry<PacketIdType>
where
    PacketIdType: core::hash::Hash + Eq,
{
    active: HashMap<String, TopicSubscription>,
    pending_subscribe: HashMap<PacketIdType, PendingSubscribe>,
    pending_unsubscribe: HashMap<PacketIdType, Vec<String>>,
}

impl<PacketIdType> SubscriptionRegistry<PacketIdType>
where
    PacketIdType: core::hash::Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            active: HashMap::new(),
            pending_subscribe: HashMap::new(),
            pending_unsubscribe: HashMap::new(),
        }
    }

    /// Record the filters named in an outbound SUBSCRIBE, to be resolved
    /// once the matching SUBACK arrives. Filters that fail to compile (an
    /// invalid wildcard placement) are skipped; the SUBACK reason code at
    /// that position is then simply not turned into an active subscription.
    pub fn record_subscribe(&mut self, packet_id: PacketIdType, entries: &[SubEntry]) {
        let filters: Vec<String> = entries
            .iter()
            .map(|entry| entry.topic_filter().to_string())
            .collect();
        for entry in entries {
            if let Ok(compiled) = CompiledFilter::compile(entry.topic_filter()) {
                self.active.insert(
                    entry.topic_filter().to_string(),
                    TopicSubscription {
                        filter: entry.topic_filter().to_string(),
                        compiled,
                        requested_qos: entry.sub_opts().qos(),
                        granted_qos: None,
                    },
                );
            }
        }
        self.pending_subscribe
            .insert(packet_id, PendingSubscribe { filters });
    }

    /// Apply a SUBACK: assign the granted QoS (or drop the entry, on
    /// failure) for each filter named in the matching SUBSCRIBE, in order.
    /// `granted` must have the same length as the original SUBSCRIBE's
    /// entry list; entries beyond its length, or a mismatched length
    /// entirely, are ignored rather than panicking.
    pub fn apply_suback(&mut self, packet_id: PacketIdType, granted: &[Option<Qos>]) {
        let Some(pending) = self.pending_subscribe.remove(&packet_id) else {
            return;
        };
        for (filter, qos) in pending.filters.iter().zip(granted.iter()) {
            match qos {
                Some(qos) => {
                    if let Some(sub) = self.active.get_mut(filter) {
                        sub.granted_qos = Some(*qos);
                    }
                }
                None => {
                    self.active.remove(filter);
                }
            }
        }
    }

    /// Record the filters named in an outbound UNSUBSCRIBE, to be removed
    /// once UNSUBACK arrives. Per spec, unsubscribe removes by exact filter
    /// string regardless of the UNSUBACK reason code.
    pub fn record_unsubscribe(&mut self, packet_id: PacketIdType, filters: &[String]) {
        self.pending_unsubscribe
            .insert(packet_id, filters.to_vec());
    }

    /// Apply an UNSUBACK: drop the filters named in the matching UNSUBSCRIBE.
    pub fn apply_unsuback(&mut self, packet_id: PacketIdType) {
        if let Some(filters) = self.pending_unsubscribe.remove(&packet_id) {
            for filter in filters {
                self.active.remove(&filter);
            }
        }
    }

    /// All active subscriptions whose filter matches `topic` (granted_qos is
    /// `None` until SUBACK arrives).
    pub fn matching(&self, topic: &str) -> Vec<&TopicSubscription> {
        self.active
            .values()
            .filter(|sub| sub.matches(topic))
            .collect()
    }

    /// Look up a subscription by its exact filter string.
    pub fn get(&self, filter: &str) -> Option<&TopicSubscription> {
        self.active.get(filter)
    }

    /// Discard all subscription state. Called when clean-start discards the
    /// rest of the client-side session.
    pub fn clear(&mut self) {
        self.active.clear();
        self.pending_subscribe.clear();
        self.pending_unsubscribe.clear();
    }
}

impl<PacketIdType> Default for SubscriptionRegistry<PacketIdType>
where
    PacketIdType: core::hash::Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mqtt::packet::SubOpts;

    fn entry(filter: &str, qos: Qos) -> SubEntry {
        SubEntry::new(filter, SubOpts::new().set_qos(qos)).unwrap()
    }

    #[test]
    fn subscribe_then_suback_grants_qos() {
        let mut reg: SubscriptionRegistry<u16> = SubscriptionRegistry::new();
        reg.record_subscribe(1, &[entry("a/+/c", Qos::AtLeastOnce)]);
        assert!(reg.get("a/+/c").is_some());
        assert_eq!(reg.get("a/+/c").unwrap().granted_qos(), None);

        reg.apply_suback(1, &[Some(Qos::AtLeastOnce)]);
        assert_eq!(
            reg.get("a/+/c").unwrap().granted_qos(),
            Some(Qos::AtLeastOnce)
        );
    }

    #[test]
    fn failed_suback_drops_subscription() {
        let mut reg: SubscriptionRegistry<u16> = SubscriptionRegistry::new();
        reg.record_subscribe(1, &[entry("a/b", Qos::AtMostOnce)]);
        reg.apply_suback(1, &[None]);
        assert!(reg.get("a/b").is_none());
    }

    #[test]
    fn matching_finds_wildcard_subscriptions() {
        let mut reg: SubscriptionRegistry<u16> = SubscriptionRegistry::new();
        reg.record_subscribe(
            1,
            &[entry("a/+/c", Qos::AtMostOnce), entry("a/b/#", Qos::AtMostOnce)],
        );
        reg.apply_suback(1, &[Some(Qos::AtMostOnce), Some(Qos::AtMostOnce)]);

        let matches = reg.matching("a/b/c");
        assert_eq!(matches.len(), 2);
        assert!(reg.matching("x/y/z").is_empty());
    }

    #[test]
    fn unsubscribe_removes_by_exact_filter() {
        let mut reg: SubscriptionRegistry<u16> = SubscriptionRegistry::new();
        reg.record_subscribe(1, &[entry("a/b", Qos::AtMostOnce)]);
        reg.apply_suback(1, &[Some(Qos::AtMostOnce)]);
        assert!(reg.get("a/b").is_some());

        reg.record_unsubscribe(2, &["a/b".to_string()]);
        reg.apply_unsuback(2);
        assert!(reg.get("a/b").is_none());
    }

    #[test]
    fn clear_discards_everything() {
        let mut reg: SubscriptionRegistry<u16> = SubscriptionRegistry::new();
        reg.record_subscribe(1, &[entry("a/b", Qos::AtMostOnce)]);
        reg.clear();
        assert!(reg.get("a/b").is_none());
    }
}
