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
use crate::mqtt::result_code::MqttError;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// One level of a compiled topic filter.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterLevel {
    /// A literal level, matched by exact string equality.
    Literal(String),
    /// `+`, matches exactly one level.
    Plus,
    /// `#`, matches zero or more trailing levels. Only ever the last element.
    Hash,
}

/// Checks that a topic filter obeys MQTT's wildcard placement rules.
///
/// `#` may only appear as an entire level, and only as the last level.
/// `+` may only appear as an entire level.
pub fn validate_filter(filter: &str) -> Result<(), MqttError> {
    if filter.is_empty() {
        return Err(MqttError::TopicFilterInvalid);
    }
    let levels: Vec<&str> = filter.split('/').collect();
    let last = levels.len() - 1;
    for (i, level) in levels.iter().enumerate() {
        if level.contains('#') && *level != "#" {
            return Err(MqttError::TopicFilterInvalid);
        }
        if *level == "#" && i != last {
            return Err(MqttError::TopicFilterInvalid);
        }
        if level.contains('+') && *level != "+" {
            return Err(MqttError::TopicFilterInvalid);
        }
    }
    Ok(())
}

/// A topic filter compiled once at subscribe time into a level list, so that
/// matching a PUBLISH topic against it does not re-parse the filter string.
///
/// Mirrors the matching rules in MQTT v5.0 §4.7: `+` matches exactly one
/// level, `#` matches zero or more trailing levels, and a filter beginning
/// with a wildcard never matches a topic beginning with `$` (system topics
/// are opaque to wildcard subscriptions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFilter {
    levels: Vec<FilterLevel>,
}

impl CompiledFilter {
    /// Validates and compiles a topic filter string.
    pub fn compile(filter: &str) -> Result<Self, MqttError> {
        validate_filter(filter)?;
        let levels = filter
            .split('/')
            .map(|level| match level {
                "#" => FilterLevel::Hash,
                "+" => FilterLevel::Plus,
                other => FilterLevel::Literal(other.to_string()),
            })
            .collect();
        Ok(Self { levels })
    }

    /// Returns whether `topic` (a concrete, wildcard-free topic name) matches
    /// this filter.
    pub fn matches(&self, topic: &str) -> bool {
        if topic.starts_with('$')
            && matches!(self.levels.first(), Some(FilterLevel::Hash) | Some(FilterLevel::Plus))
        {
            return false;
        }
        let topic_levels: Vec<&str> = topic.split('/').collect();
        Self::match_levels(&self.levels, &topic_levels)
    }

    fn match_levels(filter: &[FilterLevel], topic: &[&str]) -> bool {
        match filter.split_first() {
            None => topic.is_empty(),
            Some((FilterLevel::Hash, _)) => true,
            Some((FilterLevel::Plus, rest)) => match topic.split_first() {
                Some((_, topic_rest)) => Self::match_levels(rest, topic_rest),
                None => false,
            },
            Some((FilterLevel::Literal(expected), rest)) => match topic.split_first() {
                Some((level, topic_rest)) if level == expected => {
                    Self::match_levels(rest, topic_rest)
                }
                _ => false,
            },
        }
    }
}

/// Convenience one-shot match, equivalent to `CompiledFilter::compile(filter)?.matches(topic)`.
///
/// Prefer [`CompiledFilter`] when matching the same filter against many
/// topics, so the filter is parsed only once.
pub fn matches(filter: &str, topic: &str) -> Result<bool, MqttError> {
    Ok(CompiledFilter::compile(filter)?.matches(topic))
}
