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
use core::fmt::Debug;

use num_traits::{One, PrimInt};

use crate::mqtt::common::HashSet;

/// Allocates MQTT packet identifiers in the range `[lowest, highest]`.
///
/// Unlike a pool that always hands out the lowest vacant value, this allocator
/// walks forward from a cursor and wraps around, so recently-released ids are
/// not reissued until the rest of the range has been tried. This keeps
/// in-flight packet ids spread out, which makes wire captures and log
/// correlation easier when diagnosing a session with many outstanding QoS
/// 1/2 exchanges.
#[derive(Clone)]
pub struct ValueAllocator<T>
where
    T: PrimInt + One + Debug + core::hash::Hash,
{
    in_use: HashSet<T>,
    cursor: T,
    lowest: T,
    highest: T,
}

impl<T> ValueAllocator<T>
where
    T: PrimInt + One + Debug + core::hash::Hash,
{
    pub fn new(lowest: T, highest: T) -> Self {
        assert!(lowest <= highest);
        Self {
            in_use: HashSet::new(),
            cursor: lowest,
            lowest,
            highest,
        }
    }

    fn step(&self, value: T) -> T {
        if value >= self.highest {
            self.lowest
        } else {
            value + T::one()
        }
    }

    /// Allocate the next vacant value starting from the cursor, wrapping
    /// around the range at most once. Returns `None` if every value in
    /// `[lowest, highest]` is currently in use.
    pub fn allocate(&mut self) -> Option<T> {
        let start = self.cursor;
        let mut candidate = start;
        loop {
            if !self.in_use.contains(&candidate) {
                self.in_use.insert(candidate);
                self.cursor = self.step(candidate);
                return Some(candidate);
            }
            candidate = self.step(candidate);
            if candidate == start {
                return None;
            }
        }
    }

    pub fn first_vacant(&self) -> Option<T> {
        let start = self.cursor;
        let mut candidate = start;
        loop {
            if !self.in_use.contains(&candidate) {
                return Some(candidate);
            }
            candidate = self.step(candidate);
            if candidate == start {
                return None;
            }
        }
    }

    pub fn deallocate(&mut self, value: T) {
        debug_assert!(self.lowest <= value && value <= self.highest);
        self.in_use.remove(&value);
    }

    /// Mark `value` as in-use (e.g. a resumed session restoring its pending
    /// packet ids). Returns `false` if the value was already in use.
    pub fn use_value(&mut self, value: T) -> bool {
        debug_assert!(self.lowest <= value && value <= self.highest);
        self.in_use.insert(value)
    }

    pub fn is_used(&self, value: T) -> bool {
        self.in_use.contains(&value)
    }

    pub fn clear(&mut self) {
        self.in_use.clear();
        self.cursor = self.lowest;
    }

    pub fn interval_count(&self) -> usize {
        self.in_use.len()
    }
}
