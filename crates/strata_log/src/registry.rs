//! Bounded, insertion-ordered storage for retained diagnostic messages.

use crate::limits::MAX_LOG_MSG_LENGTH;
use crate::message::Message;
use crate::severity::Severity;
use crate::text::truncate_utf8;
use std::collections::VecDeque;

/// A bounded collection of [`Message`]s in insertion order, oldest first.
///
/// A capacity of `0` disables the registry: nothing is ever stored. When an
/// insertion would exceed a non-zero capacity, the oldest stored message is
/// discarded first, so the registry always holds the most recent `capacity`
/// messages. Bulk drains run oldest-first; single pops run newest-first.
#[derive(Debug, Default)]
pub struct MessageRegistry {
    capacity: usize,
    messages: VecDeque<Message>,
    next_sequence: u64,
}

impl MessageRegistry {
    /// Creates a registry with the given capacity (`0` disables retention).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            messages: VecDeque::new(),
            next_sequence: 0,
        }
    }

    /// The maximum number of messages this registry retains.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The number of messages currently stored.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no messages are stored.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Discards every stored message without dispatching any of them and
    /// returns the number discarded.
    pub fn free_all(&mut self) -> usize {
        let freed = self.messages.len();
        self.messages.clear();
        freed
    }

    /// Appends a message, truncating the text and evicting the oldest entry
    /// if the registry is full. A no-op when the registry is disabled.
    pub(crate) fn store(&mut self, severity: Severity, text: &str) {
        if self.capacity == 0 {
            return;
        }
        if self.messages.len() >= self.capacity {
            self.messages.pop_front();
        }
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.messages.push_back(Message::new(
            severity,
            truncate_utf8(text, MAX_LOG_MSG_LENGTH),
            sequence,
        ));
    }

    /// Replaces the capacity, unconditionally discarding all stored messages.
    pub(crate) fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.messages.clear();
    }

    /// Removes and returns the most recently stored message.
    pub(crate) fn pop_newest(&mut self) -> Option<Message> {
        self.messages.pop_back()
    }

    /// Removes and returns all stored messages, oldest first.
    pub(crate) fn take_all(&mut self) -> Vec<Message> {
        self.messages.drain(..).collect()
    }
}
