//! Conversation context
//!
//! The last few raw utterances. Shown to the user as a counter only; the
//! classifier never reads it.

use std::collections::VecDeque;

pub const DEFAULT_CONTEXT_CAPACITY: usize = 5;

#[derive(Debug, Clone)]
pub struct ConversationContext {
    entries: VecDeque<String>,
    capacity: usize,
}

impl ConversationContext {
    /// Capacity below 1 is raised to 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an utterance, dropping the oldest once full
    pub fn push(&mut self, utterance: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(utterance.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_to_capacity() {
        let mut ctx = ConversationContext::default();
        for i in 0..8 {
            ctx.push(format!("msg {}", i));
        }
        assert_eq!(ctx.len(), 5);
        let kept: Vec<&str> = ctx.iter().collect();
        assert_eq!(kept, vec!["msg 3", "msg 4", "msg 5", "msg 6", "msg 7"]);
        assert_eq!(ctx.latest(), Some("msg 7"));
    }

    #[test]
    fn test_clear() {
        let mut ctx = ConversationContext::new(2);
        ctx.push("a");
        ctx.push("b");
        ctx.clear();
        assert!(ctx.is_empty());
        assert_eq!(ctx.latest(), None);
    }

    #[test]
    fn test_zero_capacity_raised() {
        let mut ctx = ConversationContext::new(0);
        ctx.push("a");
        ctx.push("b");
        assert_eq!(ctx.capacity(), 1);
        assert_eq!(ctx.iter().collect::<Vec<_>>(), vec!["b"]);
    }
}
