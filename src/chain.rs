//! Chain: the entries of one slot, kept as a circular doubly linked list
//! with a sentinel node.
//!
//! Nodes live in a `SlotMap` arena and link to each other by key, so the
//! list is manipulated without raw pointers. The sentinel carries no entry;
//! `sentinel.next` is the head and `sentinel.prev` is the tail. New nodes
//! are linked in just before the sentinel.

use core::fmt;
use slotmap::{DefaultKey, SlotMap};

/// Stored value type.
pub type Value = i32;

/// An owned key/value pair. The key never changes after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    key: Box<[u8]>,
    value: Value,
}

impl Entry {
    pub fn new(key: &[u8], value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn value(&self) -> Value {
        self.value
    }

    /// Overwrite the value in place, returning the old one.
    pub fn replace_value(&mut self, value: Value) -> Value {
        core::mem::replace(&mut self.value, value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", String::from_utf8_lossy(&self.key), self.value)
    }
}

#[derive(Debug)]
struct Node {
    entry: Option<Entry>, // None only for the sentinel
    prev: DefaultKey,
    next: DefaultKey,
}

#[derive(Debug)]
pub struct Chain {
    nodes: SlotMap<DefaultKey, Node>,
    sentinel: DefaultKey,
}

impl Chain {
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let sentinel = nodes.insert_with_key(|k| Node {
            entry: None,
            prev: k,
            next: k,
        });
        Self { nodes, sentinel }
    }

    /// Number of entries, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Link `entry` in at the tail. O(1); does not check for duplicates.
    pub fn append(&mut self, entry: Entry) {
        let sentinel = self.sentinel;
        let tail = self.nodes[sentinel].prev;
        let k = self.nodes.insert(Node {
            entry: Some(entry),
            prev: tail,
            next: sentinel,
        });
        self.nodes[tail].next = k;
        self.nodes[sentinel].prev = k;
    }

    fn position(&self, key: &[u8]) -> Option<DefaultKey> {
        let mut cur = self.nodes[self.sentinel].next;
        while cur != self.sentinel {
            let node = &self.nodes[cur];
            if node.entry.as_ref().is_some_and(|e| e.key() == key) {
                return Some(cur);
            }
            cur = node.next;
        }
        None
    }

    /// First entry whose key equals `key`, scanning head to tail.
    pub fn find(&self, key: &[u8]) -> Option<&Entry> {
        self.iter().find(|e| e.key() == key)
    }

    pub fn find_mut(&mut self, key: &[u8]) -> Option<&mut Entry> {
        let k = self.position(key)?;
        self.nodes.get_mut(k).and_then(|n| n.entry.as_mut())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            sentinel: self.sentinel,
            cursor: self.nodes[self.sentinel].next,
        }
    }

    /// Release every entry and node. Returns how many entries were released.
    pub fn destroy(self) -> usize {
        let released = self.len();
        drop(self.nodes);
        released
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in self.iter() {
            writeln!(f, "  {}", e)?;
        }
        Ok(())
    }
}

/// Iterator over a chain's entries, head to tail.
pub struct Iter<'a> {
    nodes: &'a SlotMap<DefaultKey, Node>,
    sentinel: DefaultKey,
    cursor: DefaultKey,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.sentinel {
            return None;
        }
        let node = self.nodes.get(self.cursor)?;
        self.cursor = node.next;
        node.entry.as_ref()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
