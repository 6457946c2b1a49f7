// Copyright 2026 larder Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{Slab, Token};

#[derive(Debug)]
struct Node<T> {
    data: T,
    prev: Option<Token>,
    next: Option<Token>,
}

/// Head of one doubly linked list threaded through a [`LinkedSlab`].
///
/// Several lists may share one slab. A node's token stays stable while the
/// node moves within a list or between lists of the same slab.
#[derive(Debug, Default)]
pub struct List {
    head: Option<Token>,
    tail: Option<Token>,
    len: usize,
}

impl List {
    /// Create an empty list head.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Token of the front node, if any.
    pub fn head(&self) -> Option<Token> {
        self.head
    }

    /// Token of the back node, if any.
    pub fn tail(&self) -> Option<Token> {
        self.tail
    }

    /// Count of nodes linked into this list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Doubly linked lists stored in a shared [`Slab`].
///
/// Nodes are addressed by generation-checked [`Token`]s instead of pointers
/// or iterators, so a handle kept across later insertions and removals is
/// either still valid or detectably stale, never dangling.
///
/// Every operation that changes list membership takes the [`List`] head the
/// node belongs to; passing the wrong head corrupts that head's bookkeeping,
/// which strict assertions catch.
#[derive(Debug)]
pub struct LinkedSlab<T> {
    slab: Slab<Node<T>>,
}

impl<T> Default for LinkedSlab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedSlab<T> {
    /// Create an empty slab.
    pub const fn new() -> Self {
        Self { slab: Slab::new() }
    }

    /// Create an empty slab with space for `capacity` nodes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slab: Slab::with_capacity(capacity),
        }
    }

    /// Insert `data` at the front of `list` and return its token.
    pub fn push_front(&mut self, list: &mut List, data: T) -> Token {
        let token = self.slab.insert(Node {
            data,
            prev: None,
            next: None,
        });
        self.link_front(list, token);
        token
    }

    /// Unlink and drop the back node of `list`, returning its data.
    pub fn pop_back(&mut self, list: &mut List) -> Option<T> {
        let token = list.tail?;
        self.remove(list, token)
    }

    /// Unlink and drop the node addressed by `token` from `list`.
    pub fn remove(&mut self, list: &mut List, token: Token) -> Option<T> {
        self.unlink(list, token)?;
        self.slab.remove(token).map(|node| node.data)
    }

    /// Relink the node addressed by `token` at the front of `list`.
    ///
    /// A pure relink: no allocation, the token stays valid.
    pub fn move_to_front(&mut self, list: &mut List, token: Token) {
        if list.head == Some(token) {
            return;
        }
        if self.unlink(list, token).is_none() {
            return;
        }
        self.link_front(list, token);
    }

    /// Move the node addressed by `token` from the `from` list to the front
    /// of the `to` list. The token stays valid.
    pub fn transfer_front(&mut self, from: &mut List, to: &mut List, token: Token) {
        if self.unlink(from, token).is_none() {
            return;
        }
        self.link_front(to, token);
    }

    /// Get a reference to the data addressed by `token`.
    pub fn get(&self, token: Token) -> Option<&T> {
        self.slab.get(token).map(|node| &node.data)
    }

    /// Get a mutable reference to the data addressed by `token`.
    pub fn get_mut(&mut self, token: Token) -> Option<&mut T> {
        self.slab.get_mut(token).map(|node| &mut node.data)
    }

    /// Reference to the front data of `list`.
    pub fn front(&self, list: &List) -> Option<&T> {
        list.head.and_then(|token| self.get(token))
    }

    /// Reference to the back data of `list`.
    pub fn back(&self, list: &List) -> Option<&T> {
        list.tail.and_then(|token| self.get(token))
    }

    /// Count of nodes across all lists sharing this slab.
    pub fn len(&self) -> usize {
        self.slab.len()
    }

    /// Whether the slab holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.slab.is_empty()
    }

    /// Drop all nodes of all lists sharing this slab.
    ///
    /// List heads referencing this slab must be reset by the caller.
    pub fn clear(&mut self) {
        self.slab.clear();
    }

    /// Iterate `list` from front to back.
    pub fn iter<'a>(&'a self, list: &'a List) -> Iter<'a, T> {
        Iter {
            slab: &self.slab,
            next: list.head,
        }
    }

    fn link_front(&mut self, list: &mut List, token: Token) {
        let old_head = list.head;
        if let Some(node) = self.slab.get_mut(token) {
            node.prev = None;
            node.next = old_head;
        }
        if let Some(head) = old_head {
            crate::strict_assert!(self.slab.get(head).is_some());
            if let Some(node) = self.slab.get_mut(head) {
                node.prev = Some(token);
            }
        }
        list.head = Some(token);
        if list.tail.is_none() {
            list.tail = Some(token);
        }
        list.len += 1;
    }

    fn unlink(&mut self, list: &mut List, token: Token) -> Option<()> {
        let (prev, next) = {
            let node = self.slab.get(token)?;
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => {
                if let Some(node) = self.slab.get_mut(prev) {
                    node.next = next;
                }
            }
            None => {
                crate::strict_assert_eq!(list.head, Some(token));
                list.head = next;
            }
        }
        match next {
            Some(next) => {
                if let Some(node) = self.slab.get_mut(next) {
                    node.prev = prev;
                }
            }
            None => {
                crate::strict_assert_eq!(list.tail, Some(token));
                list.tail = prev;
            }
        }
        list.len -= 1;
        Some(())
    }
}

/// Front-to-back iterator over one list of a [`LinkedSlab`].
pub struct Iter<'a, T> {
    slab: &'a Slab<Node<T>>,
    next: Option<Token>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next?;
        let node = self.slab.get(token)?;
        self.next = node.next;
        Some(&node.data)
    }
}
