use crate::NodeID;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the open list, with the costs it was pushed with.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Element {
    pub id: NodeID,
    pub g_value: f32,
    pub h_value: f32,
}

impl Element {
    fn f_value(&self) -> f32 {
        self.g_value + self.h_value
    }
}

// BinaryHeap is a max-heap, so the comparison is reversed: lowest total cost first,
// then lowest h_value, then lowest id.
impl Ord for Element {
    fn cmp(&self, other: &Element) -> Ordering {
        other
            .f_value()
            .total_cmp(&self.f_value())
            .then_with(|| other.h_value.total_cmp(&self.h_value))
            .then_with(|| other.id.cmp(&self.id))
    }
}
impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Element) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Element {
    fn eq(&self, other: &Element) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Element {}

/// The open list.
///
/// A node may be pushed again when a cheaper route to it is found. The older entries
/// are left in the heap and have to be skipped by the caller.
#[derive(Clone, Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Element>,
}

impl Frontier {
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    #[allow(unused)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, id: NodeID, g_value: f32, h_value: f32) {
        self.heap.push(Element {
            id,
            g_value,
            h_value,
        });
    }

    /// Removes the entry with the lowest estimated total cost.
    pub fn pop(&mut self) -> Option<Element> {
        self.heap.pop()
    }
}
