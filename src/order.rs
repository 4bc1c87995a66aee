//! Which lines, and which buffers, get scanned and in what order.

use crate::buffer::Buffer;
use crate::error::{CompleteError, CompleteResult};
use std::ops::Range;

/// Lines around the cursor taking part in a local search. A negative
/// count reaches the start (or end) of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub above: i64,
    pub below: i64,
}

impl SearchWindow {
    pub fn is_whole_file(&self) -> bool {
        self.above < 0 && self.below < 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOrder {
    /// above, current, below, top to bottom
    Normal,
    /// below, current, above, bottom to top
    Reverse,
    /// current, then above and below, each bottom to top
    ReverseAboveFirst,
    /// current, then alternating outwards starting above
    Centered,
    /// current, below, above, top to bottom
    NormalBelowFirst,
}

impl TryFrom<i64> for MatchOrder {
    type Error = CompleteError;

    fn try_from(selector: i64) -> CompleteResult<Self> {
        match selector {
            0 => Ok(MatchOrder::Normal),
            1 => Ok(MatchOrder::Reverse),
            2 => Ok(MatchOrder::ReverseAboveFirst),
            3 => Ok(MatchOrder::Centered),
            4 => Ok(MatchOrder::NormalBelowFirst),
            n => Err(CompleteError::InvalidOrder(n)),
        }
    }
}

/// The three disjoint groups of line indexes around the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRanges {
    pub above: Range<usize>,
    pub current: usize,
    pub below: Range<usize>,
}

impl LineRanges {
    /// Clip the window around `current` to `[0, total - 1]`.
    pub fn select(current: usize, total: usize, window: SearchWindow) -> Self {
        let last_index = total.saturating_sub(1);
        let first = if window.above < 0 {
            0
        } else {
            current.saturating_sub(window.above as usize)
        };
        let last = if window.below < 0 {
            last_index
        } else {
            last_index.min(current.saturating_add(window.below as usize))
        };
        LineRanges {
            above: first..current,
            current,
            below: (current + 1)..(last + 1).max(current + 1),
        }
    }

    pub fn first(&self) -> usize {
        self.above.start
    }

    pub fn last(&self) -> usize {
        self.below.end.saturating_sub(1).max(self.current)
    }

    /// Line indexes in the order `order` asks for.
    pub fn ordered(&self, order: MatchOrder) -> Box<dyn Iterator<Item = usize>> {
        let above = self.above.clone();
        let current = std::iter::once(self.current);
        let below = self.below.clone();
        match order {
            MatchOrder::Normal => Box::new(above.chain(current).chain(below)),
            MatchOrder::NormalBelowFirst => Box::new(current.chain(below).chain(above)),
            MatchOrder::Reverse => Box::new(below.rev().chain(current).chain(above.rev())),
            MatchOrder::ReverseAboveFirst => {
                Box::new(current.chain(above.rev()).chain(below.rev()))
            }
            MatchOrder::Centered => Box::new(current.chain(interleave(above.rev(), below))),
        }
    }
}

/// Lines of `buffer` in scan order, fetched by index as they are consumed.
pub fn ordered_lines<'a>(
    buffer: &'a Buffer,
    ranges: &LineRanges,
    order: MatchOrder,
) -> impl Iterator<Item = &'a str> + 'a {
    ranges.ordered(order).map(move |i| buffer.line(i))
}

/// Alternate items of `a` and `b`, then drain whichever is longer.
pub struct Interleave<A, B> {
    a: A,
    b: B,
    take_a: bool,
}

pub fn interleave<A, B>(a: A, b: B) -> Interleave<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Interleave {
        a: a.into_iter(),
        b: b.into_iter(),
        take_a: true,
    }
}

impl<A, B> Iterator for Interleave<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let first = if self.take_a {
            self.a.next()
        } else {
            self.b.next()
        };
        self.take_a = !self.take_a;
        match first {
            Some(item) => Some(item),
            None if self.take_a => self.a.next(),
            None => self.b.next(),
        }
    }
}

/// Buffers to scan for an all-buffer search: the current one, then its
/// neighbours in the buffer list, nearest first, before-side leading.
pub fn buffer_traversal(buffers: &[Buffer], current: usize) -> impl Iterator<Item = &Buffer> {
    let current = current.min(buffers.len().saturating_sub(1));
    let (before, rest) = buffers.split_at(current.min(buffers.len()));
    let (this, after) = rest.split_at(rest.len().min(1));
    this.iter().chain(interleave(before.iter().rev(), after.iter()))
}

/// Every line of every buffer, buffers in traversal order.
pub fn all_buffer_lines(buffers: &[Buffer], current: usize) -> impl Iterator<Item = &str> {
    buffer_traversal(buffers, current).flat_map(|b| b.contents.iter().map(String::as_str))
}
