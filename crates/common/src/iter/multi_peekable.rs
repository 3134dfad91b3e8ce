//! An iterator adaptor with an unbounded lookahead buffer. The lexer uses it to
//! look a few chars ahead (`'..'dt`, `1e+5`) before committing to a token.
use std::{collections::VecDeque, iter::Fuse};

pub struct MultiPeekable<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    buf: VecDeque<I::Item>,
}

pub trait MultiPeek: Iterator + Sized {
    fn multi_peekable(self) -> MultiPeekable<Self>;
}

impl<I: Iterator> MultiPeek for I {
    fn multi_peekable(self) -> MultiPeekable<I> {
        MultiPeekable {
            iter: self.fuse(),
            buf: VecDeque::new(),
        }
    }
}

impl<I: Iterator> MultiPeekable<I> {
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.peek_nth(0)
    }

    /// Looks `n` items ahead (0-based) without advancing.
    pub fn peek_nth(&mut self, n: usize) -> Option<&I::Item> {
        while self.buf.len() <= n {
            let item = self.iter.next()?;
            self.buf.push_back(item);
        }

        self.buf.get(n)
    }

    pub fn next_if(&mut self, func: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        if func(self.peek()?) {
            self.next()
        } else {
            None
        }
    }

    /// Consumes the next item if `func` maps it to `Some`.
    pub fn next_if_map<T>(&mut self, func: impl FnOnce(&I::Item) -> Option<T>) -> Option<T> {
        let mapped = func(self.peek()?)?;
        self.next();
        Some(mapped)
    }
}

impl<I> Iterator for MultiPeekable<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.pop_front().or_else(|| self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.iter.size_hint();
        let buffered = self.buf.len();

        (
            low.saturating_add(buffered),
            high.and_then(|n| n.checked_add(buffered)),
        )
    }
}
