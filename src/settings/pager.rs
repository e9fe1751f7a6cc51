//! Paged step machines.
//!
//! Every multi-page settings flow is a clamped index over a fixed list of
//! pages. Out-of-range requests are clamped, never rejected, and nothing
//! wraps around.

use std::marker::PhantomData;

use crate::input::SwipeDirection;

/// A clamped page index over `count` pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    count: usize,
}

impl Pager {
    /// Create a pager over `count` pages (at least one), starting at page 0.
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count: count.max(1),
        }
    }

    /// Current page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of pages.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the last page.
    pub fn last_index(&self) -> usize {
        self.count - 1
    }

    /// Jump straight to `index`, clamped to the last page.
    ///
    /// Returns true if the page changed.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.set(index.min(self.last_index()))
    }

    /// Advance one page; no-op on the last page.
    pub fn next(&mut self) -> bool {
        self.set((self.index + 1).min(self.last_index()))
    }

    /// Retreat one page; no-op on the first page.
    pub fn previous(&mut self) -> bool {
        self.set(self.index.saturating_sub(1))
    }

    /// Apply a swipe: right goes back, left goes forward.
    pub fn apply_swipe(&mut self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Right => self.previous(),
            SwipeDirection::Left => self.next(),
        }
    }

    /// Return to the first page.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    fn set(&mut self, index: usize) -> bool {
        let changed = self.index != index;
        self.index = index;
        changed
    }
}

/// A page of a typed flow.
pub trait FlowPage: Copy + Eq + std::fmt::Debug + 'static {
    /// All pages in display order. Never empty.
    fn all() -> &'static [Self];

    /// Heading shown on the page.
    fn title(&self) -> &'static str;

    /// One or two lines under the heading.
    fn description(&self) -> &'static str;

    /// Position of this page in [`FlowPage::all`].
    fn index(&self) -> usize {
        Self::all().iter().position(|p| p == self).unwrap_or(0)
    }
}

/// A [`Pager`] whose index maps onto a [`FlowPage`] enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagedFlow<P: FlowPage> {
    pager: Pager,
    _page: PhantomData<P>,
}

impl<P: FlowPage> Default for PagedFlow<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FlowPage> PagedFlow<P> {
    /// Create a flow positioned on its first page.
    pub fn new() -> Self {
        Self {
            pager: Pager::new(P::all().len()),
            _page: PhantomData,
        }
    }

    /// The current page.
    pub fn page(&self) -> P {
        P::all()[self.pager.index()]
    }

    /// Underlying index state.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Mutable index state.
    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    /// Current page index.
    pub fn index(&self) -> usize {
        self.pager.index()
    }

    /// Jump straight to a page index (clamped).
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.pager.jump_to(index)
    }

    /// Apply a swipe direction.
    pub fn apply_swipe(&mut self, direction: SwipeDirection) -> bool {
        self.pager.apply_swipe(direction)
    }

    /// Return to the first page.
    pub fn reset(&mut self) {
        self.pager.reset();
    }
}
