/// A [`Span`] represents a contiguous byte region of the input. Parse errors carry one so
/// callers can point at the offending text. An invariant to be maintained is that
/// `lo <= hi`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub lo: usize,
    pub hi: usize,
}

impl Span {
    /// Construct a new span. Will panic if `lo > hi`. Prefer this constructor to construct a new
    /// [`Span`] over using direct struct initialization.
    pub const fn new(lo: usize, hi: usize) -> Self {
        assert!(lo <= hi, "`lo` must not be larger than `hi`");
        Span { lo, hi }
    }

    /// An empty span sitting at `pos`.
    pub const fn empty(pos: usize) -> Self {
        Span { lo: pos, hi: pos }
    }

    pub const fn len(&self) -> usize {
        self.hi - self.lo
    }

    pub const fn is_empty(&self) -> bool {
        self.lo == self.hi
    }

    pub fn into_range(self) -> std::ops::Range<usize> {
        self.lo..self.hi
    }
}
