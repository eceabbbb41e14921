pub type RequestId = u64;

/// A pair of pixel quantities along the horizontal and vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: usize,
    pub y: usize,
}

impl Vec2 {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub const fn splat(value: usize) -> Self {
        Self { x: value, y: value }
    }

    /// Product of both components, saturating at `usize::MAX`.
    pub const fn area(self) -> usize {
        self.x.saturating_mul(self.y)
    }
}

impl From<(usize, usize)> for Vec2 {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Hands out request ids in increasing order.
///
/// One generator is owned by whoever builds schedules, so ids stay unique
/// across the frames of one connection without any global counter.
#[derive(Clone, Debug, Default)]
pub struct RequestIdGenerator {
    next: RequestId,
}

impl RequestIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting at `first` instead of zero.
    pub fn starting_at(first: RequestId) -> Self {
        Self { next: first }
    }

    pub fn generate(&mut self) -> RequestId {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }

    /// The id the next call to [`generate`](Self::generate) returns.
    pub fn peek(&self) -> RequestId {
        self.next
    }
}
