use vision_shared::{
    reverse_interleave_x, reverse_interleave_y, RenderRequest, RequestIdGenerator,
    ResizeRequest, Vec2,
};

/// Largest division level a [`Schedule`] builds: `256 x 256` phases, one
/// request each. Higher levels are clamped to it.
pub const MAX_DIVISION_LEVEL: usize = 8;

/// Describes how the `i`-th delivered tile is drawn in the current preview:
/// tile pixel `(x, y)` covers preview cell `(offset + x * stride)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PreviewOperation {
    pub pixel_offset: Vec2,
    pub pixel_stride: Vec2,
}

/// The order in which the tiles of one frame are requested.
///
/// A frame divided at level `L` is split into `2^L x 2^L` phases. Each phase
/// is one strided sub-image of the frame and gets exactly one
/// [`RenderRequest`]. Phases are ordered so that the first `k^2` requests,
/// for every power of two `k <= 2^L`, sample the frame on an even `k x k`
/// grid. Any prefix of delivered tiles can therefore be shown as a
/// low-resolution preview.
///
/// The request list is computed once at construction. The only mutable
/// state is a forward-only cursor.
#[derive(Clone, Debug)]
pub struct Schedule {
    frame_width: usize,
    frame_height: usize,
    division_level: usize,
    padded_width: usize,
    padded_height: usize,
    requests: Vec<RenderRequest>,
    next_index: usize,
}

impl Schedule {
    /// Builds a schedule whose request ids start at zero.
    pub fn new(width: usize, height: usize, division_level: usize) -> Self {
        Self::with_id_generator(
            width,
            height,
            division_level,
            &mut RequestIdGenerator::new(),
        )
    }

    /// Builds a schedule drawing one id per request from `ids`, in emission
    /// order.
    pub fn with_id_generator(
        width: usize,
        height: usize,
        division_level: usize,
        ids: &mut RequestIdGenerator,
    ) -> Self {
        let division_level = division_level.min(MAX_DIVISION_LEVEL);
        let partitions = 1usize << division_level;

        let padded_width = round_up(width, partitions);
        let padded_height = round_up(height, partitions);

        // Edge tiles of a divided frame are one pixel short on each axis.
        let edge = usize::from(partitions > 1);
        let pixel_count = Vec2::new(
            (padded_width / partitions).saturating_sub(edge),
            (padded_height / partitions).saturating_sub(edge),
        );

        let requests = phase_order(division_level)
            .into_iter()
            .map(|phase| RenderRequest {
                id: ids.generate(),
                pixel_count,
                pixel_offset: morton_to_vec2(phase),
                pixel_stride: Vec2::splat(partitions),
                frame_size: Vec2::new(width, height),
            })
            .collect();

        Self {
            frame_width: width,
            frame_height: height,
            division_level,
            padded_width,
            padded_height,
            requests,
            next_index: 0,
        }
    }

    pub fn frame_width(&self) -> usize {
        self.frame_width
    }

    pub fn frame_height(&self) -> usize {
        self.frame_height
    }

    pub fn division_level(&self) -> usize {
        self.division_level
    }

    /// Number of phases along one axis, `2^division_level`.
    pub fn partitions_per_axis(&self) -> usize {
        1 << self.division_level
    }

    pub fn partition_count(&self) -> usize {
        let partitions = self.partitions_per_axis();
        partitions * partitions
    }

    /// Frame width rounded up to a multiple of the partition stride.
    pub fn padded_width(&self) -> usize {
        self.padded_width
    }

    /// Frame height rounded up to a multiple of the partition stride.
    pub fn padded_height(&self) -> usize {
        self.padded_height
    }

    pub fn partition_width(&self) -> usize {
        self.padded_width / self.partitions_per_axis()
    }

    pub fn partition_height(&self) -> usize {
        self.padded_height / self.partitions_per_axis()
    }

    pub fn resize_request(&self) -> ResizeRequest {
        ResizeRequest {
            width: self.frame_width,
            height: self.frame_height,
            padded_width: self.padded_width,
            padded_height: self.padded_height,
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    pub fn remaining_requests(&self) -> usize {
        self.requests.len().saturating_sub(self.next_index)
    }

    pub fn consumed_requests(&self) -> usize {
        self.next_index
    }

    /// The request at `index` in emission order, or the invalid sentinel.
    pub fn request(&self, index: usize) -> RenderRequest {
        self.requests
            .get(index)
            .copied()
            .unwrap_or_else(RenderRequest::invalid)
    }

    pub fn requests(&self) -> &[RenderRequest] {
        &self.requests
    }

    /// The request at the cursor, or the invalid sentinel once every request
    /// has been consumed. Does not move the cursor.
    pub fn current_request(&self) -> RenderRequest {
        self.request(self.next_index)
    }

    /// Moves the cursor past the current request. Does nothing at the end.
    pub fn advance(&mut self) {
        if self.next_index < self.requests.len() {
            self.next_index += 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_requests() == 0
    }

    pub fn has_preview(&self) -> bool {
        self.next_index > 0
    }

    /// `floor(log4(consumed))`, the level of the largest complete grid
    /// contained in the consumed requests. Zero before anything is consumed.
    pub fn preview_level(&self) -> usize {
        let mut consumed = self.next_index;
        let mut level = 0;
        while consumed >= 4 {
            consumed /= 4;
            level += 1;
        }
        level
    }

    /// Side of the preview grid, `2^preview_level`.
    pub fn preview_divisions(&self) -> usize {
        1 << self.preview_level()
    }

    /// One operation per tile of the current preview, in delivery order.
    /// Empty until the first request is consumed.
    pub fn preview_operations(&self) -> Vec<PreviewOperation> {
        if !self.has_preview() {
            return Vec::new();
        }

        let level = self.preview_level();
        let divisions = 1usize << level;

        phase_order(level)
            .into_iter()
            .map(|phase| PreviewOperation {
                pixel_offset: morton_to_vec2(phase),
                pixel_stride: Vec2::splat(divisions),
            })
            .collect()
    }
}

fn round_up(value: usize, multiple: usize) -> usize {
    value.div_ceil(multiple).saturating_mul(multiple)
}

fn morton_to_vec2(index: usize) -> Vec2 {
    let code = index as u64;
    Vec2::new(
        reverse_interleave_x(code) as usize,
        reverse_interleave_y(code) as usize,
    )
}

/// Morton indices of the `4^level` phases, coarse grids first.
///
/// Round `r` visits every index that is a multiple of `4^(level - r)`, which
/// are exactly the phases of the `2^r x 2^r` grid. Indices already emitted by
/// an earlier round are skipped.
fn phase_order(level: usize) -> Vec<usize> {
    let count = 1usize << (2 * level);
    let mut used = vec![false; count];
    let mut order = Vec::with_capacity(count);

    for round in 0..=level {
        let stride = 1usize << (2 * (level - round));
        for index in (0..count).step_by(stride) {
            if used[index] {
                continue;
            }
            used[index] = true;
            order.push(index);
        }
    }

    order
}
