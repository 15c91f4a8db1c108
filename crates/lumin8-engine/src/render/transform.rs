//! CPU-side counterparts of the math in `shaders/grid.wgsl`.
//!
//! The shader and these functions must stay in lockstep; keeping the mapping
//! here lets the projection behavior be verified without a GPU.

/// Horizontal extent of the tile grid, in world units.
pub const WORLD_WIDTH: f32 = 64.0;

/// Vertical extent of the tile grid, in world units.
pub const WORLD_HEIGHT: f32 = 32.0;

/// Offsets a unit-quad corner by a tile's grid origin.
///
/// Every corner of an instance shifts by the same origin, so tiles stay
/// axis-aligned 1×1 squares in world space.
#[inline]
pub fn world_position(corner: [f32; 2], origin: [f32; 2]) -> [f32; 2] {
    [corner[0] + origin[0], corner[1] + origin[1]]
}

/// Maps world coordinates onto normalized device coordinates.
///
/// The grid spans the full clip volume: world `(0, 0)` lands on NDC
/// `(-1, -1)` (bottom-left) and world `(64, 32)` on `(1, 1)` (top-right).
/// The mapping is affine, so it extends past the grid without clamping.
#[inline]
pub fn fixed_extent_ndc(world: [f32; 2]) -> [f32; 2] {
    [
        world[0] / WORLD_WIDTH * 2.0 - 1.0,
        world[1] / WORLD_HEIGHT * 2.0 - 1.0,
    ]
}

/// Lifts an NDC point to clip space.
///
/// The grid is flat: depth is 0 and w is 1, so no perspective divide occurs.
#[inline]
pub fn clip_position(ndc: [f32; 2]) -> [f32; 4] {
    [ndc[0], ndc[1], 0.0, 1.0]
}

/// Resolves a tile's illumination to an output color.
///
/// Lit tiles (1.0) are white, unlit tiles (0.0) black; alpha is always 1.
#[inline]
pub fn shade(lit: f32) -> [f32; 4] {
    [lit, lit, lit, 1.0]
}

/// Column-major orthographic projection over the grid extent.
///
/// Multiplying `[x, y, 0, 1]` by this matrix produces exactly
/// [`fixed_extent_ndc`]: both divide by a power-of-two extent, so the two
/// paths agree bit-for-bit.
pub fn ortho_projection() -> [[f32; 4]; 4] {
    [
        [2.0 / WORLD_WIDTH, 0.0, 0.0, 0.0],
        [0.0, 2.0 / WORLD_HEIGHT, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [-1.0, -1.0, 0.0, 1.0],
    ]
}

/// Multiplies a column-major matrix by a column vector.
pub fn apply(matrix: &[[f32; 4]; 4], vector: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0; 4];
    for (column, &component) in matrix.iter().zip(&vector) {
        for (acc, &cell) in out.iter_mut().zip(column) {
            *acc += cell * component;
        }
    }
    out
}
