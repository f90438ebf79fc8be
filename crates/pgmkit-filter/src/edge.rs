//! Edge detection kernels
//!
//! Built-in 3x3 Sobel weight sets. These feed the weighted-gradient
//! reducer; the raw response must be normalized before encoding.

/// Edge detection orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOrientation {
    /// Respond to horizontal edges (vertical gradient)
    Horizontal,
    /// Respond to vertical edges (horizontal gradient)
    Vertical,
}

/// Sobel kernel size (fixed).
pub const SOBEL_SIZE: u32 = 3;

/// Sobel weights responding to vertical edges.
const SOBEL_VERTICAL: [i32; 9] = [-1, 0, 1, -2, 0, 2, -1, 0, 1];

/// Sobel weights responding to horizontal edges.
const SOBEL_HORIZONTAL: [i32; 9] = [-1, -2, -1, 0, 0, 0, 1, 2, 1];

/// Get the 3x3 Sobel weights for an orientation, row-major.
pub fn sobel_weights(orientation: EdgeOrientation) -> Vec<i32> {
    match orientation {
        EdgeOrientation::Vertical => SOBEL_VERTICAL.to_vec(),
        EdgeOrientation::Horizontal => SOBEL_HORIZONTAL.to_vec(),
    }
}
