pub const MAX_ITERATIONS: u32 = 1000;
pub const MIN_ITERATIONS: u32 = 100;

/// Derives the per-frame iteration budget from the current zoom.
///
/// Deeper zoom magnifies the boundary, so fewer pixels need near-boundary
/// precision; dividing the ceiling by `1 + log2(zoom)` keeps worst-case
/// per-pixel cost roughly flat as magnification grows. This is a tuned
/// heuristic, not an error bound. The floor of 100 keeps visible structure
/// from collapsing; the ceiling of 1000 also covers zoom levels below 1,
/// where the raw formula blows up.
#[must_use]
pub fn adjusted_iterations(zoom: f64) -> u32 {
    let scaled = f64::from(MAX_ITERATIONS) / (1.0 + zoom.log2());

    if !scaled.is_finite() {
        return MAX_ITERATIONS;
    }

    let floored = scaled.floor() as i64;
    floored.clamp(i64::from(MIN_ITERATIONS), i64::from(MAX_ITERATIONS)) as u32
}
