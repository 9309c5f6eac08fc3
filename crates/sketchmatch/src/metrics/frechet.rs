use crate::curve::{distance, Point};

/// Discrete Fréchet (coupling) distance between two ordered point sequences.
///
/// Row-major fill of the coupling table
/// `ca[i][j] = max(d(a_i, b_j), min(ca[i-1][j], ca[i-1][j-1], ca[i][j-1]))`
/// with the first row/column carrying the running max. Only the previous row
/// is kept, so memory is O(m) while time stays O(n·m). `+∞` if either
/// sequence is empty.
pub fn frechet_distance(a: &[Point], b: &[Point]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }
    let m = b.len();
    let mut prev = vec![0.0f64; m];
    let mut row = vec![0.0f64; m];
    for (i, pa) in a.iter().enumerate() {
        for (j, pb) in b.iter().enumerate() {
            let d = distance(pa, pb);
            row[j] = match (i, j) {
                (0, 0) => d,
                (0, _) => row[j - 1].max(d),
                (_, 0) => prev[0].max(d),
                _ => prev[j].min(prev[j - 1]).min(row[j - 1]).max(d),
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[m - 1]
}
