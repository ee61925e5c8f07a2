/// Step `indices` to the next k-combination of `0..n` in lexicographic order.
///
/// Start from `[0, 1, .., k-1]`. Returns `false`, leaving `indices`
/// untouched, once the last combination has been reached.
pub fn advance_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    if k > n {
        return false;
    }
    let mut i = k;
    while i > 0 {
        i -= 1;
        if indices[i] < n - k + i {
            indices[i] += 1;
            for j in (i + 1)..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}
