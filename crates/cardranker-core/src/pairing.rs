/// Pick two distinct entries uniformly at random.
/// Returns `None` if the slice holds fewer than two entries.
pub fn sample_pair<T>(items: &[T]) -> Option<(&T, &T)> {
    if items.len() < 2 {
        return None;
    }
    use rand::RngExt;
    let mut rng = rand::rng();
    let first = rng.random_range(0..items.len());
    // Draw from the remaining indices, skipping `first`.
    let mut second = rng.random_range(0..items.len() - 1);
    if second >= first {
        second += 1;
    }
    Some((&items[first], &items[second]))
}
