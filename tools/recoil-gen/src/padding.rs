//! Right-padding of sample sequences to a common stride

/// Extend `samples` with `fill` until it is `target_len` long.
///
/// Sequences already at or past `target_len` are returned unchanged; this
/// never truncates. The result length is `max(samples.len(), target_len)`.
pub fn extend<T: Clone>(samples: &[T], target_len: usize, fill: T) -> Vec<T> {
    let mut padded = Vec::with_capacity(samples.len().max(target_len));
    padded.extend_from_slice(samples);
    if padded.len() < target_len {
        padded.resize(target_len, fill);
    }
    padded
}
