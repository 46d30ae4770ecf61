use crate::source::Source;

/// Number of elements in the source.
///
/// Uses the source's known length when it has one; otherwise counts by
/// traversing. Counting *is* the traversal for a single-pass source — the
/// source is exhausted afterwards and a second call sees it empty.
///
/// # Examples
///
/// ```
/// use seqops::{restartable, single_pass, size};
///
/// let nums = restartable(vec![1, 2, 3]);
/// assert_eq!(size(&nums), 3);
/// assert_eq!(size(&nums), 3);
///
/// let mut words = ["a", "bb"].into_iter().filter(|w| !w.is_empty());
/// assert_eq!(size(single_pass(&mut words)), 2);
/// assert_eq!(size(single_pass(&mut words)), 0);
/// ```
pub fn size<S>(source: S) -> usize
where
    S: Source,
{
    match source.len_hint() {
        Some(len) => len,
        None => source.traverse().count(),
    }
}
