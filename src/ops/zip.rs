/// Zip sequences by position.
///
/// One row is produced per index up to the longest input; slots past the end
/// of a shorter input are `None`. No inputs yields no rows.
///
/// ```
/// use collkit::zip;
///
/// let rows = zip(&[vec!["a", "b", "c"], vec!["1", "2"]]);
/// assert_eq!(rows[2], vec![Some("c"), None]);
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = sequences
        .iter()
        .map(|seq| seq.as_ref().len())
        .max()
        .unwrap_or(0);

    (0..longest)
        .map(|i| {
            sequences
                .iter()
                .map(|seq| seq.as_ref().get(i).cloned())
                .collect()
        })
        .collect()
}

/// Two-way zip over differently typed sequences.
pub fn zip_pair<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let longest = left.len().max(right.len());
    (0..longest)
        .map(|i| (left.get(i).cloned(), right.get(i).cloned()))
        .collect()
}
