//! Left fold over any [`Traverse`] container.

use serde::{Deserialize, Serialize};

use crate::collection::{Traverse, Truthy};

/// How the running accumulator is treated between steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReduceMode {
    /// Pass the accumulator through untouched.
    #[default]
    Corrected,
    /// Reproduce the legacy defect: a falsy or missing accumulator is
    /// replaced with [`Truthy::falsy_reset`] (numeric zero) at the start of
    /// every step.
    Faithful,
}

/// Fold `container` with `combine`, starting from `seed`.
///
/// A missing seed starts from `A::default()` on the first step. An empty
/// container returns `seed` untouched (`None` when there is no seed).
///
/// ```
/// use collkit::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3][..], |acc, x| acc + x, Some(0)), Some(6));
/// assert_eq!(reduce(&[] as &[i32], |acc, x| acc + x, Some(5)), Some(5));
/// assert_eq!(reduce(&[] as &[i32], |acc: i32, x| acc + x, None), None);
/// ```
pub fn reduce<C, A, F>(container: &C, combine: F, seed: Option<A>) -> Option<A>
where
    C: Traverse + ?Sized,
    A: Default + Truthy,
    F: FnMut(A, &C::Item) -> A,
{
    reduce_with(container, combine, seed, ReduceMode::Corrected)
}

/// [`reduce`] with an explicit [`ReduceMode`].
pub fn reduce_with<C, A, F>(
    container: &C,
    mut combine: F,
    seed: Option<A>,
    mode: ReduceMode,
) -> Option<A>
where
    C: Traverse + ?Sized,
    A: Default + Truthy,
    F: FnMut(A, &C::Item) -> A,
{
    let mut acc = seed;
    container.each(|value, _, _| {
        let current = match (acc.take(), mode) {
            (Some(a), ReduceMode::Faithful) if a.is_falsy() => A::falsy_reset(),
            (Some(a), _) => a,
            (None, ReduceMode::Faithful) => A::falsy_reset(),
            (None, ReduceMode::Corrected) => A::default(),
        };
        acc = Some(combine(current, value));
    });
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(acc: i64, x: &i64) -> i64 {
        acc + x
    }

    #[test]
    fn test_sum_with_and_without_seed() {
        let items = vec![1i64, 2, 3];
        assert_eq!(reduce(&items, add, Some(0)), Some(6));
        assert_eq!(reduce(&items, add, None), Some(6));
    }

    #[test]
    fn test_empty_container() {
        let empty: Vec<i64> = Vec::new();
        assert_eq!(reduce(&empty, add, Some(5)), Some(5));
        assert_eq!(reduce(&empty, add, None), None);
        assert_eq!(reduce_with(&empty, add, Some(0), ReduceMode::Faithful), Some(0));
    }

    #[test]
    fn test_zero_in_middle_matches_in_both_modes() {
        let items = vec![0i64, 1, 2];
        assert_eq!(reduce_with(&items, add, Some(10), ReduceMode::Corrected), Some(13));
        assert_eq!(reduce_with(&items, add, Some(10), ReduceMode::Faithful), Some(13));
    }

    #[test]
    fn test_faithful_resets_nan_accumulator() {
        let items = vec![1.0f64, 2.0];
        let sum = |acc: f64, x: &f64| acc + x;

        let faithful = reduce_with(&items, sum, Some(f64::NAN), ReduceMode::Faithful);
        assert_eq!(faithful, Some(3.0));

        let corrected = reduce_with(&items, sum, Some(f64::NAN), ReduceMode::Corrected);
        assert!(corrected.unwrap().is_nan());
    }

    #[test]
    fn test_faithful_json_resets_to_numeric_zero() {
        use serde_json::{json, Value};

        let items = vec![json!(1), json!(2)];
        let add = |acc: Value, x: &Value| match (acc.as_i64(), x.as_i64()) {
            (Some(a), Some(b)) => json!(a + b),
            _ => json!("NaN"),
        };

        assert_eq!(reduce_with(&items, add, Some(json!(0)), ReduceMode::Faithful), Some(json!(3)));
        assert_eq!(reduce_with(&items, add, Some(json!(null)), ReduceMode::Faithful), Some(json!(3)));
        assert_eq!(reduce_with(&items, add, None, ReduceMode::Faithful), Some(json!(3)));
        assert_eq!(reduce_with(&items, add, None, ReduceMode::Corrected), Some(json!("NaN")));
    }
}
