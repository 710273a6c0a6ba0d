//! # Fold
//!
//! Single pass over the sequence, carrying one accumulator.
//!
//! Each index runs `adjust`, then `rescale`, then `correct`, in strictly
//! increasing order. The result depends on element order.
//!
//! `size` is checked against the slice length before anything is read.

use super::error::{FoldError, FoldResult};
use super::params::FoldParams;
use super::step::{self, Parity, Position};

/// Fold the first `size` elements of `data` into one integer
///
/// Returns `init_value` unchanged when `size == 0`.
///
/// # Example
/// ```
/// use accufold::fold;
/// assert_eq!(fold(&[4], 1, 0, 0, 100), Ok(2));
/// assert_eq!(fold(&[], 0, 17, 0, 0), Ok(17));
/// ```
pub fn fold(
    data: &[i32],
    size: usize,
    init_value: i32,
    sum_value: i32,
    threshold: i32,
) -> FoldResult<i32> {
    let elements = prefix(data, size)?;

    let acc = elements
        .iter()
        .enumerate()
        .fold(init_value, |acc, (index, &element)| {
            let acc = step::adjust(acc, element);
            let acc = step::rescale(acc, sum_value, threshold);
            step::correct(acc, index, size)
        });

    Ok(acc)
}

/// Fold with the scalars bundled in [`FoldParams`]
pub fn fold_with(data: &[i32], size: usize, params: &FoldParams) -> FoldResult<i32> {
    fold(
        data,
        size,
        params.init_value,
        params.sum_value,
        params.threshold,
    )
}

/// Fold the whole slice
pub fn fold_all(data: &[i32], params: &FoldParams) -> i32 {
    // size == len can never be out of bounds
    fold_with(data, data.len(), params).unwrap_or(params.init_value)
}

/// Accumulator state recorded for one index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepRecord {
    pub index: usize,
    pub element: i32,
    /// Parity of the element in the adjust stage
    pub element_parity: Parity,
    pub after_adjust: i32,
    /// Parity of the accumulator in the rescale stage
    pub acc_parity: Parity,
    /// Whether the accumulator was below the threshold
    pub below_threshold: bool,
    pub after_rescale: i32,
    pub position: Position,
    pub after_position: i32,
}

/// Run the fold and record every intermediate accumulator
///
/// The last record's `after_position` equals the result of [`fold_with`].
/// Empty input yields an empty trace.
pub fn trace(data: &[i32], size: usize, params: &FoldParams) -> FoldResult<Vec<StepRecord>> {
    let elements = prefix(data, size)?;

    let mut records = Vec::with_capacity(size);
    let mut acc = params.init_value;

    for (index, &element) in elements.iter().enumerate() {
        let after_adjust = step::adjust(acc, element);
        let after_rescale = step::rescale(after_adjust, params.sum_value, params.threshold);
        let position = Position::of(index, size);
        let after_position = step::correct(after_rescale, index, size);

        records.push(StepRecord {
            index,
            element,
            element_parity: Parity::of(element),
            after_adjust,
            acc_parity: Parity::of(after_adjust),
            below_threshold: after_adjust < params.threshold,
            after_rescale,
            position,
            after_position,
        });

        acc = after_position;
    }

    Ok(records)
}

fn prefix(data: &[i32], size: usize) -> FoldResult<&[i32]> {
    data.get(..size).ok_or(FoldError::SizeOutOfBounds {
        size,
        len: data.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_returns_init() {
        assert_eq!(fold(&[], 0, 0, 0, 0), Ok(0));
        assert_eq!(fold(&[], 0, -123, 9, 9), Ok(-123));
        assert_eq!(fold(&[1, 2, 3], 0, 55, 1, 1), Ok(55));
    }

    #[test]
    fn test_single_positive_even_below_threshold() {
        // 0 + 4*2 = 8; 8 < 100 and even -> -8; index 0 -> +10
        assert_eq!(fold(&[4], 1, 0, 0, 100), Ok(2));
    }

    #[test]
    fn test_single_negative_odd() {
        // 0 - (-3*3) = 9; 9 < 100 and odd -> 4; index 0 -> +10
        assert_eq!(fold(&[-3], 1, 0, 0, 100), Ok(14));
    }

    #[test]
    fn test_size_one_only_first_correction() {
        // +10 only, not +10 then -5
        assert_eq!(fold(&[0], 1, 0, 0, 1), Ok(10));
    }

    #[test]
    fn test_size_twenty_one_only_twentieth_correction() {
        let data = [0; 21];
        // 10 after index 0, doubled on each of the 20 remaining steps, -1 at index 20
        assert_eq!(fold(&data, 21, 0, 0, 1), Ok(10 * (1 << 20) - 1));
    }

    #[test]
    fn test_last_correction() {
        // [1, 2]: 3 -> 3 -> 13; 17 -> 17 -> 12
        assert_eq!(fold(&[1, 2], 2, 0, 0, 0), Ok(12));
    }

    #[test]
    fn test_order_dependent() {
        let forward = fold(&[1, 2], 2, 0, 0, 0).unwrap();
        let reversed = fold(&[2, 1], 2, 0, 0, 0).unwrap();
        assert_eq!(reversed, 16);
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_sum_value_applied_for_odd_above_threshold() {
        // 0 + 1*3 = 3; 3 >= 0 and odd -> 3 + 100; +10
        assert_eq!(fold(&[1], 1, 0, 100, 0), Ok(113));
    }

    #[test]
    fn test_prefix_only() {
        assert_eq!(fold(&[4, 99, 99], 1, 0, 0, 100), Ok(2));
    }

    #[test]
    fn test_size_out_of_bounds() {
        assert_eq!(
            fold(&[1, 2, 3], 4, 0, 0, 0),
            Err(FoldError::SizeOutOfBounds { size: 4, len: 3 })
        );
        assert_eq!(
            fold(&[], 1, 0, 0, 0),
            Err(FoldError::SizeOutOfBounds { size: 1, len: 0 })
        );
    }

    #[test]
    fn test_wrapping_does_not_panic() {
        let expected = i32::MAX.wrapping_mul(3).wrapping_add(10);
        assert_eq!(fold(&[i32::MAX], 1, 0, 0, i32::MIN), Ok(expected));
        assert!(fold(&[i32::MIN, i32::MAX, i32::MIN], 3, i32::MAX, i32::MAX, 0).is_ok());
    }

    #[test]
    fn test_fold_with_and_fold_all_agree() {
        let data = [1, 2, 3, 4, 5];
        let params = FoldParams::new(3, -2, 10);
        let direct = fold(&data, 5, 3, -2, 10).unwrap();
        assert_eq!(fold_with(&data, 5, &params), Ok(direct));
        assert_eq!(fold_all(&data, &params), direct);
    }

    #[test]
    fn test_trace_matches_fold() {
        let data = [7, -2, 0, 13, -9, 4];
        let params = FoldParams::new(-5, 3, 12);
        let records = trace(&data, data.len(), &params).unwrap();

        assert_eq!(records.len(), data.len());
        assert_eq!(
            records.last().map(|r| r.after_position),
            fold_with(&data, data.len(), &params).ok()
        );
        assert_eq!(records[0].position, Position::First);
        assert_eq!(records[5].position, Position::Last);
        assert_eq!(records[1].element_parity, Parity::Even);
    }

    #[test]
    fn test_trace_records_stages() {
        let records = trace(&[4], 1, &FoldParams::new(0, 0, 100)).unwrap();
        let record = records[0];
        assert_eq!(record.after_adjust, 8);
        assert!(record.below_threshold);
        assert_eq!(record.acc_parity, Parity::Even);
        assert_eq!(record.after_rescale, -8);
        assert_eq!(record.after_position, 2);
    }

    #[test]
    fn test_trace_empty_and_out_of_bounds() {
        let params = FoldParams::new(1, 1, 1);
        assert_eq!(trace(&[], 0, &params), Ok(vec![]));
        assert!(trace(&[1], 2, &params).is_err());
    }
}
