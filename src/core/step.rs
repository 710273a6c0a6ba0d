//! # Step
//!
//! The three stages applied to the accumulator for every element.
//!
//! Each stage is a pure function of its inputs:
//! - `adjust` - scale the element by its sign and parity, fold it in
//! - `rescale` - flip, halve, double or bump the accumulator against the threshold
//! - `correct` - nudge the accumulator based on the index alone
//!
//! All arithmetic wraps at 32 bits.

/// Parity of a value under truncating remainder
///
/// `-3 % 2 == -1` in Rust, so negatives are odd exactly when the
/// remainder is non-zero, never by comparing against `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classify a value
    ///
    /// # Example
    /// ```
    /// use accufold::core::step::Parity;
    /// assert_eq!(Parity::of(-3), Parity::Odd);
    /// assert_eq!(Parity::of(-4), Parity::Even);
    /// ```
    pub fn of(value: i32) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Multiplier applied to an element of this parity
    pub fn factor(self) -> i32 {
        match self {
            Parity::Even => 2,
            Parity::Odd => 3,
        }
    }
}

/// Which positional correction fired for an index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// Index 0: +10
    First,
    /// Index 20: -1
    Twentieth,
    /// Index `size - 1`: -5
    Last,
    /// No correction
    Interior,
}

impl Position {
    /// Index with the fixed -1 correction
    pub const TWENTIETH: usize = 20;

    /// Classify an index
    ///
    /// The checks form an exclusive chain: `First` wins over `Last` when
    /// `size == 1`, `Twentieth` wins over `Last` when `size == 21`.
    pub fn of(index: usize, size: usize) -> Self {
        if index == 0 {
            Position::First
        } else if index == Self::TWENTIETH {
            Position::Twentieth
        } else if index + 1 == size {
            Position::Last
        } else {
            Position::Interior
        }
    }

    /// Amount added to the accumulator
    pub fn delta(self) -> i32 {
        match self {
            Position::First => 10,
            Position::Twentieth => -1,
            Position::Last => -5,
            Position::Interior => 0,
        }
    }
}

/// Stage 1: fold the element into the accumulator
///
/// Non-negative elements are added, negative ones subtracted, each after
/// multiplying by 2 (even) or 3 (odd).
pub fn adjust(acc: i32, element: i32) -> i32 {
    let scaled = element.wrapping_mul(Parity::of(element).factor());
    if element >= 0 {
        acc.wrapping_add(scaled)
    } else {
        acc.wrapping_sub(scaled)
    }
}

/// Stage 2: rescale the accumulator against the threshold
pub fn rescale(acc: i32, sum_value: i32, threshold: i32) -> i32 {
    match (acc < threshold, Parity::of(acc)) {
        (true, Parity::Even) => acc.wrapping_neg(),
        // truncates toward zero; cannot overflow for a divisor of 2
        (true, Parity::Odd) => acc / 2,
        (false, Parity::Even) => acc.wrapping_mul(2),
        (false, Parity::Odd) => acc.wrapping_add(sum_value),
    }
}

/// Stage 3: apply the positional correction for `index`
pub fn correct(acc: i32, index: usize, size: usize) -> i32 {
    acc.wrapping_add(Position::of(index, size).delta())
}
