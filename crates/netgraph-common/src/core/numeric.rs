// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Numeric bound for arc costs and capacities.
//!
//! Algorithms only need ordering, addition, subtraction and an "unbounded"
//! value. Floating point types use their native infinity; integer types use
//! `MAX` and saturate so that anything plus infinity stays infinite.

use num_traits::Zero;
use std::fmt::Debug;

pub trait Numeric: Copy + PartialOrd + Debug + Zero {
    /// The unbounded value (positive infinity).
    fn infinity() -> Self;

    fn is_infinite(self) -> bool;

    /// Addition that keeps infinity absorbing.
    fn plus(self, rhs: Self) -> Self;

    /// Subtraction; an infinite left operand stays infinite.
    fn minus(self, rhs: Self) -> Self;

    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn infinity() -> Self {
                <$t>::INFINITY
            }

            #[inline]
            fn is_infinite(self) -> bool {
                self == <$t>::INFINITY
            }

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn minus(self, rhs: Self) -> Self {
                self - rhs
            }
        }
    )*};
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn infinity() -> Self {
                <$t>::MAX
            }

            #[inline]
            fn is_infinite(self) -> bool {
                self == <$t>::MAX
            }

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                if self.is_infinite() || rhs.is_infinite() {
                    return Self::infinity();
                }
                self.saturating_add(rhs)
            }

            #[inline]
            fn minus(self, rhs: Self) -> Self {
                if self.is_infinite() {
                    return Self::infinity();
                }
                self.saturating_sub(rhs)
            }
        }
    )*};
}

impl_numeric_float!(f32, f64);
impl_numeric_int!(i32, i64, i128, isize, u32, u64, usize);
