use std::fmt::Debug;
use num_traits::{Bounded, CheckedAdd, Zero};


/// Edge cost usable by the shortest path solver
/// Sums that do not fit the type are reported instead of wrapping or panicking
pub trait Weight: Zero + Bounded + Copy + PartialOrd + Debug {
    /// `self + other`, None on overflow
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

// Floats saturate to infinity on their own
macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_weight!(f32, f64);
