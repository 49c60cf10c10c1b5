use crate::Number;

use core::ops::RangeInclusive;
use num_bigint::BigInt;
use proptest::arbitrary::{Arbitrary, StrategyFor};
use proptest::prelude::*;
use proptest::strategy::Map;

impl Arbitrary for Number {
    type Parameters = ();
    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        // An i64 magnitude keeps generated values small enough that pairwise
        // operations (multiply, raise) stay fast, while the scale range
        // covers both whole numbers and several digits of fraction.
        (any::<i64>(), 0..=20).prop_map(|(digits, scale)| Number::from_bigint(BigInt::from(digits), scale as u32))
    }

    type Strategy = Map<(StrategyFor<i64>, RangeInclusive<u32>), fn((i64, u32)) -> Self>;
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::proptest;

    proptest! {
        #[test]
        fn generated_numbers_compare_equal_to_themselves(n in any::<Number>()) {
            prop_assert_eq!(&n, &n);
        }

        #[test]
        fn generated_numbers_round_trip_through_display(n in any::<Number>()) {
            let text = n.to_string();
            let reparsed = Number::parse(&text, n.scale());
            prop_assert_eq!(reparsed, n);
        }
    }
}
