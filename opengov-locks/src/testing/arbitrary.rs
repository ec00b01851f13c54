use crate::{conviction::Conviction, value::Value};
use quickcheck::{Arbitrary, Gen};
use strum::IntoEnumIterator;

impl Arbitrary for Value {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        Value(u128::from(u64::arbitrary(g)))
    }
}

impl Arbitrary for Conviction {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let index = usize::arbitrary(g) % Conviction::iter().count();
        Conviction::iter().nth(index).unwrap_or_default()
    }
}
