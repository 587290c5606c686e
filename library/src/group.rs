// abelian group, the weight type of DisjointSet
pub trait Group: Clone + Eq {
    fn id() -> Self;
    fn add_assign(&mut self, b: &Self);
    fn sub_assign(&mut self, b: &Self);

    fn neg(&self) -> Self {
        let mut res = Self::id();
        res.sub_assign(self);
        res
    }
}

// Integers form Z/2^k under wrapping arithmetic. Overflow never panics,
// and every potential stays consistent modulo 2^k.
macro_rules! impl_wrapping {
    ($($t:ty)+) => {
        $(
            impl Group for $t {
                fn id() -> Self {
                    0
                }
                fn add_assign(&mut self, b: &Self) {
                    *self = self.wrapping_add(*b);
                }
                fn sub_assign(&mut self, b: &Self) {
                    *self = self.wrapping_sub(*b);
                }
            }
        )+
    };
}
impl_wrapping!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

// Z/2Z, for parity constraints
impl Group for bool {
    fn id() -> Self {
        false
    }
    fn add_assign(&mut self, b: &Self) {
        *self ^= b;
    }
    fn sub_assign(&mut self, b: &Self) {
        *self ^= b;
    }
}

impl Group for () {
    fn id() -> Self {}
    fn add_assign(&mut self, _: &Self) {}
    fn sub_assign(&mut self, _: &Self) {}
}

// direct product, componentwise
macro_rules! impl_tuple {
    ($($A:ident $i:tt),+) => {
        impl<$($A: Group,)+> Group for ($($A,)+) {
            fn id() -> Self {
                ($($A::id(),)+)
            }
            fn add_assign(&mut self, b: &Self) {
                $(self.$i.add_assign(&b.$i);)+
            }
            fn sub_assign(&mut self, b: &Self) {
                $(self.$i.sub_assign(&b.$i);)+
            }
        }
    };
}

impl_tuple!(A0 0);
impl_tuple!(A0 0, A1 1);
impl_tuple!(A0 0, A1 1, A2 2);
impl_tuple!(A0 0, A1 1, A2 2, A3 3);

#[cfg(test)]
mod tests {
    use super::Group;
    use rstest::rstest;

    #[rstest]
    #[case(5i64, -5i64)]
    #[case(0i64, 0i64)]
    #[case(i64::MIN, i64::MIN)]
    fn neg_signed(#[case] x: i64, #[case] expected: i64) {
        assert_eq!(x.neg(), expected);
    }

    #[test]
    fn unsigned_wraps() {
        let mut x = 3u32;
        x.sub_assign(&5);
        assert_eq!(x, u32::MAX - 1);
        x.add_assign(&5);
        assert_eq!(x, 3);
        assert_eq!(1u8.neg(), 255);
    }

    #[test]
    fn parity() {
        let mut x = true;
        x.add_assign(&true);
        assert!(!x);
        assert_eq!(true.neg(), true);
    }

    #[test]
    fn product() {
        let mut x = (3i32, true);
        x.add_assign(&(4, true));
        assert_eq!(x, (7, false));
        x.sub_assign(&(10, true));
        assert_eq!(x, (-3, true));
        assert_eq!(<(i32, bool, u8)>::id(), (0, false, 0));
        assert_eq!((2i32, 1u8).neg(), (-2, 255));
    }
}
