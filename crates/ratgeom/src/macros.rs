//! Operator forwarding: implement `&A op &B` once, get the owned variants.

/// Given `impl Op<&B> for &A`, derive `A op B`, `&A op B` and `A op &B`.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident for $lhs:ty, $rhs:ty => $out:ty) => {
        impl $imp<$rhs> for $lhs {
            type Output = $out;
            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                $imp::$method(&self, &rhs)
            }
        }
        impl<'a> $imp<$rhs> for &'a $lhs {
            type Output = $out;
            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                $imp::$method(self, &rhs)
            }
        }
        impl<'b> $imp<&'b $rhs> for $lhs {
            type Output = $out;
            #[inline]
            fn $method(self, rhs: &'b $rhs) -> $out {
                $imp::$method(&self, rhs)
            }
        }
    };
}

/// `x op= y` in terms of `&x op &y`, for owned and borrowed right-hand sides.
macro_rules! forward_assign {
    (impl $imp:ident, $method:ident, $op:ident::$opm:ident for $lhs:ty, $rhs:ty) => {
        impl $imp<$rhs> for $lhs {
            #[inline]
            fn $method(&mut self, rhs: $rhs) {
                *self = $op::$opm(&*self, &rhs);
            }
        }
        impl<'b> $imp<&'b $rhs> for $lhs {
            #[inline]
            fn $method(&mut self, rhs: &'b $rhs) {
                *self = $op::$opm(&*self, rhs);
            }
        }
    };
}
