//! Pure operator semantics.
//!
//! `a` is the value pushed first, `b` the value pushed second (and popped
//! first). Integer arithmetic wraps; dividing by zero yields 0.

use arborate_validator::{BooleanBinOp, IntegerBinOp, IntegerCmp};

pub fn boolean(op: BooleanBinOp, a: bool, b: bool) -> bool {
    match op {
        BooleanBinOp::Equal => a == b,
        BooleanBinOp::NotEqual => a != b,
        BooleanBinOp::And => a && b,
        BooleanBinOp::Or => a || b,
    }
}

pub fn integer(op: IntegerBinOp, a: i64, b: i64) -> i64 {
    // Shift and rotate distances use the low 6 bits.
    let distance = (b & 63) as u32;

    match op {
        IntegerBinOp::Add => a.wrapping_add(b),
        IntegerBinOp::Subtract => a.wrapping_sub(b),
        IntegerBinOp::Multiply => a.wrapping_mul(b),
        IntegerBinOp::Divide if b == 0 => 0,
        IntegerBinOp::Divide => a.wrapping_div(b),
        IntegerBinOp::Modulus if b == 0 => 0,
        IntegerBinOp::Modulus => a.wrapping_rem(b),
        IntegerBinOp::ShiftLeft => a << distance,
        IntegerBinOp::ShiftRightArithmetic => a >> distance,
        IntegerBinOp::ShiftRightLogical => ((a as u64) >> distance) as i64,
        IntegerBinOp::RotateLeft => a.rotate_left(distance),
        IntegerBinOp::RotateRight => a.rotate_right(distance),
        IntegerBinOp::BitwiseAnd => a & b,
        IntegerBinOp::BitwiseOr => a | b,
        IntegerBinOp::BitwiseXor => a ^ b,
    }
}

pub fn compare(cmp: IntegerCmp, a: i64, b: i64) -> bool {
    match cmp {
        IntegerCmp::Equal => a == b,
        IntegerCmp::NotEqual => a != b,
        IntegerCmp::GreaterThan => a > b,
        IntegerCmp::LessThan => a < b,
        IntegerCmp::GreaterEqual => a >= b,
        IntegerCmp::LessEqual => a <= b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boolean_truth_tables() {
        let cases = [(false, false), (false, true), (true, false), (true, true)];
        for (a, b) in cases {
            assert_eq!(boolean(BooleanBinOp::Equal, a, b), a == b);
            assert_eq!(boolean(BooleanBinOp::NotEqual, a, b), a != b);
            assert_eq!(boolean(BooleanBinOp::And, a, b), a && b);
            assert_eq!(boolean(BooleanBinOp::Or, a, b), a || b);
        }
    }

    #[test]
    fn operand_order() {
        assert_eq!(integer(IntegerBinOp::Subtract, 5, 3), 2);
        assert_eq!(integer(IntegerBinOp::Subtract, 10, 18), -8);
        assert_eq!(integer(IntegerBinOp::Divide, 7, 2), 3);
        assert_eq!(integer(IntegerBinOp::Modulus, 7, 2), 1);
        assert!(compare(IntegerCmp::GreaterThan, 3, 2));
        assert!(!compare(IntegerCmp::LessThan, 3, 2));
    }

    #[test]
    fn truncating_division() {
        assert_eq!(integer(IntegerBinOp::Divide, -7, 2), -3);
        assert_eq!(integer(IntegerBinOp::Modulus, -7, 2), -1);
        assert_eq!(integer(IntegerBinOp::Divide, 7, -2), -3);
        assert_eq!(integer(IntegerBinOp::Modulus, 7, -2), 1);
    }

    #[test]
    fn divide_by_zero_is_zero() {
        for a in [0, 1, -1, i64::MAX, i64::MIN] {
            assert_eq!(integer(IntegerBinOp::Divide, a, 0), 0);
            assert_eq!(integer(IntegerBinOp::Modulus, a, 0), 0);
        }
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(integer(IntegerBinOp::Add, i64::MAX, 1), i64::MIN);
        assert_eq!(integer(IntegerBinOp::Subtract, i64::MIN, 1), i64::MAX);
        assert_eq!(integer(IntegerBinOp::Multiply, i64::MAX, 2), -2);
        assert_eq!(integer(IntegerBinOp::Divide, i64::MIN, -1), i64::MIN);
        assert_eq!(integer(IntegerBinOp::Modulus, i64::MIN, -1), 0);
    }

    #[test]
    fn shifts() {
        assert_eq!(integer(IntegerBinOp::ShiftLeft, 1, 4), 16);
        assert_eq!(integer(IntegerBinOp::ShiftLeft, 1, 64), 1);
        assert_eq!(integer(IntegerBinOp::ShiftLeft, 1, 65), 2);
        assert_eq!(integer(IntegerBinOp::ShiftRightArithmetic, -16, 2), -4);
        assert_eq!(integer(IntegerBinOp::ShiftRightLogical, -1, 60), 0xF);
        assert_eq!(integer(IntegerBinOp::ShiftRightLogical, 16, 2), 4);
    }

    #[test]
    fn rotates() {
        assert_eq!(integer(IntegerBinOp::RotateLeft, i64::MIN, 1), 1);
        assert_eq!(integer(IntegerBinOp::RotateRight, 1, 1), i64::MIN);
        assert_eq!(integer(IntegerBinOp::RotateLeft, 0x0F, 68), 0xF0);
    }

    #[test]
    fn bitwise() {
        assert_eq!(integer(IntegerBinOp::BitwiseAnd, 0b1100, 0b1010), 0b1000);
        assert_eq!(integer(IntegerBinOp::BitwiseOr, 0b1100, 0b1010), 0b1110);
        assert_eq!(integer(IntegerBinOp::BitwiseXor, 0b1100, 0b1010), 0b0110);
    }

    #[test]
    fn comparisons() {
        assert!(compare(IntegerCmp::Equal, -4, -4));
        assert!(compare(IntegerCmp::NotEqual, -4, 4));
        assert!(compare(IntegerCmp::GreaterEqual, 4, 4));
        assert!(compare(IntegerCmp::LessEqual, 4, 4));
        assert!(!compare(IntegerCmp::GreaterEqual, 3, 4));
        assert!(!compare(IntegerCmp::LessEqual, 5, 4));
    }

    proptest! {
        #[test]
        fn division_laws(a in any::<i64>(), b in any::<i64>()) {
            let q = integer(IntegerBinOp::Divide, a, b);
            let r = integer(IntegerBinOp::Modulus, a, b);
            if b == 0 {
                prop_assert_eq!((q, r), (0, 0));
            } else {
                prop_assert_eq!(q.wrapping_mul(b).wrapping_add(r), a);
            }
        }

        #[test]
        fn subtract_inverts_add(a in any::<i64>(), b in any::<i64>()) {
            let sum = integer(IntegerBinOp::Add, a, b);
            prop_assert_eq!(integer(IntegerBinOp::Subtract, sum, b), a);
        }
    }
}
