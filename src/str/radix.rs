use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::Error;
use crate::number::Number;
use crate::ops::common::pow10;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Format `n` in the given `base`, one character at a time through `emit`.
/// `base == 10` is a fast path through the base-10 formatter (§4.10); any
/// other base splits the value into an integer and fractional part and
/// extracts digits independently for each (§4.11).
///
/// For `base <= 16` digits are the usual `0-9A-F` alphabet. For `base > 16`
/// there is no single-character alphabet, so each digit is printed as its
/// own decimal value, zero-padded to the width of `base - 1`. Every integer
/// digit is space-prefixed (matching the worked example in §8: base-256
/// digit 255 prints as `" 255"`); within the fractional part only digits
/// after the first are space-prefixed, per §4.11.
///
/// `leading_zero` controls whether a bare `0` integer part is still printed
/// when the value is purely fractional (`0.5` vs `.5`).
pub(crate) fn out_num(n: &Number, base: u32, leading_zero: bool, mut emit: impl FnMut(char)) -> Result<(), Error> {
    if base < 2 {
        return Err(Error::InvalidBase);
    }

    if n.is_neg() {
        emit('-');
    }
    if n.is_zero() {
        emit('0');
        return Ok(());
    }

    if base == 10 {
        for c in n.to_string().chars() {
            if c != '-' {
                emit(c);
            }
        }
        return Ok(());
    }

    let width = digit_width(base);
    let scale = n.scale();
    let abs = n.bigint().abs();
    let scale_pow = pow10(scale);

    let (int_part, mut frac) = if scale == 0 {
        (abs, BigInt::zero())
    } else {
        Integer::div_rem(&abs, &scale_pow)
    };

    emit_int_part(int_part, base, width, leading_zero, &mut emit);

    if scale > 0 {
        emit('.');
        let base_big = BigInt::from(base);
        let mut t = BigInt::from(1);
        let mut pre_space = false;
        while digit_len(&t) <= scale {
            frac *= &base_big;
            let (d, rem) = Integer::div_rem(&frac, &scale_pow);
            frac = rem;
            emit_digit(d.to_u32().unwrap_or(0), base, width, pre_space, &mut emit);
            pre_space = true;
            // An exact fractional representation needs no further digits.
            if frac.is_zero() {
                break;
            }
            t *= &base_big;
        }
    }

    Ok(())
}

fn emit_int_part(mut value: BigInt, base: u32, width: usize, leading_zero: bool, emit: &mut impl FnMut(char)) {
    if value.is_zero() {
        if leading_zero {
            emit_digit(0, base, width, true, emit);
        }
        return;
    }

    let base_big = BigInt::from(base);
    let mut stack = Vec::new();
    while !value.is_zero() {
        let (q, r) = Integer::div_rem(&value, &base_big);
        stack.push(r.to_u32().unwrap_or(0));
        value = q;
    }
    while let Some(d) = stack.pop() {
        emit_digit(d, base, width, true, emit);
    }
}

/// Emit one digit. For `base <= 16` this is a single character from the
/// hex alphabet and `pre_space` is irrelevant; for `base > 16` the digit is
/// its own zero-padded decimal value, preceded by a space only when
/// `pre_space` is set (every digit but the first of a given run).
fn emit_digit(d: u32, base: u32, width: usize, pre_space: bool, emit: &mut impl FnMut(char)) {
    if base <= 16 {
        emit(HEX_DIGITS[d as usize] as char);
    } else {
        out_long(d as u64, width, pre_space, emit);
    }
}

/// Print a single multi-character digit: a space (when `leading_space`) then
/// its decimal value zero-padded to `width`.
fn out_long(val: u64, width: usize, leading_space: bool, emit: &mut impl FnMut(char)) {
    if leading_space {
        emit(' ');
    }
    for c in format!("{val:0width$}").chars() {
        emit(c);
    }
}

fn digit_width(base: u32) -> usize {
    (base - 1).to_string().len()
}

fn digit_len(value: &BigInt) -> u32 {
    value.magnitude().to_str_radix(10).len() as u32
}
