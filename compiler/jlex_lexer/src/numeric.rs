//! Numeric literal validation and decoding.
//!
//! The raw scanner hands over the maximal literal-looking run (`0x1.8p-3f`,
//! `1__0`, `09`, `1e`); this module decides what it is. Each form is split
//! into digit runs (integer part, fraction, exponent) and every run is
//! checked on its own, so an underscore next to a prefix, `.`, exponent
//! marker, sign, or suffix always lands at the edge of a run.

use jlex_ir::{LexErrorKind, LiteralValue, TokenKind};

use crate::LexerConfig;

/// Largest decimal `int` magnitude (`-2147483648` is written as `-` `2147483648`).
const INT_DECIMAL_MAX: u64 = 1 << 31;
/// Hex, octal, and binary `int` literals may use all 32 bits.
const INT_RADIX_MAX: u64 = 0xFFFF_FFFF;
const LONG_DECIMAL_MAX: u64 = 1 << 63;
const LONG_RADIX_MAX: u64 = u64::MAX;

/// Exponents beyond this overflow or underflow every float format anyway.
const EXPONENT_CLAMP: i64 = 100_000;

/// Significant hex digits kept when decoding a hex float mantissa.
const HEX_MANTISSA_DIGITS: u32 = 16;

/// Exponent of the smallest subnormal.
const F64_MIN_QUANTUM: i64 = -1074;
const F32_MIN_QUANTUM: i64 = -149;

pub(crate) type NumResult = Result<(TokenKind, LiteralValue), LexErrorKind>;

const MALFORMED: LexErrorKind = LexErrorKind::MalformedNumericLiteral;

/// Validate and decode one numeric literal.
pub(crate) fn cook_number(text: &str, config: LexerConfig) -> NumResult {
    let allow = config.allow_underscore_digit_separators;
    match text.as_bytes() {
        [b'0', b'x' | b'X', body @ ..] => hex(body, allow),
        [b'0', b'b' | b'B', body @ ..] => binary(body, allow),
        bytes => decimal(bytes, config),
    }
}

// === Digit runs ===

fn is_dec(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_hex(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Split `[digit_]*` off the front of `bytes`.
fn split_run(bytes: &[u8], is_digit: fn(u8) -> bool) -> (&[u8], &[u8]) {
    let end = bytes
        .iter()
        .position(|&b| !(is_digit(b) || b == b'_'))
        .unwrap_or(bytes.len());
    bytes.split_at(end)
}

/// Underscores must sit strictly between two digits.
fn check_run(run: &[u8], allow: bool) -> Result<(), LexErrorKind> {
    if !run.contains(&b'_') {
        return Ok(());
    }
    let misplaced = run.first() == Some(&b'_')
        || run.last() == Some(&b'_')
        || run.windows(2).any(|w| w == b"__");
    if !allow || misplaced {
        return Err(LexErrorKind::InvalidUnderscorePlacement);
    }
    Ok(())
}

fn has_digits(run: &[u8]) -> bool {
    run.iter().any(|&b| b != b'_')
}

fn digits(run: &[u8]) -> impl Iterator<Item = u8> + '_ {
    run.iter().copied().filter(|&b| b != b'_')
}

/// Value of a run in `radix`; `None` on a digit outside the radix or on
/// overflow.
fn accumulate(run: &[u8], radix: u32) -> Option<u64> {
    digits(run).try_fold(0u64, |acc, b| {
        let d = char::from(b).to_digit(radix)?;
        acc.checked_mul(u64::from(radix))?.checked_add(u64::from(d))
    })
}

fn integer(value: u64, long: bool, int_max: u64, long_max: u64) -> NumResult {
    let (kind, max, literal): (_, _, fn(u64) -> LiteralValue) = if long {
        (TokenKind::LongLiteral, long_max, LiteralValue::Long)
    } else {
        (TokenKind::IntegerLiteral, int_max, LiteralValue::Int)
    };
    if value > max {
        return Err(MALFORMED);
    }
    Ok((kind, literal(value)))
}

/// Integer suffix: nothing, or `l`/`L`.
fn long_suffix(rest: &[u8]) -> Result<bool, LexErrorKind> {
    match rest {
        [] => Ok(false),
        [b'l' | b'L'] => Ok(true),
        _ => Err(MALFORMED),
    }
}

/// `.` followed by a fraction run, if present.
fn fraction(rest: &[u8], is_digit: fn(u8) -> bool) -> (Option<&[u8]>, &[u8]) {
    match rest {
        [b'.', tail @ ..] => {
            let (frac, rest) = split_run(tail, is_digit);
            (Some(frac), rest)
        }
        _ => (None, rest),
    }
}

// === Exponent ===

struct Exponent<'a> {
    negative: bool,
    digits: &'a [u8],
}

impl Exponent<'_> {
    fn value(&self) -> i64 {
        let magnitude = digits(self.digits).fold(0i64, |acc, b| {
            (acc * 10 + i64::from(b - b'0')).min(EXPONENT_CLAMP)
        });
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Exponent after its `e`/`p` marker: optional sign, then decimal digits.
fn exponent(tail: &[u8], allow: bool) -> Result<(Exponent<'_>, &[u8]), LexErrorKind> {
    let (negative, tail) = match tail {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, tail),
    };
    let (run, rest) = split_run(tail, is_dec);
    check_run(run, allow)?;
    if !has_digits(run) {
        return Err(MALFORMED);
    }
    Ok((
        Exponent {
            negative,
            digits: run,
        },
        rest,
    ))
}

/// Floating suffix: nothing or `d`/`D` is double, `f`/`F` is float.
fn float_suffix(rest: &[u8]) -> Result<bool, LexErrorKind> {
    match rest {
        [] | [b'd' | b'D'] => Ok(false),
        [b'f' | b'F'] => Ok(true),
        _ => Err(MALFORMED),
    }
}

// === Radix forms ===

fn binary(body: &[u8], allow: bool) -> NumResult {
    let (run, rest) = split_run(body, is_dec);
    check_run(run, allow)?;
    let long = long_suffix(rest)?;
    if !has_digits(run) {
        return Err(MALFORMED);
    }
    let value = accumulate(run, 2).ok_or(MALFORMED)?;
    integer(value, long, INT_RADIX_MAX, LONG_RADIX_MAX)
}

fn hex(body: &[u8], allow: bool) -> NumResult {
    let (int_run, rest) = split_run(body, is_hex);
    check_run(int_run, allow)?;
    let (frac_run, rest) = fraction(rest, is_hex);
    if let Some(frac) = frac_run {
        check_run(frac, allow)?;
    }

    let [b'p' | b'P', exp_tail @ ..] = rest else {
        // Hex floats need a binary exponent.
        if frac_run.is_some() {
            return Err(MALFORMED);
        }
        let long = long_suffix(rest)?;
        if !has_digits(int_run) {
            return Err(MALFORMED);
        }
        let value = accumulate(int_run, 16).ok_or(MALFORMED)?;
        return integer(value, long, INT_RADIX_MAX, LONG_RADIX_MAX);
    };

    let frac = frac_run.unwrap_or(&[]);
    if !has_digits(int_run) && !has_digits(frac) {
        return Err(MALFORMED);
    }
    let (exp, rest) = exponent(exp_tail, allow)?;
    let single = float_suffix(rest)?;
    let value = hex_float_value(int_run, frac, exp.value(), single);
    let nonzero = digits(int_run).chain(digits(frac)).any(|b| b != b'0');
    finish_float(value, single, nonzero)
}

fn decimal(bytes: &[u8], config: LexerConfig) -> NumResult {
    let allow = config.allow_underscore_digit_separators;
    let (int_run, rest) = split_run(bytes, is_dec);
    check_run(int_run, allow)?;
    let (frac_run, rest) = fraction(rest, is_dec);
    if let Some(frac) = frac_run {
        check_run(frac, allow)?;
    }
    let (exp, rest) = match rest {
        [b'e' | b'E', tail @ ..] => {
            let (exp, rest) = exponent(tail, allow)?;
            (Some(exp), rest)
        }
        _ => (None, rest),
    };

    if frac_run.is_none() && exp.is_none() && matches!(rest, [] | [b'l' | b'L']) {
        let long = long_suffix(rest)?;
        return decimal_integer(int_run, long, config);
    }

    let frac = frac_run.unwrap_or(&[]);
    if !has_digits(int_run) && !has_digits(frac) {
        return Err(MALFORMED);
    }
    let single = float_suffix(rest)?;

    let mut normalized = String::with_capacity(bytes.len() + 4);
    push_digits(&mut normalized, int_run);
    normalized.push('.');
    push_digits(&mut normalized, frac);
    if let Some(exp) = &exp {
        normalized.push('e');
        if exp.negative {
            normalized.push('-');
        }
        push_digits(&mut normalized, exp.digits);
    }
    let nonzero = digits(int_run)
        .chain(digits(frac))
        .any(|b| b != b'0');
    let value = if single {
        normalized.parse::<f32>().map(f64::from)
    } else {
        normalized.parse::<f64>()
    }
    .map_err(|_| MALFORMED)?;
    finish_float(value, single, nonzero)
}

/// Digits of `run` without underscores, or `0` for an empty run.
fn push_digits(out: &mut String, run: &[u8]) {
    let start = out.len();
    out.extend(digits(run).map(char::from));
    if out.len() == start {
        out.push('0');
    }
}

fn decimal_integer(run: &[u8], long: bool, config: LexerConfig) -> NumResult {
    if !has_digits(run) {
        return Err(MALFORMED);
    }
    let legacy_octal = run.len() > 1 && run[0] == b'0';
    if legacy_octal {
        if !config.allow_legacy_octal {
            return Err(MALFORMED);
        }
        let value = accumulate(run, 8).ok_or(MALFORMED)?;
        return integer(value, long, INT_RADIX_MAX, LONG_RADIX_MAX);
    }
    let value = accumulate(run, 10).ok_or(MALFORMED)?;
    integer(value, long, INT_DECIMAL_MAX, LONG_DECIMAL_MAX)
}

// === Floating values ===

/// Reject overflow to infinity and underflow to zero from nonzero digits.
#[allow(
    clippy::cast_possible_truncation,
    reason = "float literal values arrive already rounded to f32 precision"
)]
fn finish_float(value: f64, single: bool, nonzero: bool) -> NumResult {
    if single {
        let value = value as f32;
        if value.is_infinite() || (value == 0.0 && nonzero) {
            return Err(MALFORMED);
        }
        Ok((TokenKind::FloatLiteral, LiteralValue::float(value)))
    } else {
        if value.is_infinite() || (value == 0.0 && nonzero) {
            return Err(MALFORMED);
        }
        Ok((TokenKind::DoubleLiteral, LiteralValue::double(value)))
    }
}

/// Decode a hex float mantissa and binary exponent, rounded once to the
/// target precision (`f32` when `single`).
///
/// Keeps the first sixteen significant hex digits and folds every dropped
/// nonzero digit into a sticky low bit, which always sits below the
/// rounding position.
fn hex_float_value(int_run: &[u8], frac_run: &[u8], exp: i64, single: bool) -> f64 {
    let mut mantissa: u64 = 0;
    let mut kept = 0u32;
    let mut dropped: i64 = 0;
    let mut sticky = false;
    for d in digits(int_run)
        .chain(digits(frac_run))
        .filter_map(|b| char::from(b).to_digit(16))
    {
        if kept == 0 && d == 0 {
            continue;
        }
        if kept < HEX_MANTISSA_DIGITS {
            mantissa = (mantissa << 4) | u64::from(d);
            kept += 1;
        } else {
            dropped += 1;
            sticky |= d != 0;
        }
    }
    if mantissa == 0 {
        return 0.0;
    }
    if sticky {
        mantissa |= 1;
    }
    let frac_len = i64::try_from(digits(frac_run).count()).unwrap_or(i64::MAX / 8);
    let e2 = exp
        .saturating_add(4 * dropped)
        .saturating_sub(4 * frac_len);
    if single {
        round_binary(mantissa, e2, f32::MANTISSA_DIGITS, F32_MIN_QUANTUM)
    } else {
        round_binary(mantissa, e2, f64::MANTISSA_DIGITS, F64_MIN_QUANTUM)
    }
}

/// Round `mantissa * 2^exp` to `precision` significant bits, ties to even.
/// Below the normal range the last bit is pinned at `2^min_quantum`, giving
/// subnormals. The result is exact in the target format (or out of range).
#[allow(
    clippy::cast_precision_loss,
    reason = "the converted mantissa has at most precision + 1 bits"
)]
fn round_binary(mantissa: u64, exp: i64, precision: u32, min_quantum: i64) -> f64 {
    let bits = i64::from(u64::BITS - mantissa.leading_zeros());
    let top = exp.saturating_add(bits - 1);
    let quantum = top
        .saturating_sub(i64::from(precision) - 1)
        .max(min_quantum);
    let shift = quantum.saturating_sub(exp);
    if shift <= 0 {
        return scale_by_pow2(mantissa as f64, exp);
    }
    // Past 64 bits the whole value is below half a quantum.
    let Ok(shift @ ..=64) = u32::try_from(shift) else {
        return 0.0;
    };
    let wide = u128::from(mantissa);
    let kept = wide >> shift;
    let rest = wide & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    let rounded = if rest > half || (rest == half && kept & 1 == 1) {
        kept + 1
    } else {
        kept
    };
    scale_by_pow2(rounded as f64, quantum)
}

/// `x * 2^e` in steps that stay inside the normal exponent range.
#[allow(
    clippy::cast_possible_truncation,
    reason = "each step is clamped to ±1000"
)]
fn scale_by_pow2(mut x: f64, mut e: i64) -> f64 {
    while e != 0 && x != 0.0 && x.is_finite() {
        let step = e.clamp(-1000, 1000);
        x *= 2f64.powi(step as i32);
        e -= step;
    }
    x
}

#[cfg(test)]
mod tests;
