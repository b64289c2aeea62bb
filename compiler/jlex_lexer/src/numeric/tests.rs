use super::*;
use pretty_assertions::assert_eq;

fn cook(text: &str) -> NumResult {
    cook_number(text, LexerConfig::default())
}

fn int(v: u64) -> NumResult {
    Ok((TokenKind::IntegerLiteral, LiteralValue::Int(v)))
}

fn long(v: u64) -> NumResult {
    Ok((TokenKind::LongLiteral, LiteralValue::Long(v)))
}

fn double(v: f64) -> NumResult {
    Ok((TokenKind::DoubleLiteral, LiteralValue::double(v)))
}

fn float(v: f32) -> NumResult {
    Ok((TokenKind::FloatLiteral, LiteralValue::float(v)))
}

const MALFORMED: NumResult = Err(LexErrorKind::MalformedNumericLiteral);
const UNDERSCORE: NumResult = Err(LexErrorKind::InvalidUnderscorePlacement);

// === Integer forms ===

#[test]
fn radix_matrix() {
    assert_eq!(cook("0xFF"), int(255));
    assert_eq!(cook("0XfF"), int(255));
    assert_eq!(cook("0b1010"), int(10));
    assert_eq!(cook("0B1"), int(1));
    assert_eq!(cook("012"), int(10));
    assert_eq!(cook("0"), int(0));
    assert_eq!(cook("00"), int(0));
    assert_eq!(cook("42"), int(42));
    assert_eq!(cook("1_000_000_000L"), long(1_000_000_000));
    assert_eq!(cook("0x7fff_ffffl"), long(0x7fff_ffff));
    assert_eq!(cook("0b1L"), long(1));
    assert_eq!(cook("017L"), long(15));
}

#[test]
fn int_range_limits() {
    assert_eq!(cook("2147483648"), int(1 << 31));
    assert_eq!(cook("2147483649"), MALFORMED);
    assert_eq!(cook("0xFFFFFFFF"), int(0xFFFF_FFFF));
    assert_eq!(cook("0x100000000"), MALFORMED);
    assert_eq!(cook("037777777777"), int(0xFFFF_FFFF));
    assert_eq!(cook("040000000000"), MALFORMED);
    assert_eq!(cook(&format!("0b{}", "1".repeat(32))), int(0xFFFF_FFFF));
    assert_eq!(cook(&format!("0b1{}", "0".repeat(32))), MALFORMED);
}

#[test]
fn long_range_limits() {
    assert_eq!(cook("9223372036854775808L"), long(1 << 63));
    assert_eq!(cook("9223372036854775809L"), MALFORMED);
    assert_eq!(cook("0xFFFFFFFFFFFFFFFFL"), long(u64::MAX));
    assert_eq!(cook("0x1FFFFFFFFFFFFFFFFL"), MALFORMED);
    assert_eq!(cook("99999999999999999999999L"), MALFORMED);
}

#[test]
fn bad_digits_and_missing_digits() {
    assert_eq!(cook("08"), MALFORMED);
    assert_eq!(cook("09"), MALFORMED);
    assert_eq!(cook("0b102"), MALFORMED);
    assert_eq!(cook("0x"), MALFORMED);
    assert_eq!(cook("0xL"), MALFORMED);
    assert_eq!(cook("0b"), MALFORMED);
    assert_eq!(cook("0xG"), MALFORMED);
    assert_eq!(cook("12abc"), MALFORMED);
    assert_eq!(cook("1LL"), MALFORMED);
}

#[test]
fn legacy_octal_disabled() {
    let strict = LexerConfig::strict();
    assert_eq!(cook_number("012", strict), MALFORMED);
    assert_eq!(cook_number("0", strict), int(0));
    assert_eq!(cook_number("0x12", strict), int(18));
    assert_eq!(cook_number("012.5", strict), double(12.5));
}

// === Underscores ===

#[test]
fn underscores_between_digits() {
    assert_eq!(cook("1_000"), int(1000));
    assert_eq!(cook("0_7"), int(7));
    assert_eq!(cook("0xFF_FF"), int(0xFFFF));
    assert_eq!(cook("0b1_0"), int(2));
    assert_eq!(cook("1_0.2_5e1_0"), double(10.25e10));
}

#[test]
fn misplaced_underscores() {
    for text in [
        "1__0", "1_", "1_L", "0x_1", "0b_1", "0_x1", "1_.5", "1._5", "1_e5", "1e_5", "1e+_5",
        "0x1_p1", "0x1p_1", "1.5_f",
    ] {
        assert_eq!(cook(text), UNDERSCORE, "{text}");
    }
}

#[test]
fn underscores_disabled() {
    let config = LexerConfig::for_release(6).unwrap_or_default();
    assert_eq!(cook_number("1_000", config), UNDERSCORE);
    assert_eq!(cook_number("1000", config), int(1000));
}

// === Floating forms ===

#[test]
fn decimal_floats() {
    assert_eq!(cook("1.23e-5"), double(1.23e-5));
    assert_eq!(cook("1.5"), double(1.5));
    assert_eq!(cook("1."), double(1.0));
    assert_eq!(cook(".5"), double(0.5));
    assert_eq!(cook("1e10"), double(1e10));
    assert_eq!(cook("1E+2"), double(100.0));
    assert_eq!(cook("1.e2"), double(100.0));
    assert_eq!(cook("2d"), double(2.0));
    assert_eq!(cook("2f"), float(2.0));
    assert_eq!(cook("1.5F"), float(1.5));
    assert_eq!(cook("09.5"), double(9.5));
    assert_eq!(cook("0.0"), double(0.0));
}

#[test]
fn malformed_floats() {
    assert_eq!(cook("1e"), MALFORMED);
    assert_eq!(cook("1e+"), MALFORMED);
    assert_eq!(cook("1.5L"), MALFORMED);
    assert_eq!(cook("1e5L"), MALFORMED);
    assert_eq!(cook("1..2"), MALFORMED);
    assert_eq!(cook("1.2.3"), MALFORMED);
}

#[test]
fn float_range() {
    assert_eq!(cook("1e309"), MALFORMED);
    assert_eq!(cook("1e-400"), MALFORMED);
    assert_eq!(cook("1e40f"), MALFORMED);
    assert_eq!(cook("1e-50f"), MALFORMED);
    assert_eq!(cook("0e999999"), double(0.0));
    assert_eq!(cook("4.9e-324"), double(4.9e-324));
    assert_eq!(cook("3.4028235e38f"), float(f32::MAX));
}

#[test]
fn hex_floats() {
    assert_eq!(cook("0x1p3"), double(8.0));
    assert_eq!(cook("0x1.8p1"), double(3.0));
    assert_eq!(cook("0x1.8p-3f"), float(0.1875));
    assert_eq!(cook("0x.8p1"), double(1.0));
    assert_eq!(cook("0x1.p0d"), double(1.0));
    assert_eq!(cook("0x1.fffffffffffffp1023"), double(f64::MAX));
    assert_eq!(cook("0x1p-1074"), double(f64::from_bits(1)));
    assert_eq!(cook("0x0p0"), double(0.0));
}

#[test]
fn malformed_hex_floats() {
    assert_eq!(cook("0x1.8"), MALFORMED);
    assert_eq!(cook("0x.p1"), MALFORMED);
    assert_eq!(cook("0xp1"), MALFORMED);
    assert_eq!(cook("0x1p"), MALFORMED);
    assert_eq!(cook("0x1p1L"), MALFORMED);
    assert_eq!(cook("0x1p1024"), MALFORMED);
    assert_eq!(cook("0x1p-1080"), MALFORMED);
}

#[test]
fn hex_float_suffix_f_rounds_once() {
    // 1 + 2^-24 is an f32 tie and goes to even.
    assert_eq!(cook("0x1.000001p0f"), float(1.0));
    // A dropped digit far past f64 precision still breaks the f32 tie.
    assert_eq!(
        cook("0x1.0000010000000001p0f"),
        float(f32::from_bits(0x3f80_0001))
    );
    assert_eq!(cook("0x1.fffffep127f"), float(f32::MAX));
    assert_eq!(cook("0x1.ffffffp127f"), MALFORMED);
    assert_eq!(cook("0x1p-149f"), float(f32::from_bits(1)));
    assert_eq!(cook("0x1.000002p-150f"), float(f32::from_bits(1)));
    assert_eq!(cook("0x1p-150f"), MALFORMED);
}

#[test]
fn hex_float_subnormal_double() {
    assert_eq!(cook("0x1.8p-1074"), double(f64::from_bits(2)));
    assert_eq!(cook("0x0.0000000000001p-1022"), double(f64::from_bits(1)));
}

#[test]
fn hex_float_dropped_digits_break_ties() {
    // 2^53 + 1 is a tie; ties go to even.
    assert_eq!(cook("0x20000000000001p0"), double(9_007_199_254_740_992.0));
    // A nonzero digit past the kept mantissa pushes the tie upward.
    assert_eq!(
        cook("0x20000000000001.00001p0"),
        double(9_007_199_254_740_994.0)
    );
}
