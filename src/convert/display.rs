//! Text formatting helpers for hex values and large counters.
//!
//! Two small, allocation-only formatters: [`to_hex`] renders a 64-bit value as
//! `0x`-prefixed uppercase hexadecimal, and [`number_str_with_unit`] renders a
//! counter with a `K`/`M`/`B` magnitude suffix for display surfaces where the
//! raw number would be unwieldy.

/// Formats a 64-bit unsigned integer as an uppercase hexadecimal string.
///
/// The output carries a `0x` prefix and exactly the digits of the natural hex
/// representation - no leading-zero padding to a fixed width. Byte order does
/// not apply to an integer-to-text conversion, so there is no `msb` parameter
/// here.
///
/// # Examples
///
/// ```rust
/// use byteflip::convert::display::to_hex;
///
/// assert_eq!(to_hex(852_456), "0xD01E8");
/// assert_eq!(to_hex(0), "0x0");
/// assert_eq!(to_hex(u64::MAX), "0xFFFFFFFFFFFFFFFF");
/// ```
pub fn to_hex(value: u64) -> String {
    format!("0x{value:X}")
}

/// Formats a counter with a magnitude suffix for display.
///
/// Intended for counters that can grow large and vary a lot: the value is
/// scaled by the first matching magnitude and tagged with `" K"`, `" M"` or
/// `" B"` (values of magnitude up to 1000 stay unsuffixed and unscaled). After
/// scaling, a value greater than 1 is additionally truncated down to a whole
/// multiple of 1000.
///
/// The secondary truncation means most mid-range inputs collapse to `0`; that
/// is the historical behavior of this formatter and is kept as-is. Non-finite
/// input is passed through unchanged as its plain string form.
///
/// # Examples
///
/// ```rust
/// use byteflip::convert::display::number_str_with_unit;
///
/// assert_eq!(number_str_with_unit(999.0), "0");
/// assert_eq!(number_str_with_unit(0.5), "0.5");
/// assert_eq!(number_str_with_unit(-5_000.0), "-5 K");
/// assert_eq!(number_str_with_unit(2_500.0), "0 K");
/// assert_eq!(number_str_with_unit(1_500_000_000_000.0), "1000 B");
/// ```
pub fn number_str_with_unit(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let (factor, suffix) = if value.abs() <= 1_000.0 {
        (1.0, "")
    } else if value.abs() <= 1_000_000.0 {
        (1_000.0, " K")
    } else if value.abs() <= 1_000_000_000.0 {
        (1_000_000.0, " M")
    } else {
        (1_000_000_000.0, " B")
    };

    let mut scaled = value / factor;
    if scaled > 1.0 {
        // Historical quirk: anything above 1 is floored to a multiple of 1000.
        scaled = ((scaled / 1000.0) as i64) as f64 * 1000.0;
    }

    format!("{scaled}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_no_padding() {
        assert_eq!(to_hex(852_456), "0xD01E8");
    }

    #[test]
    fn hex_zero() {
        assert_eq!(to_hex(0), "0x0");
    }

    #[test]
    fn hex_uppercase_digits() {
        assert_eq!(to_hex(0xDEAD_BEEF), "0xDEADBEEF");
        assert_eq!(to_hex(u64::MAX), "0xFFFFFFFFFFFFFFFF");
    }

    #[test]
    fn unit_small_magnitudes_pass_factor_one() {
        // Magnitude <= 1000 stays unscaled, but the secondary truncation still
        // applies to anything above 1.
        assert_eq!(number_str_with_unit(0.5), "0.5");
        assert_eq!(number_str_with_unit(1.0), "1");
        assert_eq!(number_str_with_unit(-999.0), "-999");
        assert_eq!(number_str_with_unit(500.0), "0");
        assert_eq!(number_str_with_unit(1_000.0), "1000");
    }

    #[test]
    fn unit_kilo_band() {
        assert_eq!(number_str_with_unit(2_500.0), "0 K");
        assert_eq!(number_str_with_unit(1_000_000.0), "1000 K");
        assert_eq!(number_str_with_unit(-5_000.0), "-5 K");
    }

    #[test]
    fn unit_mega_band() {
        assert_eq!(number_str_with_unit(2_000_000.0), "0 M");
        assert_eq!(number_str_with_unit(1_000_000_000.0), "1000 M");
        assert_eq!(number_str_with_unit(-250_000_000.0), "-250 M");
    }

    #[test]
    fn unit_giga_band() {
        assert_eq!(number_str_with_unit(2_000_000_000.0), "0 B");
        assert_eq!(number_str_with_unit(1_500_000_000_000.0), "1000 B");
        assert_eq!(number_str_with_unit(2_500_000_000_000.0), "2000 B");
    }

    #[test]
    fn unit_negative_values_skip_secondary_truncation() {
        // The > 1 check only fires for positive scaled values.
        assert_eq!(number_str_with_unit(-2_500.0), "-2.5 K");
    }

    #[test]
    fn unit_non_finite_passes_through() {
        assert_eq!(number_str_with_unit(f64::NAN), "NaN");
        assert_eq!(number_str_with_unit(f64::INFINITY), "inf");
        assert_eq!(number_str_with_unit(f64::NEG_INFINITY), "-inf");
    }
}
