// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Numbers are plain `f64`. Reading them never fails: text that
//! starts like a number but isn't one gives NaN.

use num::Num;

fn radix_prefix(s: &str) -> Option<(u32, &str)> {
    let (prefix, digits) = (s.get(0..2)?, s.get(2..)?);
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None
    };
    Some((radix, digits))
}

/// Parse the text of a numeric token. Decimal text follows the usual
/// floating point syntax (`12`, `1.5`, `2e10`); `0x`, `0o` and `0b`
/// prefixes introduce integers in radix 16, 8 and 2.
pub fn read_number(s: &str) -> f64 {
    if let Some((radix, digits)) = radix_prefix(s) {
        if digits.is_empty() || ! digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN
        }
        return <f64 as Num>::from_str_radix(digits, radix).unwrap_or(f64::NAN)
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Decimal text for a number: integral values are written without a
/// fractional part, the special values as `NaN`, `inf` and `-inf`.
pub fn format_number(n: f64) -> String {
    format!("{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal() {
        assert_eq!(read_number("12"), 12.0);
        assert_eq!(read_number("1.5"), 1.5);
        assert_eq!(read_number("2e3"), 2000.0);
        assert_eq!(read_number("7."), 7.0);
    }

    #[test]
    fn radix() {
        assert_eq!(read_number("0x1f"), 31.0);
        assert_eq!(read_number("0o17"), 15.0);
        assert_eq!(read_number("0b101"), 5.0);
        assert!(read_number("0x").is_nan());
        assert!(read_number("0b12").is_nan());
    }

    #[test]
    fn malformed_is_nan() {
        assert!(read_number("12abc").is_nan());
        assert!(read_number("1.2.3").is_nan());
        assert!(read_number("3e").is_nan());
    }

    #[test]
    fn formatting() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }
}
