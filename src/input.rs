use crate::error::Result;
use crate::matrix::matrix::Matrix;
use itertools::Itertools;

// length of the longest prefix that reads as a decimal number,
// `[+-]digits[.digits][e[+-]digits]`
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        let frac_digits = frac_end - (i + 1);
        if mantissa_digits > 0 || frac_digits > 0 {
            mantissa_digits += frac_digits;
            i = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }

    i
}

/// Reads a user-typed cell the way the matrix forms do: surrounding
/// whitespace is ignored, the first `,` counts as a decimal point, trailing
/// garbage after the number is dropped (`"12abc"` is 12), and anything that
/// doesn't start with a number, or overflows to infinity, is `0.0`.
pub fn parse_cell(text: &str) -> f64 {
    let text = text.trim().replacen(',', ".", 1);
    let end = numeric_prefix_len(&text);

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parses a whole matrix: rows separated by newlines or `;`, cells by
/// whitespace. Blank rows are skipped; rows must all have the same length.
pub fn parse_matrix(text: &str) -> Result<Matrix<f64>> {
    let lines = text
        .split(['\n', ';'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().map(parse_cell).collect_vec())
        .collect_vec();

    Matrix::from_list(lines)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
