use crate::domain::schema::CanonicalType;

/// Guess the canonical type of a column from its sample values.
///
/// Single pass, left to right: any value that is neither an integer nor a
/// floating-point number makes the column `Varchar` immediately. Otherwise a
/// single floating-point value makes it `Double`, and all-integer samples give
/// `Integer`. No samples at all also yields `Varchar`.
pub fn derive_canonical_type<S: AsRef<str>>(values: &[S]) -> CanonicalType {
    let mut guess: Option<CanonicalType> = None;

    for value in values {
        let value = value.as_ref();
        let current = if value.parse::<i32>().is_ok() {
            CanonicalType::Integer
        } else if parses_as_double(value) {
            CanonicalType::Double
        } else {
            return CanonicalType::Varchar;
        };

        // A single double wins over any number of integers
        if guess.is_none() || current == CanonicalType::Double {
            guess = Some(current);
        }
    }

    guess.unwrap_or(CanonicalType::Varchar)
}

/// Floating-point grammar for samples: surrounding whitespace is ignored, an
/// optional sign, then either the exact words `NaN` / `Infinity` or a decimal
/// number with an optional `d`/`f` suffix. Other spellings of the non-finite
/// values (`nan`, `inf`, `INFINITY`) are text.
fn parses_as_double(value: &str) -> bool {
    let trimmed = value.trim();
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);

    if unsigned == "NaN" || unsigned == "Infinity" {
        return true;
    }
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return false;
    }

    let number = unsigned
        .strip_suffix(|c: char| matches!(c, 'd' | 'D' | 'f' | 'F'))
        .unwrap_or(unsigned);
    number.parse::<f64>().is_ok()
}
