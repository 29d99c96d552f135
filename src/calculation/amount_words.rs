//! Written-out amounts in Brazilian Portuguese.
//!
//! Receipts print the total both as a number and in words, e.g.
//! `114.40` becomes "cento e quatorze reais e quarenta centavos".

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

const UNITS: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

const TEENS: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const TENS: [&str; 10] = [
    "",
    "dez",
    "vinte",
    "trinta",
    "quarenta",
    "cinquenta",
    "sessenta",
    "setenta",
    "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Upper bound (exclusive) on amounts that can be written out.
pub const MAX_AMOUNT_IN_WORDS: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Writes a non-negative currency amount out in Portuguese.
///
/// The amount is first rounded to whole centavos (half away from zero).
/// The reais part is followed by " reais", even for one real, and the
/// centavos part is omitted when zero.
///
/// # Errors
///
/// Returns [`EngineError::AmountOutOfRange`] for negative amounts and for
/// amounts of one billion reais or more.
///
/// # Example
///
/// ```
/// use vt_engine::calculation::amount_in_words;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let words = amount_in_words(Decimal::from_str("1234.56").unwrap()).unwrap();
/// assert_eq!(words, "mil duzentos e trinta e quatro reais e cinquenta e seis centavos");
///
/// assert_eq!(amount_in_words(Decimal::ZERO).unwrap(), "zero reais");
/// assert_eq!(amount_in_words(Decimal::from_str("100.50").unwrap()).unwrap(), "cento reais e cinquenta centavos");
/// ```
pub fn amount_in_words(amount: Decimal) -> EngineResult<String> {
    let out_of_range = || EngineError::AmountOutOfRange { amount };

    if amount < Decimal::ZERO {
        return Err(out_of_range());
    }

    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded >= MAX_AMOUNT_IN_WORDS {
        return Err(out_of_range());
    }

    let reais = rounded.trunc().to_u64().ok_or_else(out_of_range)?;
    let centavos = (rounded.fract() * Decimal::ONE_HUNDRED)
        .to_u32()
        .ok_or_else(out_of_range)?;

    let mut text = reais_in_words(reais);
    if reais >= MILLION && reais % MILLION == 0 {
        text.push_str(" de reais");
    } else {
        text.push_str(" reais");
    }

    if centavos > 0 {
        text.push_str(" e ");
        text.push_str(&centavos_in_words(centavos));
        text.push_str(" centavos");
    }

    Ok(text)
}

/// Words for 0..=999, parts joined with " e ". Empty for zero.
fn group_in_words(value: u64) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let mut rest = value as usize;

    if rest >= 100 {
        parts.push(HUNDREDS[rest / 100]);
        rest %= 100;
    }
    if rest >= 20 {
        parts.push(TENS[rest / 10]);
        rest %= 10;
    }
    if rest >= 10 {
        parts.push(TEENS[rest - 10]);
    } else if rest > 0 {
        parts.push(UNITS[rest]);
    }

    parts.join(" e ")
}

fn reais_in_words(reais: u64) -> String {
    if reais == 0 {
        return "zero".to_string();
    }

    let millions = reais / MILLION;
    let thousands = (reais / THOUSAND) % THOUSAND;
    let units = reais % THOUSAND;

    let mut text = String::new();

    if millions > 0 {
        text = if millions == 1 {
            "um milhão".to_string()
        } else {
            format!("{} milhões", group_in_words(millions))
        };
    }

    if thousands > 0 {
        let words = if thousands == 1 {
            "mil".to_string()
        } else {
            format!("{} mil", group_in_words(thousands))
        };
        append_group(&mut text, &words, reais % MILLION);
    }

    if units > 0 {
        append_group(&mut text, &group_in_words(units), units);
    }

    text
}

/// Appends a lower group, joining with " e " when what remains is a single
/// round value ("mil e quinhentos") and with a space otherwise
/// ("mil duzentos e trinta e quatro").
fn append_group(text: &mut String, words: &str, remainder: u64) {
    if !text.is_empty() {
        let mut significant = remainder;
        while significant >= THOUSAND && significant % THOUSAND == 0 {
            significant /= THOUSAND;
        }
        if significant < 100 || (significant < THOUSAND && significant % 100 == 0) {
            text.push_str(" e ");
        } else {
            text.push(' ');
        }
    }
    text.push_str(words);
}

fn centavos_in_words(centavos: u32) -> String {
    let centavos = centavos as usize;
    if centavos >= 20 {
        let unit = centavos % 10;
        if unit > 0 {
            format!("{} e {}", TENS[centavos / 10], UNITS[unit])
        } else {
            TENS[centavos / 10].to_string()
        }
    } else if centavos >= 10 {
        TEENS[centavos - 10].to_string()
    } else {
        UNITS[centavos].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn words(s: &str) -> String {
        amount_in_words(dec(s)).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(words("0"), "zero reais");
        assert_eq!(words("0.00"), "zero reais");
    }

    #[test]
    fn test_one_keeps_plural() {
        assert_eq!(words("1.00"), "um reais");
    }

    #[test]
    fn test_hundred_uses_cento() {
        assert_eq!(words("100.50"), "cento reais e cinquenta centavos");
        assert_eq!(words("110"), "cento e dez reais");
    }

    #[test]
    fn test_units_tens_and_teens() {
        assert_eq!(words("7"), "sete reais");
        assert_eq!(words("15"), "quinze reais");
        assert_eq!(words("20"), "vinte reais");
        assert_eq!(words("21"), "vinte e um reais");
        assert_eq!(words("99"), "noventa e nove reais");
    }

    #[test]
    fn test_hundreds_combinations() {
        assert_eq!(words("114.40"), "cento e quatorze reais e quarenta centavos");
        assert_eq!(words("305"), "trezentos e cinco reais");
        assert_eq!(
            words("999.99"),
            "novecentos e noventa e nove reais e noventa e nove centavos"
        );
    }

    #[test]
    fn test_centavos_forms() {
        assert_eq!(words("3.05"), "três reais e cinco centavos");
        assert_eq!(words("3.13"), "três reais e treze centavos");
        assert_eq!(words("3.30"), "três reais e trinta centavos");
        assert_eq!(words("3.47"), "três reais e quarenta e sete centavos");
        assert_eq!(words("0.50"), "zero reais e cinquenta centavos");
    }

    #[test]
    fn test_rounding_to_centavos() {
        assert_eq!(words("0.005"), "zero reais e um centavos");
        assert_eq!(words("2.004"), "dois reais");
        assert_eq!(words("1.999"), "dois reais");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(
            words("1234.56"),
            "mil duzentos e trinta e quatro reais e cinquenta e seis centavos"
        );
        assert_eq!(words("1000"), "mil reais");
        assert_eq!(words("1005"), "mil e cinco reais");
        assert_eq!(words("1500"), "mil e quinhentos reais");
        assert_eq!(words("2000"), "dois mil reais");
        assert_eq!(words("21350"), "vinte e um mil trezentos e cinquenta reais");
    }

    #[test]
    fn test_millions() {
        assert_eq!(words("1000000"), "um milhão de reais");
        assert_eq!(words("2500000"), "dois milhões e quinhentos mil reais");
        assert_eq!(
            words("1234000"),
            "um milhão duzentos e trinta e quatro mil reais"
        );
        assert_eq!(words("3000010"), "três milhões e dez reais");
    }

    #[test]
    fn test_out_of_range() {
        for raw in ["-0.01", "1000000000", "999999999.995"] {
            match amount_in_words(dec(raw)) {
                Err(EngineError::AmountOutOfRange { amount }) => assert_eq!(amount, dec(raw)),
                other => panic!("Expected AmountOutOfRange for {}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_largest_supported_amount() {
        assert_eq!(
            words("999999999.99"),
            "novecentos e noventa e nove milhões novecentos e noventa e nove mil novecentos e noventa e nove reais e noventa e nove centavos"
        );
    }
}
