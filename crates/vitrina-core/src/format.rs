//! Currency formatting for display
//!
//! Prices are quoted the es-AR way: no decimal places and '.' as the
//! thousands separator. This is the single canonical formatter; amounts are
//! rounded to whole units before grouping.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a price for display: "1234567.89" becomes "1.234.568"
pub fn formatear_precio(precio: Decimal) -> String {
    let redondeado =
        precio.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negativo = redondeado.is_sign_negative() && !redondeado.is_zero();

    let digitos = redondeado.abs().to_string();
    let mut agrupado = String::with_capacity(digitos.len() + digitos.len() / 3);
    for (i, c) in digitos.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(c);
    }
    let cuerpo: String = agrupado.chars().rev().collect();

    if negativo {
        format!("-{}", cuerpo)
    } else {
        cuerpo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grouping() {
        assert_eq!(formatear_precio(dec!(0)), "0");
        assert_eq!(formatear_precio(dec!(999)), "999");
        assert_eq!(formatear_precio(dec!(1000)), "1.000");
        assert_eq!(formatear_precio(dec!(36700)), "36.700");
        assert_eq!(formatear_precio(dec!(1234567)), "1.234.567");
    }

    #[test]
    fn test_decimals_are_dropped() {
        assert_eq!(formatear_precio(dec!(13.33)), "13");
        assert_eq!(formatear_precio(dec!(13.50)), "14");
        assert_eq!(formatear_precio(dec!(99999.9)), "100.000");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(formatear_precio(dec!(-1500)), "-1.500");
        assert_eq!(formatear_precio(dec!(-0.2)), "0");
    }
}
