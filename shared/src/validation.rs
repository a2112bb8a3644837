//! Validation helpers shared by the backend and its tests

use rust_decimal::Decimal;

/// Trim a required text field, rejecting blank input
pub fn require_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Validate a stock quantity that opens a record (zero allowed)
pub fn validate_opening_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity < 0 {
        return Err("A quantidade não pode ser negativa.");
    }
    Ok(())
}

/// Validate an order quantity (strictly positive)
pub fn validate_order_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("A quantidade deve ser maior que zero.");
    }
    Ok(())
}

/// Validate a monetary amount
pub fn validate_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount < Decimal::ZERO {
        return Err("O valor não pode ser negativo.");
    }
    Ok(())
}

/// Longest SKU accepted, in characters
pub const SKU_MAX_CHARS: usize = 64;

/// Validate a product SKU. Any characters are allowed; it must not be blank.
pub fn validate_sku(sku: &str) -> Result<(), &'static str> {
    if sku.trim().is_empty() {
        return Err("O SKU é obrigatório.");
    }
    if sku.chars().count() > SKU_MAX_CHARS {
        return Err("O SKU deve ter no máximo 64 caracteres.");
    }
    Ok(())
}

/// Validate a Brazilian CNPJ (14 digits with check digits).
/// Punctuation (`12.345.678/0001-95`) is ignored.
pub fn validate_cnpj(cnpj: &str) -> Result<(), &'static str> {
    let digits: Vec<u32> = cnpj.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 14 {
        return Err("O CNPJ deve ter 14 dígitos.");
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return Err("CNPJ inválido.");
    }

    let check = |len: usize| -> u32 {
        let weights: Vec<u32> = if len == 12 {
            vec![5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]
        } else {
            vec![6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]
        };
        let sum: u32 = digits.iter().zip(weights.iter()).map(|(d, w)| d * w).sum();
        match sum % 11 {
            0 | 1 => 0,
            r => 11 - r,
        }
    };

    if check(12) != digits[12] || check(13) != digits[13] {
        return Err("Dígitos verificadores do CNPJ inválidos.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(Some("  avaria  ")), Some("avaria".to_string()));
        assert_eq!(require_text(Some("   ")), None);
        assert_eq!(require_text(None), None);
    }

    #[test]
    fn test_quantities() {
        assert!(validate_opening_quantity(0).is_ok());
        assert!(validate_opening_quantity(-1).is_err());
        assert!(validate_order_quantity(1).is_ok());
        assert!(validate_order_quantity(0).is_err());
    }

    #[test]
    fn test_amount() {
        assert!(validate_amount(Decimal::ZERO).is_ok());
        assert!(validate_amount(Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_sku() {
        assert!(validate_sku("MUN-001").is_ok());
        assert!(validate_sku("MP_010").is_ok());
        assert!(validate_sku("MUN 001").is_ok());
        assert!(validate_sku("CX.12/A").is_ok());
        assert!(validate_sku("AÇO-ÉLITE").is_ok());
        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
    }

    #[test]
    fn test_sku_length_counts_characters() {
        assert!(validate_sku(&"Ç".repeat(SKU_MAX_CHARS)).is_ok());
        assert!(validate_sku(&"A".repeat(SKU_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn test_cnpj_valid() {
        assert!(validate_cnpj("11.222.333/0001-81").is_ok());
        assert!(validate_cnpj("11222333000181").is_ok());
    }

    #[test]
    fn test_cnpj_invalid() {
        assert!(validate_cnpj("11.222.333/0001-82").is_err());
        assert!(validate_cnpj("11111111111111").is_err());
        assert!(validate_cnpj("123").is_err());
    }
}
