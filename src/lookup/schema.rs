// Thu Aug 27 2026 - Alex

use serde_json::Value;

use crate::lookup::error::LookupError;

/// Extracts a balance in satoshis from whichever recognized response
/// shape the endpoint speaks, in priority order:
///
/// 1. esplora/mempool style: `chainstats.funded_txo_sum - spent_txo_sum`
/// 2. blockchain.info style: `final_balance`
/// 3. blockcypher style: `tx_count` + `address` present, `balance`
///    field (number or numeric string, defaults to 0)
///
/// Anything else is a schema mismatch and counts as an attempt failure.
pub fn parse_balance_sats(value: &Value) -> Result<u64, LookupError> {
    if let Some(stats) = value.get("chainstats") {
        let funded = stats
            .get("funded_txo_sum")
            .and_then(Value::as_u64)
            .ok_or(LookupError::Schema)?;
        let spent = stats
            .get("spent_txo_sum")
            .and_then(Value::as_u64)
            .ok_or(LookupError::Schema)?;
        return Ok(funded.saturating_sub(spent));
    }

    if let Some(balance) = value.get("final_balance") {
        return balance.as_u64().ok_or(LookupError::Schema);
    }

    if value.get("tx_count").is_some() && value.get("address").is_some() {
        return match value.get("balance") {
            None | Some(Value::Null) => Ok(0),
            Some(Value::Number(n)) => n.as_u64().ok_or(LookupError::Schema),
            Some(Value::String(s)) => s.parse::<u64>().map_err(|_| LookupError::Schema),
            Some(_) => Err(LookupError::Schema),
        };
    }

    Err(LookupError::Schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chainstats_schema() {
        let value = json!({
            "chainstats": { "funded_txo_sum": 500_000_000u64, "spent_txo_sum": 100_000_000u64 }
        });
        assert_eq!(parse_balance_sats(&value).unwrap(), 400_000_000);
    }

    #[test]
    fn test_chainstats_never_goes_negative() {
        let value = json!({
            "chainstats": { "funded_txo_sum": 100u64, "spent_txo_sum": 500u64 }
        });
        assert_eq!(parse_balance_sats(&value).unwrap(), 0);
    }

    #[test]
    fn test_chainstats_missing_field_is_schema_error() {
        let value = json!({ "chainstats": { "funded_txo_sum": 100u64 } });
        assert!(matches!(
            parse_balance_sats(&value),
            Err(LookupError::Schema)
        ));
    }

    #[test]
    fn test_final_balance_schema() {
        let value = json!({ "final_balance": 250_000_000u64 });
        assert_eq!(parse_balance_sats(&value).unwrap(), 250_000_000);
    }

    #[test]
    fn test_tx_count_schema_with_string_balance() {
        let value = json!({ "address": "x", "tx_count": 3, "balance": "123456789" });
        assert_eq!(parse_balance_sats(&value).unwrap(), 123_456_789);
    }

    #[test]
    fn test_tx_count_schema_defaults_to_zero() {
        let value = json!({ "address": "x", "tx_count": 0 });
        assert_eq!(parse_balance_sats(&value).unwrap(), 0);
    }

    #[test]
    fn test_chainstats_takes_priority() {
        let value = json!({
            "chainstats": { "funded_txo_sum": 10u64, "spent_txo_sum": 0u64 },
            "final_balance": 999u64
        });
        assert_eq!(parse_balance_sats(&value).unwrap(), 10);
    }

    #[test]
    fn test_unrecognized_schema() {
        let value = json!({ "error": "not found" });
        assert!(matches!(
            parse_balance_sats(&value),
            Err(LookupError::Schema)
        ));
    }
}
