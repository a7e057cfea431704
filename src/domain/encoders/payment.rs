//! Cryptocurrency payment URIs (BIP-21 style).

use super::{EncodeContext, query_param};
use crate::domain::fields::FieldMap;

const DEFAULT_COIN: &str = "bitcoin";

/// Name of the amount parameter for a coin, or `None` when the coin has no
/// known payment URI and only `<coin>:<address>` is produced.
fn amount_param(coin: &str) -> Option<&'static str> {
    match coin {
        "bitcoin" | "litecoin" | "dogecoin" => Some("amount"),
        "ethereum" => Some("value"),
        _ => None,
    }
}

/// `<coin>:<address>[?amount=..]`, or `?value=..` for ethereum.
pub fn encode_crypto(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    let coin = match fields.text("coin") {
        "" => DEFAULT_COIN.to_string(),
        coin => coin.to_lowercase(),
    };
    let address = fields.text("address");
    let amount = fields.text("amount");

    let mut out = format!("{coin}:{address}");
    if let Some(param) = amount_param(&coin)
        && !amount.is_empty()
    {
        out.push_str(&query_param(false, param, amount));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EncodeContext {
        EncodeContext::new("https://qr.example.com")
    }

    fn crypto(coin: &str, amount: &str) -> String {
        let fields = FieldMap::new()
            .with_text("coin", coin)
            .with_text("address", "ADDR")
            .with_text("amount", amount);
        encode_crypto(&fields, &ctx())
    }

    #[test]
    fn test_bitcoin_family_uses_amount() {
        assert_eq!(crypto("bitcoin", "0.5"), "bitcoin:ADDR?amount=0.5");
        assert_eq!(crypto("litecoin", "2"), "litecoin:ADDR?amount=2");
        assert_eq!(crypto("dogecoin", "100"), "dogecoin:ADDR?amount=100");
    }

    #[test]
    fn test_ethereum_uses_value() {
        assert_eq!(crypto("ethereum", "1.25"), "ethereum:ADDR?value=1.25");
    }

    #[test]
    fn test_coin_lowercased() {
        assert_eq!(crypto("Bitcoin", ""), "bitcoin:ADDR");
    }

    #[test]
    fn test_unknown_coin_ignores_amount() {
        assert_eq!(crypto("monero", "3"), "monero:ADDR");
    }

    #[test]
    fn test_default_coin() {
        let fields = FieldMap::new().with_text("address", "bc1q");
        assert_eq!(encode_crypto(&fields, &ctx()), "bitcoin:bc1q");
    }
}
