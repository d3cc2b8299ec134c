//! Bridge to the injected EIP-1193 wallet provider (`window.ethereum`).
//! Connection state and signing stay with the provider; this module only
//! shapes requests and decodes responses. Absence of a provider is a normal
//! state, not an error path worth surfacing beyond the disabled UI.

use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Error)]
pub(crate) enum WalletError {
    #[error("no wallet provider injected")]
    NoProvider,
    #[error("provider returned no accounts")]
    NoAccounts,
    #[error("{0}")]
    Request(String),
}

#[derive(Serialize)]
struct AccountsRequest {
    method: &'static str,
}

#[derive(Serialize)]
struct TransactionRequest<'a> {
    method: &'static str,
    params: [TxParams<'a>; 1],
}

#[derive(Serialize)]
struct TxParams<'a> {
    from: &'a str,
    to: &'a str,
    value: &'a str,
}

pub(crate) fn has_provider() -> bool {
    provider().is_some()
}

/// Prompts the provider for account access and answers the first account.
pub(crate) async fn request_accounts() -> Result<String, WalletError> {
    let args = to_request_value(&AccountsRequest {
        method: "eth_requestAccounts",
    })?;
    let result = request(args).await?;
    let accounts: Array = result.dyn_into().map_err(|_| WalletError::NoAccounts)?;
    accounts
        .get(0)
        .as_string()
        .filter(|account| !account.is_empty())
        .ok_or(WalletError::NoAccounts)
}

/// Submits a value transfer; resolves to the transaction hash.
pub(crate) async fn send_transaction(
    from: &str,
    to: &str,
    value_wei_hex: &str,
) -> Result<String, WalletError> {
    let args = to_request_value(&TransactionRequest {
        method: "eth_sendTransaction",
        params: [TxParams {
            from,
            to,
            value: value_wei_hex,
        }],
    })?;
    let result = request(args).await?;
    result
        .as_string()
        .ok_or_else(|| WalletError::Request("malformed transaction hash".to_string()))
}

/// Parses a decimal ETH amount ("0.01") into 0x-prefixed wei. Rejects
/// malformed input, more than 18 fractional digits, and zero.
pub(crate) fn parse_ether(amount: &str) -> Option<String> {
    const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;
    let amount = amount.trim();
    let (whole, frac) = match amount.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (amount, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 18 {
        return None;
    }
    let whole_wei = if whole.is_empty() {
        0u128
    } else {
        whole.parse::<u128>().ok()?.checked_mul(WEI_PER_ETH)?
    };
    let frac_wei = if frac.is_empty() {
        0u128
    } else {
        let scale = 10u128.pow(18 - frac.len() as u32);
        frac.parse::<u128>().ok()?.checked_mul(scale)?
    };
    let wei = whole_wei.checked_add(frac_wei)?;
    if wei == 0 {
        return None;
    }
    Some(format!("{wei:#x}"))
}

fn provider() -> Option<Object> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str("ethereum"))
        .ok()?
        .dyn_into::<Object>()
        .ok()
}

async fn request(args: JsValue) -> Result<JsValue, WalletError> {
    let provider = provider().ok_or(WalletError::NoProvider)?;
    let request_fn: Function = Reflect::get(&provider, &JsValue::from_str("request"))
        .ok()
        .and_then(|value| value.dyn_into().ok())
        .ok_or(WalletError::NoProvider)?;
    let promise: Promise = request_fn
        .call1(&provider, &args)
        .map_err(request_error)?
        .dyn_into()
        .map_err(|_| WalletError::Request("provider request is not a promise".to_string()))?;
    JsFuture::from(promise).await.map_err(request_error)
}

fn to_request_value<T: Serialize>(value: &T) -> Result<JsValue, WalletError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| WalletError::Request(err.to_string()))
}

fn request_error(value: JsValue) -> WalletError {
    let message = Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "unknown provider error".to_string());
    WalletError::Request(message)
}

/// Shortened 0x1234…abcd form for the header button.
pub(crate) fn truncate_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::{parse_ether, truncate_address};

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(parse_ether("1"), Some("0xde0b6b3a7640000".to_string()));
        assert_eq!(parse_ether("0.01"), Some("0x2386f26fc10000".to_string()));
        assert_eq!(parse_ether(".5"), Some("0x6f05b59d3b20000".to_string()));
        assert_eq!(parse_ether(" 2.5 "), Some("0x22b1c8c1227a0000".to_string()));
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert_eq!(parse_ether(""), None);
        assert_eq!(parse_ether("."), None);
        assert_eq!(parse_ether("abc"), None);
        assert_eq!(parse_ether("1.2.3"), None);
        assert_eq!(parse_ether("-1"), None);
        assert_eq!(parse_ether("0"), None);
        assert_eq!(parse_ether("0.0000000000000000001"), None);
    }

    #[test]
    fn truncates_long_addresses_only() {
        assert_eq!(
            truncate_address("0x52908400098527886E0F7030069857D2E4169EE7"),
            "0x5290…9EE7"
        );
        assert_eq!(truncate_address("0x1234"), "0x1234");
    }
}
