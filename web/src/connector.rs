//! Asks the user for their Starknet address through the browser prompt.
use ui::{Error, WalletConnector, WalletId};
use wasm_bindgen::JsValue;

const PROMPT: &str = "Enter your Starknet wallet address (0x...)";

#[derive(Clone, Copy, Default)]
pub struct PromptConnector;

impl WalletConnector for PromptConnector {
    fn connect(&self) -> Result<WalletId, Error> {
        let window = web_sys::window()
            .ok_or_else(|| Error::WalletUnavailable("no browser window available".to_string()))?;

        match window.prompt_with_message(PROMPT).map_err(js_error)? {
            Some(answer) if !answer.trim().is_empty() => WalletId::parse(&answer),
            _ => Err(Error::ConnectionCancelled),
        }
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Connector(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
