//! Tip dialog: sends ETH to the configured address through the connected
//! wallet provider. The receiving address is baked in at build time and all
//! signing stays with the provider; nothing here touches keys.

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::wallet;

const DEFAULT_AMOUNT: &str = "0.01";

fn tip_address() -> Option<&'static str> {
    option_env!("EPICFOLIO_TIP_ADDRESS").or(option_env!("TRUNK_PUBLIC_TIP_ADDRESS"))
}

#[derive(Properties, PartialEq)]
pub(crate) struct TipProps {
    pub account: Option<String>,
}

#[function_component(Tip)]
pub(crate) fn tip(props: &TipProps) -> Html {
    let open = use_state(|| false);
    let amount = use_state(|| DEFAULT_AMOUNT.to_string());
    let pending = use_state(|| false);
    let status = use_state(|| None::<String>);

    let can_tip = props.account.is_some() && tip_address().is_some();

    let on_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            status.set(None);
        })
    };
    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_send = {
        let amount = amount.clone();
        let pending = pending.clone();
        let status = status.clone();
        let open = open.clone();
        let account = props.account.clone();
        Callback::from(move |_: MouseEvent| {
            if *pending {
                return;
            }
            let Some(from) = account.clone() else {
                return;
            };
            let Some(to) = tip_address() else {
                return;
            };
            let Some(value) = wallet::parse_ether(&amount) else {
                status.set(Some("Enter a positive ETH amount.".to_string()));
                return;
            };
            pending.set(true);
            status.set(None);
            let pending = pending.clone();
            let status = status.clone();
            let open = open.clone();
            spawn_local(async move {
                match wallet::send_transaction(&from, to, &value).await {
                    Ok(hash) => {
                        gloo::console::log!("tip sent", hash);
                        open.set(false);
                    }
                    Err(err) => status.set(Some(err.to_string())),
                }
                pending.set(false);
            });
        })
    };

    let send_label = if *pending {
        "Sending…"
    } else if props.account.is_some() {
        "Send Tip"
    } else {
        "Connect wallet"
    };

    html! {
        <>
            <button class="btn-tip" onclick={on_open}>{ "Tip" }</button>
            if *open {
                <div class="modal-overlay">
                    <div class="modal-backdrop" onclick={on_close.clone()} />
                    <div class="glass modal-card">
                        <h3 class="modal-title">{ "Send a tip" }</h3>
                        <p class="modal-subtitle">
                            { "Support the craft. Sends ETH to the configured address." }
                        </p>
                        if tip_address().is_none() {
                            <p class="modal-hint">
                                { "Set EPICFOLIO_TIP_ADDRESS at build time to enable tipping." }
                            </p>
                        }
                        <label class="modal-label">{ "Amount (ETH)" }</label>
                        <input class="modal-input" value={(*amount).clone()} oninput={on_amount} />
                        if let Some(message) = (*status).clone() {
                            <p class="modal-error">{ message }</p>
                        }
                        <div class="modal-actions">
                            <button class="btn-plain" onclick={on_close}>{ "Close" }</button>
                            <button
                                class="btn-send"
                                disabled={!can_tip || *pending}
                                onclick={on_send}
                            >
                                { send_label }
                            </button>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
