use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app_router::{Route, NAV_ROUTES};
use crate::effects::FloatingParticles;
use crate::tip::Tip;
use crate::wallet;

#[derive(Properties, PartialEq)]
pub(crate) struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub(crate) fn layout(props: &LayoutProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let account = use_state(|| None::<String>);
    let connecting = use_state(|| false);
    let account_value = (*account).clone();

    let on_connect = {
        let account = account.clone();
        let connecting = connecting.clone();
        Callback::from(move |_: MouseEvent| {
            if *connecting || account.is_some() {
                return;
            }
            connecting.set(true);
            let account = account.clone();
            let connecting = connecting.clone();
            spawn_local(async move {
                match wallet::request_accounts().await {
                    Ok(address) => account.set(Some(address)),
                    Err(err) => gloo::console::warn!("wallet connect failed", err.to_string()),
                }
                connecting.set(false);
            });
        })
    };

    let connect_label = if let Some(address) = account_value.as_deref() {
        wallet::truncate_address(address)
    } else if *connecting {
        "Connecting…".to_string()
    } else {
        "Connect Wallet".to_string()
    };

    let nav_items: Html = NAV_ROUTES
        .iter()
        .map(|&item| {
            let class = if item == route {
                "nav-link nav-link-active"
            } else {
                "nav-link"
            };
            html! {
                <Link<Route> to={item} classes={class}>{ item.label() }</Link<Route>>
            }
        })
        .collect();

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="app-shell">
            <FloatingParticles />

            <header class="site-header">
                <div class="container-g">
                    <div class="glass-premium header-bar">
                        <Link<Route> to={Route::Home} classes="brand">{ "Mustafa" }</Link<Route>>
                        <nav class="header-nav">{ nav_items }</nav>
                        <div class="header-actions">
                            <button
                                class="btn-connect"
                                onclick={on_connect}
                                disabled={!wallet::has_provider()}
                                title={if wallet::has_provider() { "" } else { "No wallet provider detected" }}
                            >
                                { connect_label }
                            </button>
                            <Tip account={account_value} />
                        </div>
                    </div>
                </div>
            </header>

            <main>{ for props.children.iter() }</main>

            <footer class="site-footer">
                <div class="container-g footer-row">
                    <p>
                        { format!("© {year} Mustafa. All rights reserved. ") }
                        <span class="epic-text">{ "Epic" }</span>
                        { " by design." }
                    </p>
                    <p class="footer-note">
                        { "Built with Salesforce expertise, MERN stack craft, and " }
                        <span class="epic-text">{ "epic" }</span>
                        { " development passion." }
                    </p>
                </div>
            </footer>
        </div>
    }
}
