mod about;
mod app_router;
mod contact;
mod effects;
mod home;
mod layout;
mod project_card;
mod projects;
mod scroll_policy;
mod showcase;
mod skills;
mod testimonials;
mod tip;
mod wallet;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app_router::{switch, Route};
use crate::layout::Layout;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    gloo::console::log!("epicfolio boot");
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::App;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn app_mounts_into_a_root() {
        console_error_panic_hook::set_once();
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let _handle = yew::Renderer::<App>::with_root(root).render();
    }
}
