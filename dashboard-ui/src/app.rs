use leptos::*;

use crate::components::DashboardPage;

#[component]
pub fn App() -> impl IntoView {
    view! { <DashboardPage/> }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn mounts_without_panicking() {
        leptos::mount_to_body(super::App);
    }
}
