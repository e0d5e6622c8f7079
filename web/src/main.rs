use dioxus::prelude::*;

use ui::components::SiteHeader;

fn main() {
    // Native only; `RUST_LOG` has no effect on wasm, where no logger is installed.
    #[cfg(not(target_arch = "wasm32"))]
    {
        env_logger::init();
        log::info!("launching rig site header");
    }

    dioxus::launch(App);
}

/// The header is mounted explicitly; pages behind its links are served
/// separately (`/abm1559`, `/beaconrunner`).
#[component]
fn App() -> Element {
    rsx! {
        SiteHeader {}
    }
}
