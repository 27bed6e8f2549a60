use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::core::config::DashboardConfig;
use ui::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    // A second init (e.g. hot reload) only fails because a subscriber is already set.
    let _ = dioxus::logger::init(Level::INFO);
    info!("starting web dashboard");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    // `probabilities.json` next to the page, fetched fresh on every load.
    use_context_provider(DashboardConfig::default);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}
