use crate::config::CONFIG;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{ComboBuilder, Panel};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=CONFIG.name />
        <main class="container">
            <header class="page-header">
                <h1>{CONFIG.name}</h1>
                <p class="tagline">{CONFIG.tagline}</p>
                <nav>
                    <a href=CONFIG.endpoints.generate_page>"Generate scripts \u{2192}"</a>
                </nav>
            </header>

            <Panel
                title="Build category / subcategory combos"
                hint="Add as many combos as you need, then submit them together. Submitting replaces what the backend currently holds."
            >
                <ComboBuilder />
            </Panel>
        </main>
    }
}
