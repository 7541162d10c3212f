use crate::config::CONFIG;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Panel, ScriptGenerator};

#[component]
pub fn GeneratePage() -> impl IntoView {
    let title = format!("Generate Scripts - {}", CONFIG.name);

    view! {
        <Title text=title />
        <main class="container">
            <header class="page-header">
                <h1>"Generate ServiceNow Scripts"</h1>
                <nav>
                    <a href="/">"\u{2190} back to combos"</a>
                </nav>
            </header>

            <Panel
                title="onChange client scripts"
                hint="Paste each script into a ServiceNow onChange client script on the matching field."
            >
                <ScriptGenerator />
            </Panel>
        </main>
    }
}
