use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::fetch_generated_scripts;
use crate::browser;
use crate::components::{CopyButton, DoneButton};
use crate::config::CONFIG;

/// "Generate" form plus the two script outputs it fills.
///
/// Each submit fires its own request; nothing de-duplicates them, so when two
/// are in flight the one that resolves last decides what the textareas show.
#[component]
pub fn ScriptGenerator() -> impl IntoView {
    let category_script = RwSignal::new(String::new());
    let subcategory_script = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(async move {
            match fetch_generated_scripts().await {
                Ok(payload) => {
                    category_script.set(payload.category_based_on_subcat_script);
                    subcategory_script.set(payload.subcat_based_on_category_script);
                }
                Err(err) => browser::console_error(&format!("Error: {}", err)),
            }
        });
    };

    view! {
        <form id=CONFIG.dom.generate_form on:submit=on_submit>
            <button type="submit" class="btn btn-primary">"Generate Scripts"</button>
        </form>

        <ScriptOutput
            id=CONFIG.dom.category_script_textarea
            title="Category script (onChange of Subcategory)"
            script=category_script
        />
        <ScriptOutput
            id=CONFIG.dom.subcategory_script_textarea
            title="Subcategory script (onChange of Category)"
            script=subcategory_script
        />
    }
}

#[component]
fn ScriptOutput(id: &'static str, title: &'static str, script: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="script-output">
            <div class="script-header">
                <strong>{title}</strong>
                <CopyButton target=id />
                <DoneButton />
            </div>
            <textarea id=id class="code-box" rows="20" readonly prop:value=move || script.get()></textarea>
        </div>
    }
}
