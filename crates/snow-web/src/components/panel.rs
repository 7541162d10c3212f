use leptos::prelude::*;

/// Titled card used to split each page into steps.
#[component]
pub fn Panel(#[prop(into)] title: String, #[prop(optional, into)] hint: Option<String>, children: Children) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel-title">{title}</h2>
            {hint.map(|hint| view! { <p class="panel-hint">{hint}</p> })}
            <div class="panel-body">{children()}</div>
        </section>
    }
}
