use leptos::prelude::*;
use std::future::Future;

use crate::browser::{self, Clipboard, SystemClipboard};
use crate::config::CONFIG;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

impl CopyState {
    pub fn label(self) -> &'static str {
        match self {
            CopyState::Idle => CONFIG.copy.idle_label,
            CopyState::Copied => CONFIG.copy.copied_label,
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            CopyState::Idle => CONFIG.copy.idle_background,
            CopyState::Copied => CONFIG.copy.copied_background,
        }
    }
}

/// Write the contents of textarea `target` (looked up with `read`) to the
/// clipboard, then show the copied look for the feedback window before going
/// back to idle. Failures only reach the console.
pub async fn copy_code<C, R, P, Fut>(clipboard: &C, target: &str, read: R, mut show: impl FnMut(CopyState), pause: P)
where
    C: Clipboard,
    R: FnOnce(&str) -> Option<String>,
    P: FnOnce(u32) -> Fut,
    Fut: Future<Output = ()>,
{
    let Some(text) = read(target) else {
        browser::console_error(&format!("Clipboard failed: no textarea #{}", target));
        return;
    };

    match clipboard.write_text(&text).await {
        Ok(()) => {
            show(CopyState::Copied);
            pause(CONFIG.copy.duration_ms).await;
            show(CopyState::Idle);
        }
        Err(err) => browser::console_error(&format!("Clipboard failed: {}", err)),
    }
}

/// Copies the current contents of the textarea with id `target`.
#[component]
pub fn CopyButton(#[prop(into)] target: String) -> impl IntoView {
    let state = RwSignal::new(CopyState::default());

    let on_click = move |_| {
        let target = target.clone();
        leptos::task::spawn_local(async move {
            copy_code(
                &SystemClipboard,
                &target,
                browser::textarea_value,
                |s| state.set(s),
                browser::sleep_ms,
            )
            .await;
        });
    };

    view! {
        <button
            type="button"
            class="copy-btn"
            title="Copy to clipboard"
            style:background=move || state.get().background()
            on:click=on_click
        >
            {move || state.get().label()}
        </button>
    }
}
