use leptos::prelude::*;

/// Marker class carried by a button once it has been ticked off.
const DONE_CLASS: &str = "done";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoneState {
    #[default]
    Pending,
    Done,
}

impl DoneState {
    fn from_class(class: &str) -> Self {
        if class.split_whitespace().any(|c| c == DONE_CLASS) {
            DoneState::Done
        } else {
            DoneState::Pending
        }
    }

    /// Flip between the two looks, keyed off the marker class.
    pub fn mark_done(&mut self) {
        *self = match DoneState::from_class(&self.class()) {
            DoneState::Done => DoneState::Pending,
            DoneState::Pending => DoneState::Done,
        };
    }

    pub fn label(self) -> &'static str {
        match self {
            DoneState::Pending => "DONE",
            DoneState::Done => "\u{2714}",
        }
    }

    pub fn class(self) -> String {
        match self {
            DoneState::Pending => "btn btn-done".to_string(),
            DoneState::Done => format!("btn btn-done {}", DONE_CLASS),
        }
    }
}

/// Purely visual checkbox-style button; nothing is saved anywhere.
#[component]
pub fn DoneButton() -> impl IntoView {
    let state = RwSignal::new(DoneState::default());

    view! {
        <button
            type="button"
            class=move || state.get().class()
            on:click=move |_| state.update(DoneState::mark_done)
        >
            {move || state.get().label()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_done_flips() {
        let mut state = DoneState::default();
        state.mark_done();
        assert_eq!(state.label(), "\u{2714}");
        assert!(state.class().ends_with(" done"));
    }

    #[test]
    fn test_mark_done_twice_restores_original() {
        let original = DoneState::default();
        let mut state = original;
        state.mark_done();
        state.mark_done();
        assert_eq!(state, original);
        assert_eq!(state.label(), "DONE");
        assert_eq!(state.class(), "btn btn-done");
    }

    #[test]
    fn test_class_detection_ignores_similar_names() {
        assert_eq!(DoneState::from_class("btn btn-done"), DoneState::Pending);
        assert_eq!(DoneState::from_class("btn done"), DoneState::Done);
    }
}
