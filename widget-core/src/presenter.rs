use crate::view::{View, ViewState};

/// Show `message` in the error region; the content card is hidden.
pub fn show_error<V: View + ?Sized>(view: &mut V, message: &str) {
    view.set_state(ViewState::Error(message.to_string()));
}

/// Hide the error region. Leaves the content card alone.
pub fn clear_error<V: View + ?Sized>(view: &mut V) {
    if view.state().is_error() {
        view.set_state(ViewState::Idle);
    }
}
