use omikuji_core::state::PickerState;
use omikuji_core::view::EntryView;

/// Render a settled state for the terminal. `None` for states with
/// nothing to show.
pub fn render(state: &PickerState, json: bool) -> Option<String> {
    match state {
        PickerState::Idle | PickerState::Loading => None,
        PickerState::Ready(entry) => {
            let view = EntryView::new(entry);
            if json {
                Some(serde_json::to_string_pretty(&view).unwrap_or_else(|e| {
                    serde_json::json!({ "error": e.to_string() }).to_string()
                }))
            } else {
                Some(view.to_string())
            }
        }
        PickerState::Failed(message) => {
            if json {
                Some(serde_json::json!({ "error": message }).to_string())
            } else {
                Some(format!("error: {message}"))
            }
        }
    }
}
