use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use tracing::trace;

/// Applies one action and returns the effects the runtime should perform.
pub fn update(state: &mut AppState, action: Action) -> Vec<Command> {
    if !matches!(action, Action::Tick) {
        trace!(?action, "update");
    }

    if let UpdateResult::Handled(commands) = features::palette::update(state, &action) {
        return commands;
    }
    if let UpdateResult::Handled(commands) = features::host::update(state, &action) {
        return commands;
    }

    match action {
        Action::Tick | Action::Resize(_, _) => {}
        other => trace!(?other, "unhandled action"),
    }
    Vec::new()
}
