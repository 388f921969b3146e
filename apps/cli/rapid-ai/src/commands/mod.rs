pub mod ask;
pub mod settings;

use crate::state::SettingsState;

use client_core::{KeyValidator, RequestDispatcher, Transport};

/// Everything a command needs: settings plus the two core operations.
pub struct CommandContext<T> {
    pub state: SettingsState,
    pub dispatcher: RequestDispatcher<T>,
    pub validator: KeyValidator<T>,
}

impl<T: Transport + Clone> CommandContext<T> {
    /// Share one transport between the dispatcher and the validator.
    pub fn new(state: SettingsState, transport: T, endpoint: url::Url) -> Self {
        Self {
            state,
            dispatcher: RequestDispatcher::new(transport.clone(), endpoint.clone()),
            validator: KeyValidator::new(transport, endpoint),
        }
    }
}
