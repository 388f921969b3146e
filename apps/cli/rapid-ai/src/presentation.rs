//! What the user sees for each [`ResultStatus`].
//!
//! Every failure is surfaced exactly once, either as a short notice or as a
//! dialog that points the user at a fix.

use client_core::{KeyValidator, Transport};

use common::RedactedApiKey;
use models::{CompletionResult, ResultStatus};

use log::debug;

/// Follow-up offered by a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    UpgradePlan,
    Subscribe,
    OpenSettings,
}

impl DialogAction {
    pub fn label(self) -> &'static str {
        match self {
            DialogAction::UpgradePlan => "Upgrade plan",
            DialogAction::Subscribe => "Subscribe",
            DialogAction::OpenSettings => "Go to Settings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Completion text to render into the document
    Render(String),

    /// Transient one-line notice
    Notice(&'static str),

    /// Blocking dialog with a single follow-up action
    Dialog {
        title: &'static str,
        subtitle: &'static str,
        action: DialogAction,
    },
}

/// Map a completion outcome to what the host shows.
pub fn present(result: &CompletionResult) -> Presentation {
    match result.status() {
        ResultStatus::Success => Presentation::Render(result.body().to_string()),
        ResultStatus::InternetDisconnected => {
            Presentation::Notice("Please connect to the internet.")
        }
        ResultStatus::ExceededQuota => Presentation::Dialog {
            title: "Plan quota limit reached",
            subtitle: "It seems your plan has reached its quota limit. Consider upgrading to a higher plan.",
            action: DialogAction::UpgradePlan,
        },
        ResultStatus::UserUnsubscribed => Presentation::Dialog {
            title: "No subscription found",
            subtitle: "You need to subscribe to the API first. You can subscribe from here.",
            action: DialogAction::Subscribe,
        },
        ResultStatus::EmptyApiKey => Presentation::Dialog {
            title: "Missing API Key",
            subtitle: "After you get the API key, connect it from the settings plugin.",
            action: DialogAction::OpenSettings,
        },
        ResultStatus::InvalidApiKey => Presentation::Dialog {
            title: "Invalid API key",
            subtitle: "Please use a valid API key. You can change it from the settings.",
            action: DialogAction::OpenSettings,
        },
        ResultStatus::UnknownError => {
            Presentation::Notice("An Error Occurred. Please try again later")
        }
        ResultStatus::EmptyPrompt => Presentation::Notice("Please enter the prompt"),
    }
}

/// Message and icon shown after a key test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTestStatus {
    pub message: &'static str,
    pub icon: &'static str,
}

pub fn key_test_status(status: ResultStatus) -> KeyTestStatus {
    let (message, icon) = match status {
        ResultStatus::Success => ("It Works Perfctly", "badge-check"),
        ResultStatus::InternetDisconnected => ("Internet Disconnected", "unplug"),
        ResultStatus::ExceededQuota => (
            "Your quota has exceeded the current plan. Please upgrade your plan",
            "shield-alert",
        ),
        ResultStatus::UserUnsubscribed => ("You are not subscribed to the API", "shield-alert"),
        ResultStatus::EmptyApiKey => ("Missing API Key", "key-round"),
        ResultStatus::InvalidApiKey
        | ResultStatus::EmptyPrompt
        | ResultStatus::UnknownError => ("Invalid API Key", "ban"),
    };
    KeyTestStatus { message, icon }
}

/// Anything that can show the progress and outcome of a key test.
pub trait KeyTestSurface {
    fn set_loading_state(&mut self, loading: bool);
    fn set_status_visibility(&mut self, visible: bool);
    fn set_test_status(&mut self, status: &KeyTestStatus);
}

/// Validate `credential` while driving `surface` through the loading states.
///
/// The surface ends with loading off and the status visible, whatever the
/// outcome.
pub async fn run_key_test<S, T>(
    surface: &mut S,
    validator: &KeyValidator<T>,
    credential: &RedactedApiKey,
) -> ResultStatus
where
    S: KeyTestSurface + ?Sized,
    T: Transport,
{
    surface.set_loading_state(true);
    surface.set_status_visibility(false);

    let status = validator.validate(credential).await.status();
    debug!("Key test finished: {status}");

    surface.set_test_status(&key_test_status(status));
    surface.set_status_visibility(true);
    surface.set_loading_state(false);

    status
}
