//! Predefined instructions applied to the selected text.

use serde::{Deserialize, Serialize};

/// A one-click transformation of the selection.
///
/// Quick actions never carry the free-form prompt; the instruction becomes
/// the system message and the selection the only user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickAction {
    CorrectGrammar,
    Format,
    Translate { language: String },
}

impl QuickAction {
    pub fn translate(language: impl Into<String>) -> Self {
        QuickAction::Translate {
            language: language.into(),
        }
    }

    /// The instruction string sent as the head of the system message.
    ///
    /// The wording is what the completion service has always received, odd
    /// articles included; changing it changes the service's behavior.
    pub fn instruction(&self) -> String {
        match self {
            QuickAction::CorrectGrammar => String::from("You are an a grammar corrector"),
            QuickAction::Format => String::from("You are an markdown formatter"),
            QuickAction::Translate { language } => format!("You are an {language} translator"),
        }
    }

    /// Short name used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            QuickAction::CorrectGrammar => "grammar",
            QuickAction::Format => "format",
            QuickAction::Translate { .. } => "translate",
        }
    }
}
