//! System message construction for the three request shapes.

use models::{CompletionRequest, CompletionRequestBuilder, ModelError};

use common::RedactedApiKey;

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

pub const DIRECT_ANSWER_DIRECTIVE: &str =
    "Give direct answer. Do not include any explanation or any accompanying text";

const SELECTION_ASSISTANT_PREAMBLE: &str = "The first message is the selected text by the user. \
     You are a helpful AI assistant for markdown editor.";

const DAY_FORMAT: &str = "%Y-%m-%d";
const DAY_WITH_WEEKDAY_FORMAT: &str = "%Y-%m-%d %A";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Which of the mutually exclusive message layouts a call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptShape<'a> {
    /// `[system: instruction, user: selection]`. The prompt is not sent.
    QuickAction {
        instruction: &'a str,
        selection: &'a str,
    },
    /// `[system: assistant, user: selection, user: prompt]`.
    Selection { selection: &'a str, prompt: &'a str },
    /// `[system: minimal, user: prompt]`.
    Plain { prompt: &'a str },
}

impl<'a> PromptShape<'a> {
    /// Pick the shape from the inputs present.
    ///
    /// An empty selection counts as absent, and an instruction without a
    /// selection has nothing to act on, so both fall back to [`PromptShape::Plain`].
    pub fn resolve(
        prompt: &'a str,
        selected_text: Option<&'a str>,
        system_instruction: Option<&'a str>,
    ) -> Self {
        match (selected_text.filter(|s| !s.is_empty()), system_instruction) {
            (Some(selection), Some(instruction)) => PromptShape::QuickAction {
                instruction,
                selection,
            },
            (Some(selection), None) => PromptShape::Selection { selection, prompt },
            (None, _) => PromptShape::Plain { prompt },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PromptShape::QuickAction { .. } => "quick-action",
            PromptShape::Selection { .. } => "selection",
            PromptShape::Plain { .. } => "plain",
        }
    }

    /// System message for this shape, stamped with `now`.
    pub fn system_message<Tz>(&self, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let time = now.format(TIME_FORMAT);
        match self {
            PromptShape::QuickAction { instruction, .. } => format!(
                "{instruction}. Today is {}, local time is {time}. {DIRECT_ANSWER_DIRECTIVE}",
                now.format(DAY_WITH_WEEKDAY_FORMAT)
            ),
            PromptShape::Selection { .. } => format!(
                "{SELECTION_ASSISTANT_PREAMBLE} Today is {}, local time is {time}. {DIRECT_ANSWER_DIRECTIVE}",
                now.format(DAY_WITH_WEEKDAY_FORMAT)
            ),
            PromptShape::Plain { .. } => format!(
                "Today is {}, local time is {time}. {DIRECT_ANSWER_DIRECTIVE}",
                now.format(DAY_FORMAT)
            ),
        }
    }

    /// User messages in wire order.
    pub fn user_messages(&self) -> Vec<&'a str> {
        match *self {
            PromptShape::QuickAction { selection, .. } => vec![selection],
            PromptShape::Selection { selection, prompt } => vec![selection, prompt],
            PromptShape::Plain { prompt } => vec![prompt],
        }
    }

    #[track_caller]
    pub fn build_request<Tz>(
        &self,
        credential: &RedactedApiKey,
        now: &DateTime<Tz>,
    ) -> Result<CompletionRequest, ModelError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.user_messages()
            .into_iter()
            .fold(
                CompletionRequestBuilder::default()
                    .with_credential(credential.clone())
                    .with_system_message(self.system_message(now)),
                |builder, message| builder.with_user_message(message),
            )
            .build()
    }
}
