use crate::commands::CommandContext;
use crate::error::RapidAiError;

use client_core::Transport;

use models::{CompletionResult, QuickAction};

use log::{debug, info};

/// Free-form completion, optionally about a selection.
///
/// A blank prompt never reaches the network. The credential is read from
/// settings at call time.
pub async fn ask<T: Transport>(
    ctx: &CommandContext<T>,
    prompt: &str,
    selection: Option<&str>,
) -> CompletionResult {
    if prompt.trim().is_empty() {
        debug!("Blank prompt, nothing sent");
        return CompletionResult::empty_prompt();
    }

    let credential = ctx.state.credential().await;
    info!(
        "Asking ({} prompt chars, selection: {})",
        prompt.len(),
        selection.is_some_and(|s| !s.is_empty())
    );
    ctx.dispatcher
        .dispatch(&credential, prompt, selection, None)
        .await
}

/// Which quick action the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickActionKind {
    Grammar,
    Format,
    Translate,
}

/// Run a quick action on `selection`.
///
/// Quick actions only make sense on selected text, so an empty selection is
/// rejected as input. Translation targets the configured language.
pub async fn quick_action<T: Transport>(
    ctx: &CommandContext<T>,
    kind: QuickActionKind,
    selection: &str,
) -> Result<CompletionResult, RapidAiError> {
    if selection.trim().is_empty() {
        return Err(RapidAiError::input("Quick actions need selected text"));
    }

    let action = match kind {
        QuickActionKind::Grammar => QuickAction::CorrectGrammar,
        QuickActionKind::Format => QuickAction::Format,
        QuickActionKind::Translate => QuickAction::translate(ctx.state.translate_to().await),
    };

    let credential = ctx.state.credential().await;
    Ok(ctx
        .dispatcher
        .quick_action(&credential, selection, &action)
        .await)
}
