use crate::error::RapidAiError;

use client_core::AppSettings;
use client_core::error::ConfigError;

use common::RedactedApiKey;

use std::path::PathBuf;
use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{Mutex, RwLock, mpsc, oneshot};

/// Commands that mutate the settings.
///
/// All mutations go through the settings actor via these commands, which
/// persists each change before acknowledging it.
#[derive(Debug, Clone)]
pub enum SettingsCommand {
    /// Replace the completion-service credential
    SetCredential(String),

    /// Change the quick-translate target language
    SetTranslateTo(String),
}

type Envelope = (SettingsCommand, oneshot::Sender<Result<(), ConfigError>>);

/// Settings manager.
///
/// Uses an actor pattern so mutations are serialized and persisted in
/// order. Reads take a snapshot under a read lock at call time, so a
/// credential changed while a request is in flight only affects later calls.
#[derive(Clone)]
pub struct SettingsState {
    /// Channel to send mutation commands to the actor
    command_tx: Arc<Mutex<Option<mpsc::Sender<Envelope>>>>,

    /// Shared read access to the current settings
    settings: Arc<RwLock<AppSettings>>,

    /// Where the actor persists changes
    config_dir: PathBuf,

    /// Track if actor has been initialized
    actor_init: Arc<Mutex<bool>>,

    /// The in-memory key came from the environment and must not be written out
    key_from_env: bool,
}

impl SettingsState {
    /// Create a new state manager around already-loaded settings.
    ///
    /// The actor is lazily spawned on first update within an async context.
    pub fn new(settings: AppSettings, config_dir: PathBuf) -> Self {
        Self {
            command_tx: Arc::new(Mutex::new(None)),
            settings: Arc::new(RwLock::new(settings)),
            config_dir,
            actor_init: Arc::new(Mutex::new(false)),
            key_from_env: false,
        }
    }

    /// Mark the current key as taken from the environment.
    ///
    /// Saves then keep the file's key empty until a key is set explicitly.
    pub fn with_key_from_env(mut self, key_from_env: bool) -> Self {
        self.key_from_env = key_from_env;
        self
    }

    /// Apply a settings change and wait until it is persisted.
    pub async fn update(&self, cmd: SettingsCommand) -> Result<(), RapidAiError> {
        self.ensure_actor().await;

        let tx = self
            .command_tx
            .lock()
            .await
            .clone()
            .ok_or_else(|| RapidAiError::state("Actor not initialized"))?;

        let (reply_tx, reply_rx) = oneshot::channel();
        tx.send((cmd, reply_tx))
            .await
            .map_err(|e| RapidAiError::state(format!("Settings actor died: {e}")))?;

        reply_rx
            .await
            .map_err(|e| RapidAiError::state(format!("Settings actor dropped reply: {e}")))??;

        Ok(())
    }

    /// Copy of the current settings.
    pub async fn snapshot(&self) -> AppSettings {
        self.settings.read().await.clone()
    }

    /// The credential as it is right now.
    pub async fn credential(&self) -> RedactedApiKey {
        self.settings.read().await.credential()
    }

    pub async fn translate_to(&self) -> String {
        self.settings.read().await.translate_to.clone()
    }

    /// Ensure actor is spawned (called lazily from async context)
    async fn ensure_actor(&self) {
        let mut init_guard = self.actor_init.lock().await;
        if !*init_guard {
            let (tx, rx) = mpsc::channel(16);

            // Store tx BEFORE spawning to avoid race
            *self.command_tx.lock().await = Some(tx);

            tokio::spawn(settings_actor(
                rx,
                Arc::clone(&self.settings),
                self.config_dir.clone(),
                self.key_from_env,
            ));
            *init_guard = true;
            info!("Settings actor spawned");
        }
    }
}

/// The settings actor task.
///
/// Owns all writes: applies each command to a copy, saves it, and only
/// publishes the copy once the save succeeded.
async fn settings_actor(
    mut command_rx: mpsc::Receiver<Envelope>,
    settings: Arc<RwLock<AppSettings>>,
    config_dir: PathBuf,
    mut key_from_env: bool,
) {
    while let Some((cmd, reply)) = command_rx.recv().await {
        let mut next = settings.read().await.clone();
        let mut next_from_env = key_from_env;

        match &cmd {
            SettingsCommand::SetCredential(key) => {
                info!("Updating API key ({} chars)", key.len());
                next.rapid_api_key = key.clone();
                next_from_env = false;
            }
            SettingsCommand::SetTranslateTo(language) => {
                info!("Updating translation language to {language}");
                next.translate_to = language.clone();
            }
        }

        let outcome = if next_from_env {
            let mut on_disk = next.clone();
            on_disk.rapid_api_key.clear();
            on_disk.save(&config_dir)
        } else {
            next.save(&config_dir)
        };

        match &outcome {
            Ok(()) => {
                *settings.write().await = next;
                key_from_env = next_from_env;
            }
            Err(e) => warn!("Settings change not applied: {e}"),
        }

        if reply.send(outcome).is_err() {
            warn!("Settings update requester went away before the reply");
        }
    }

    warn!("Settings actor stopped");
}
