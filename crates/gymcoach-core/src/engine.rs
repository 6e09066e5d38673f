//! Coach facade: one entry point for the desktop app and the CLI.
//!
//! Owns configuration, storage, the session and the API client, and applies
//! the input checks every surface shares before anything is uploaded.

use std::path::{Path, PathBuf};

use crate::api::{
    AnalysisResponse, AnalyzeRequest, ApiClient, GenerateRequest, GeneratedImage, ProgressFn,
};
use crate::config::CoachConfig;
use crate::error::{CoachError, CoachResult};
use crate::scroll_stack::StackLayout;
use crate::session::Session;
use crate::storage::Storage;
use crate::types::{AnalysisRecord, User};
use crate::upload::{MediaFile, MediaKind};

pub const MISSING_ANALYSIS_INPUTS: &str = "Please provide both videos and an exercise name.";
pub const MISSING_IMAGE_INPUT: &str = "Please provide an image.";

/// Exercise prompt sent with generation requests when none is given.
pub const DEFAULT_GENERATE_EXERCISE: &str = "rod";

const DB_FILE: &str = "gymcoach.redb";

#[derive(Clone)]
pub struct Coach {
    config: CoachConfig,
    data_dir: PathBuf,
    storage: Storage,
    session: Session,
    api: ApiClient,
}

impl Coach {
    /// Open (or create) the data directory and build the client.
    pub fn new(data_dir: impl AsRef<Path>, config: CoachConfig) -> CoachResult<Self> {
        config.validate()?;
        let data_dir = data_dir.as_ref().to_path_buf();
        let storage = Storage::new(data_dir.join(DB_FILE))?;
        let session = Session::open(storage.clone())?;
        let api = ApiClient::new(&config)?;

        tracing::info!(
            data_dir = ?data_dir,
            analyze_url = %config.endpoints.analyze_url,
            generate_configured = config.endpoints.generate_url.is_some(),
            "Coach initialized"
        );

        Ok(Self {
            config,
            data_dir,
            storage,
            session,
            api,
        })
    }

    pub fn config(&self) -> &CoachConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Card stack layout using the configured shrink step.
    pub fn stack_layout(&self, count: usize) -> StackLayout {
        StackLayout::new(count, self.config.stack)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Session
    // ═══════════════════════════════════════════════════════════════════════

    /// Log in, checking credentials remotely only when a login URL is set.
    pub async fn login(&self, email: &str, password: &str) -> CoachResult<User> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(CoachError::InvalidInput(
                crate::session::MISSING_FIELDS_MESSAGE.to_string(),
            ));
        }
        match self.api.login(email.trim(), password).await {
            Ok(true) => tracing::debug!("Login endpoint accepted credentials"),
            Ok(false) => {}
            Err(CoachError::Http {
                status: 401 | 403,
                body,
            }) => {
                tracing::info!("Login endpoint refused credentials: {}", body);
                return Err(CoachError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        }
        self.session.login(email, password)
    }

    pub fn logout(&self) -> CoachResult<()> {
        self.session.logout()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Inference
    // ═══════════════════════════════════════════════════════════════════════

    /// Compare a user's video against a trainer's and record the result.
    ///
    /// The logged-in email is sent along; it is empty when logged out.
    pub async fn analyze(
        &self,
        trainer_video: Option<MediaFile>,
        user_video: Option<MediaFile>,
        exercise_name: &str,
        on_progress: Option<ProgressFn>,
    ) -> CoachResult<AnalysisResponse> {
        let exercise_name = exercise_name.trim();
        let (Some(trainer_video), Some(user_video)) = (trainer_video, user_video) else {
            return Err(CoachError::InvalidInput(MISSING_ANALYSIS_INPUTS.to_string()));
        };
        if exercise_name.is_empty() {
            return Err(CoachError::InvalidInput(MISSING_ANALYSIS_INPUTS.to_string()));
        }
        trainer_video.ensure_kind(MediaKind::Video)?;
        user_video.ensure_kind(MediaKind::Video)?;

        let email = self.session.email();
        let request = AnalyzeRequest {
            trainer_video,
            user_video,
            exercise_name: exercise_name.to_string(),
            email: email.clone(),
        };
        let response = self.api.analyze_movement(request, on_progress).await?;

        let record = AnalysisRecord::from_response(exercise_name, &email, &response);
        if let Err(e) = self.storage.save_analysis(&record) {
            // The result is still shown; only the history entry is lost.
            tracing::warn!("Failed to record analysis history: {}", e);
        }
        Ok(response)
    }

    /// Request a corrected-form image for one frame.
    pub async fn generate(
        &self,
        image: Option<MediaFile>,
        exercise_name: Option<&str>,
        error_description: Option<&str>,
    ) -> CoachResult<GeneratedImage> {
        let Some(image) = image else {
            return Err(CoachError::InvalidInput(MISSING_IMAGE_INPUT.to_string()));
        };
        image.ensure_kind(MediaKind::Image)?;

        let exercise_name = exercise_name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_GENERATE_EXERCISE);

        self.api
            .generate_image(GenerateRequest {
                user_image: image,
                exercise_name: exercise_name.to_string(),
                error_description: error_description.map(str::to_string),
            })
            .await
    }

    pub async fn chat(&self, message: &str) -> CoachResult<String> {
        self.api.chat(message).await
    }

    // ═══════════════════════════════════════════════════════════════════════
    // History
    // ═══════════════════════════════════════════════════════════════════════

    pub fn history(&self) -> CoachResult<Vec<AnalysisRecord>> {
        self.storage.list_analyses()
    }

    pub fn delete_history_entry(&self, id: &str) -> CoachResult<bool> {
        self.storage.delete_analysis(id)
    }
}
