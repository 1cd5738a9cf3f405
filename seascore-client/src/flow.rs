use crate::capture::{CameraAdapter, CaptureError};
use crate::transport::ProofTransport;
use seascore_core::{
    Challenge, CompletionLedger, DecisionPolicy, LedgerError, ProofImage, ValidationRequest,
    Verdict,
};
use uuid::Uuid;

/// Where a submission attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Waiting for a photo
    Capturing,

    /// A validation request is in flight
    Submitting,

    /// A verdict is on screen
    VerdictShown,

    /// The proof was accepted and recorded; terminal
    Accepted,
}

/// Errors from driving the submission flow
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("No photo captured yet")]
    NoImage,

    #[error("No verdict to act on")]
    NoVerdict,

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Operation not allowed in state {0:?}")]
    InvalidState(FlowState),

    #[error("Verdict is not valid, cannot accept")]
    VerdictNotValid,

    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Drives one challenge submission from capture to acceptance.
///
/// State machine: `Capturing → Submitting → VerdictShown → Accepted`, with
/// retry returning to `Capturing`. Every transport outcome, success or
/// failure, lands in `VerdictShown` with a verdict to display; acceptance is
/// always an explicit call, never automatic.
pub struct SubmissionFlow<T: ProofTransport> {
    challenge: Challenge,
    camera: CameraAdapter,
    transport: T,
    policy: DecisionPolicy,
    state: FlowState,
    image: Option<ProofImage>,
    verdict: Option<Verdict>,
    accepted_image: Option<ProofImage>,
}

impl<T: ProofTransport> SubmissionFlow<T> {
    /// Create a flow for one challenge
    pub fn new(
        challenge: Challenge,
        camera: CameraAdapter,
        transport: T,
        policy: DecisionPolicy,
    ) -> Self {
        Self {
            challenge,
            camera,
            transport,
            policy,
            state: FlowState::Capturing,
            image: None,
            verdict: None,
            accepted_image: None,
        }
    }

    // ===== Getters =====

    /// Current flow state
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Challenge being attempted
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// Verdict of the latest attempt, if one is on screen
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Photo pending submission, if one was captured
    pub fn captured_image(&self) -> Option<&ProofImage> {
        self.image.as_ref()
    }

    /// Photo from the accepted submission, kept until the flow is dropped
    pub fn accepted_image(&self) -> Option<&ProofImage> {
        self.accepted_image.as_ref()
    }

    /// Whether the camera session is currently open
    pub fn camera_active(&self) -> bool {
        self.camera.is_active()
    }

    // ===== Capture =====

    /// Start the camera for this attempt
    pub fn start_camera(&mut self) -> Result<(), FlowError> {
        if self.state != FlowState::Capturing {
            return Err(FlowError::InvalidState(self.state));
        }
        self.camera.start()?;
        Ok(())
    }

    /// Capture a photo for this attempt.
    ///
    /// Returns `false` when no frame was available. After a successful
    /// capture the camera is stopped; the frame is kept as the pending image.
    pub fn capture(&mut self) -> Result<bool, FlowError> {
        if self.state != FlowState::Capturing {
            return Err(FlowError::InvalidState(self.state));
        }
        match self.camera.capture_photo()? {
            Some(image) => {
                self.camera.stop();
                tracing::debug!(
                    "📸 Captured {} bytes for {}",
                    image.len(),
                    self.challenge.id
                );
                self.image = Some(image);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Use an already-encoded photo instead of a live capture
    pub fn attach_image(&mut self, image: ProofImage) -> Result<(), FlowError> {
        if self.state != FlowState::Capturing {
            return Err(FlowError::InvalidState(self.state));
        }
        self.image = Some(image);
        Ok(())
    }

    // ===== Submission =====

    /// Submit the captured photo for validation.
    ///
    /// The state flips to `Submitting` before the request is awaited, so a
    /// second call while one is in flight fails immediately. Transport
    /// failures become a submission-error verdict rather than an error here;
    /// all outcomes end in `VerdictShown`.
    pub async fn submit(&mut self) -> Result<Verdict, FlowError> {
        match self.state {
            FlowState::Capturing => {}
            FlowState::Submitting => return Err(FlowError::SubmissionInFlight),
            other => return Err(FlowError::InvalidState(other)),
        }
        let image = self.image.clone().ok_or(FlowError::NoImage)?;

        self.state = FlowState::Submitting;
        let attempt = Uuid::new_v4();
        let request = ValidationRequest::for_challenge(image, &self.challenge);
        tracing::info!(
            "📤 Attempt {} for challenge {}",
            attempt,
            self.challenge.id
        );

        let verdict = match self.transport.submit(&request).await {
            Ok(response) => self
                .policy
                .evaluate(&self.challenge.title, &response.detections),
            Err(err) => {
                tracing::warn!("Attempt {} failed in transport: {}", attempt, err);
                Verdict::submission_error(self.challenge.title.clone())
            }
        };

        self.state = FlowState::VerdictShown;
        self.verdict = Some(verdict.clone());
        Ok(verdict)
    }

    // ===== Verdict handling =====

    /// Retake the photo: discards the pending capture and verdict
    pub fn retry(&mut self) -> Result<(), FlowError> {
        if self.state != FlowState::VerdictShown {
            return Err(FlowError::InvalidState(self.state));
        }
        self.image = None;
        self.verdict = None;
        self.state = FlowState::Capturing;
        tracing::debug!("🔁 Retrying challenge {}", self.challenge.id);
        Ok(())
    }

    /// Accept a valid verdict: records the stamp exactly once and ends the
    /// flow. The accepted photo is retained.
    pub fn accept(&mut self, ledger: &mut dyn CompletionLedger) -> Result<(), FlowError> {
        if self.state != FlowState::VerdictShown {
            return Err(FlowError::InvalidState(self.state));
        }
        let verdict = self.verdict.as_ref().ok_or(FlowError::NoVerdict)?;
        if !verdict.is_valid {
            return Err(FlowError::VerdictNotValid);
        }

        ledger.record(&self.challenge.id, self.challenge.points)?;
        self.accepted_image = self.image.take();
        self.state = FlowState::Accepted;

        tracing::info!(
            "✅ Challenge {} accepted (+{} points)",
            self.challenge.id,
            self.challenge.points
        );
        Ok(())
    }
}
