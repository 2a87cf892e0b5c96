//! # Login Screen
//!
//! Two steps: request an OTP for a phone number, then verify it. A verified
//! OTP yields the session token, which is stored even when the screen was
//! closed while the request was in flight.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::utils::mask_phone;

use super::Screen;
use crate::app::context::AppContext;
use crate::app::lifecycle::Liveness;
use crate::app::navigation::Route;
use crate::services::api::auth;

/// Where the user is in the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    EnterPhone,
    EnterOtp { phone: String },
    Verified,
}

#[derive(Debug, Default)]
struct LoginForm {
    phase: LoginPhase,
    busy: bool,
    error: Option<String>,
    info: Option<String>,
}

#[derive(Clone)]
pub struct LoginScreen {
    context: AppContext,
    liveness: Liveness,
    form: Arc<RwLock<LoginForm>>,
}

impl LoginScreen {
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            liveness: Liveness::new(),
            form: Arc::new(RwLock::new(LoginForm::default())),
        }
    }

    pub fn phase(&self) -> LoginPhase {
        self.form.read().phase.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.form.read().busy
    }

    pub fn error(&self) -> Option<String> {
        self.form.read().error.clone()
    }

    pub fn info(&self) -> Option<String> {
        self.form.read().info.clone()
    }

    /// Ask for an OTP. Returns `true` when the backend sent one.
    pub async fn request_otp(&self, phone: &str) -> bool {
        let phone = phone.trim().to_string();
        self.start();

        let result = auth::send_otp(self.context.api(), &phone)
            .await
            .and_then(|r| r.into_result());
        if !self.liveness.is_alive() {
            return false;
        }

        let mut form = self.form.write();
        form.busy = false;
        match result {
            Ok(_) => {
                form.info = Some(format!("OTP sent to {}", mask_phone(&phone)));
                form.phase = LoginPhase::EnterOtp { phone };
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "OTP request failed");
                form.error = Some(e.user_message());
                false
            }
        }
    }

    /// Verify the OTP for the phone number of the previous step.
    pub async fn verify_otp(&self, otp: &str) -> bool {
        let LoginPhase::EnterOtp { phone } = self.phase() else {
            self.form.write().error = Some("Request an OTP first".to_string());
            return false;
        };
        self.start();

        let result = auth::verify_otp(self.context.api(), &phone, otp.trim())
            .await
            .and_then(|r| r.into_result());
        let alive = self.liveness.is_alive();

        match result {
            Ok(verified) => {
                tracing::info!(
                    phone = %mask_phone(&phone),
                    new_user = verified.is_new_user,
                    "OTP verified"
                );
                self.context.complete_login(verified.auth_token, alive);
                if alive {
                    let mut form = self.form.write();
                    form.busy = false;
                    form.phase = LoginPhase::Verified;
                }
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "OTP verification failed");
                if alive {
                    let mut form = self.form.write();
                    form.busy = false;
                    form.error = Some(e.user_message());
                }
                false
            }
        }
    }

    /// Back to the phone step.
    pub fn change_number(&self) {
        let mut form = self.form.write();
        *form = LoginForm::default();
    }

    fn start(&self) {
        let mut form = self.form.write();
        form.busy = true;
        form.error = None;
        form.info = None;
    }
}

#[async_trait]
impl Screen for LoginScreen {
    fn route(&self) -> Route {
        Route::Login
    }

    fn context(&self) -> &AppContext {
        &self.context
    }

    fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    async fn load(&self) {}

    fn summary(&self) -> String {
        let form = self.form.read();
        let step = match &form.phase {
            LoginPhase::EnterPhone => "Enter your phone number".to_string(),
            LoginPhase::EnterOtp { phone } => format!("Enter the OTP sent to {}", mask_phone(phone)),
            LoginPhase::Verified => "Logged in".to_string(),
        };
        match &form.error {
            Some(error) => format!("{} ({})", step, error),
            None => step,
        }
    }
}
