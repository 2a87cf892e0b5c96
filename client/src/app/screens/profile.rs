//! # Profile Screen

use async_trait::async_trait;
use shared::dto::profile::{ProfileUpdateRequest, UserProfile};
use shared::utils::mask_phone;

use super::{describe, Screen};
use crate::app::context::AppContext;
use crate::app::lifecycle::Liveness;
use crate::app::navigation::Route;
use crate::app::resource::{RefreshOutcome, Resource};
use crate::core::error::Result;
use crate::services::api::{profile, ApiClient, ApiResponse};

async fn fetch_profile(api: &ApiClient) -> Result<ApiResponse<UserProfile>> {
    Ok(profile::get_profile(api).await?.map(|p| p.user))
}

#[derive(Clone)]
pub struct ProfileScreen {
    context: AppContext,
    liveness: Liveness,
    profile: Resource<UserProfile>,
}

impl ProfileScreen {
    pub fn new(context: AppContext) -> Self {
        let liveness = Liveness::new();
        Self {
            profile: Resource::new("profile", liveness.clone()),
            context,
            liveness,
        }
    }

    pub fn profile(&self) -> &Resource<UserProfile> {
        &self.profile
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        let outcome = self.profile.refresh(fetch_profile(self.context.api())).await;
        self.context.handle_refresh(&outcome);
        outcome
    }

    /// Save the changed fields, then reload the profile.
    pub async fn update(&self, update: ProfileUpdateRequest) -> bool {
        let api = self.context.api();
        let outcome = self
            .profile
            .mutate(profile::update_profile(api, &update), fetch_profile(api))
            .await;
        self.context.handle_mutation(&outcome, "Profile updated")
    }

    pub async fn logout(&self) {
        self.context.logout().await;
    }
}

#[async_trait]
impl Screen for ProfileScreen {
    fn route(&self) -> Route {
        Route::Profile
    }

    fn context(&self) -> &AppContext {
        &self.context
    }

    fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    async fn load(&self) {
        self.refresh().await;
    }

    fn summary(&self) -> String {
        describe(&self.profile, |user| {
            format!(
                "{} ({}){}",
                user.name.as_deref().unwrap_or("Unnamed"),
                mask_phone(&user.phone),
                user.email
                    .as_deref()
                    .map(|email| format!(", {}", email))
                    .unwrap_or_default()
            )
        })
    }
}
