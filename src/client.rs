use std::sync::Arc;

use crate::contact::adapter::outgoing::contact_gateway_http::HttpContactGateway;
use crate::contact::application::use_cases::send_message::SendContactMessageUseCase;
use crate::content::adapter::outgoing::resource_gateway_http::HttpResourceGateway;
use crate::content::application::orchestrator::ResourceOrchestrator;
use crate::content::application::ports::outgoing::ConfirmPrompt;
use crate::content::domain::entities::{
    Achievement, Certification, Experience, Project, Qualification, Skill,
};
use crate::content::domain::resource::ResourceKind;
use crate::profile::adapter::outgoing::profile_gateway_http::HttpProfileGateway;
use crate::profile::application::profile_store::{ProfileStore, SharedProfile};
use crate::profile::application::use_cases::load_profile::{
    ILoadProfileUseCase, LoadProfileUseCase,
};
use crate::profile::application::use_cases::remove_image::RemoveImageUseCase;
use crate::profile::application::use_cases::save_profile::SaveProfileUseCase;
use crate::profile::application::use_cases::upload_image::UploadImageUseCase;
use crate::session::adapter::outgoing::auth_gateway_http::HttpAuthGateway;
use crate::session::adapter::outgoing::token_store_file::FileTokenStore;
use crate::session::application::ports::outgoing::TokenStore;
use crate::session::application::session_state::{SessionState, SharedSession};
use crate::session::application::use_cases::login::LoginUseCase;
use crate::session::application::use_cases::logout::LogoutUseCase;
use crate::shared::api::config::ApiConfig;

pub type HttpOrchestrator<E> = ResourceOrchestrator<HttpResourceGateway<E>, E>;

/// Fully wired client core: the session, the profile singleton and one
/// CRUD orchestrator per collection kind, all talking to the same API
/// origin. The view layer drives these handles and renders the stores.
#[derive(Clone)]
pub struct ClientState {
    pub session: SharedSession,
    pub login: LoginUseCase<HttpAuthGateway>,
    pub logout: LogoutUseCase,

    pub profile: SharedProfile,
    pub load_profile: LoadProfileUseCase<HttpProfileGateway>,
    pub save_profile: SaveProfileUseCase<HttpProfileGateway>,
    pub upload_profile_image: UploadImageUseCase<HttpProfileGateway>,
    pub remove_profile_image: RemoveImageUseCase<HttpProfileGateway>,

    pub skills: HttpOrchestrator<Skill>,
    pub projects: HttpOrchestrator<Project>,
    pub qualifications: HttpOrchestrator<Qualification>,
    pub experience: HttpOrchestrator<Experience>,
    pub achievements: HttpOrchestrator<Achievement>,
    pub certifications: HttpOrchestrator<Certification>,

    pub contact: SendContactMessageUseCase<HttpContactGateway>,
}

impl ClientState {
    pub fn from_config(config: &ApiConfig, prompt: Arc<dyn ConfirmPrompt>) -> Self {
        let http = reqwest::Client::new();
        let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&config.token_file));
        let session = SessionState::restore(tokens.as_ref());

        let profile_store = ProfileStore::shared();
        let profile_gateway =
            HttpProfileGateway::new(http.clone(), &config.base_url, Arc::clone(&tokens));

        Self {
            login: LoginUseCase::new(
                HttpAuthGateway::new(http.clone(), &config.base_url),
                Arc::clone(&tokens),
                Arc::clone(&session),
            ),
            logout: LogoutUseCase::new(Arc::clone(&tokens), Arc::clone(&session)),
            session,

            load_profile: LoadProfileUseCase::new(
                profile_gateway.clone(),
                Arc::clone(&profile_store),
                &config.base_url,
            ),
            save_profile: SaveProfileUseCase::new(
                profile_gateway.clone(),
                Arc::clone(&profile_store),
            ),
            upload_profile_image: UploadImageUseCase::new(
                profile_gateway.clone(),
                Arc::clone(&profile_store),
                &config.base_url,
            ),
            remove_profile_image: RemoveImageUseCase::new(
                profile_gateway,
                Arc::clone(&profile_store),
                &config.base_url,
                Arc::clone(&prompt),
            ),
            profile: profile_store,

            skills: Self::orchestrator(&http, config, &tokens, &prompt),
            projects: Self::orchestrator(&http, config, &tokens, &prompt),
            qualifications: Self::orchestrator(&http, config, &tokens, &prompt),
            experience: Self::orchestrator(&http, config, &tokens, &prompt),
            achievements: Self::orchestrator(&http, config, &tokens, &prompt),
            certifications: Self::orchestrator(&http, config, &tokens, &prompt),

            contact: SendContactMessageUseCase::new(HttpContactGateway::new(
                http,
                &config.base_url,
            )),
        }
    }

    fn orchestrator<E: ResourceKind>(
        http: &reqwest::Client,
        config: &ApiConfig,
        tokens: &Arc<dyn TokenStore>,
        prompt: &Arc<dyn ConfirmPrompt>,
    ) -> HttpOrchestrator<E> {
        ResourceOrchestrator::new(
            HttpResourceGateway::new(http.clone(), &config.base_url, Arc::clone(tokens)),
            Arc::clone(prompt),
        )
    }

    /// Initial load: the profile and all six collections, fetched
    /// concurrently and independently. Completion order is unspecified;
    /// a failure is logged for its own kind and does not affect the rest.
    pub async fn startup_sync(&self) {
        futures::join!(
            self.load_profile.execute(),
            self.skills.refresh(),
            self.projects.refresh(),
            self.qualifications.refresh(),
            self.experience.refresh(),
            self.achievements.refresh(),
            self.certifications.refresh(),
        );
    }
}
