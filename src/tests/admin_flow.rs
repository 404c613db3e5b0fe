use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::content::application::orchestrator::ResourceOrchestrator;
use crate::content::application::ports::outgoing::ConfirmPrompt;
use crate::content::application::use_cases::remove_entry::RemovalOutcome;
use crate::content::domain::entities::{Qualification, QualificationDraft};
use crate::session::application::ports::outgoing::TokenStore;
use crate::session::application::session_state::SessionState;
use crate::session::application::use_cases::login::{ILoginUseCase, LoginRequest, LoginUseCase};
use crate::session::application::use_cases::logout::{ILogoutUseCase, LogoutUseCase};
use crate::shared::api::error::GatewayError;
use crate::tests::support::stubs::{
    MemoryTokenStore, StubAuthGateway, StubConfirmPrompt, StubResourceGateway,
};

fn qualification(id: &str, degree: &str) -> Qualification {
    Qualification {
        id: id.to_string(),
        degree: degree.to_string(),
        institution: "MIT".to_string(),
        year: "2020".to_string(),
        description: String::new(),
    }
}

fn draft(degree: &str) -> QualificationDraft {
    QualificationDraft {
        degree: degree.to_string(),
        institution: "MIT".to_string(),
        year: "2020".to_string(),
        description: String::new(),
    }
}

#[tokio::test]
async fn admin_session_crud_round_trip() {
    // ── Login ──
    let tokens = Arc::new(MemoryTokenStore::default());
    let session = SessionState::restore(tokens.as_ref());
    assert!(!session.read().await.is_admin());

    let login = LoginUseCase::new(
        StubAuthGateway {
            result: Ok("jwt-token".to_string()),
        },
        Arc::clone(&tokens) as Arc<dyn TokenStore>,
        Arc::clone(&session),
    );
    let request =
        LoginRequest::new("admin@example.com".to_string(), "password123".to_string()).unwrap();
    login.execute(request).await.unwrap();

    assert!(session.read().await.is_admin());
    assert_eq!(tokens.load(), Some("jwt-token".to_string()));

    // ── Edit the qualifications collection ──
    let gateway = Arc::new(
        StubResourceGateway::<Qualification>::new()
            .fetching(Ok(vec![qualification("1", "BSc")]))
            .creating(Ok(qualification("2", "MSc")))
            .updating(Ok(qualification("1", "BEng")))
            .removing(Ok(())),
    );
    let prompt: Arc<dyn ConfirmPrompt> = Arc::new(StubConfirmPrompt::accepting());
    let qualifications = ResourceOrchestrator::new(Arc::clone(&gateway), prompt);

    qualifications.refresh().await;
    assert_eq!(qualifications.snapshot().await.len(), 1);

    let created = qualifications.add(draft("MSc")).await.unwrap();
    assert_eq!(created.id, "2");
    assert_eq!(
        qualifications.snapshot().await,
        vec![qualification("1", "BSc"), qualification("2", "MSc")]
    );

    qualifications.update("1", draft("BEng")).await.unwrap();
    assert_eq!(
        qualifications.snapshot().await,
        vec![qualification("1", "BEng"), qualification("2", "MSc")]
    );

    let outcome = qualifications.remove("2").await.unwrap();
    assert_eq!(outcome, RemovalOutcome::Removed);
    assert_eq!(qualifications.snapshot().await, vec![qualification("1", "BEng")]);

    // ── Logout ──
    let logout = LogoutUseCase::new(Arc::clone(&tokens) as Arc<dyn TokenStore>, Arc::clone(&session));
    logout.execute().await.unwrap();

    assert!(!session.read().await.is_admin());
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn declined_delete_confirmation_never_reaches_the_gateway() {
    let gateway = Arc::new(
        StubResourceGateway::<Qualification>::new()
            .fetching(Ok(vec![qualification("5", "BSc")]))
            .removing(Ok(())),
    );
    let prompt = Arc::new(StubConfirmPrompt::declining());
    let qualifications =
        ResourceOrchestrator::new(Arc::clone(&gateway), Arc::clone(&prompt) as Arc<dyn ConfirmPrompt>);

    qualifications.refresh().await;

    let outcome = qualifications.remove("5").await.unwrap();

    assert_eq!(outcome, RemovalOutcome::Cancelled);
    assert_eq!(gateway.remove_calls.load(Ordering::SeqCst), 0);
    assert_eq!(qualifications.snapshot().await, vec![qualification("5", "BSc")]);
    assert_eq!(
        prompt.questions.lock().unwrap().as_slice(),
        ["Are you sure you want to delete this qualification?"]
    );
}

#[tokio::test]
async fn failed_mutation_surfaces_the_message_and_keeps_the_store() {
    let gateway = Arc::new(
        StubResourceGateway::<Qualification>::new()
            .fetching(Ok(vec![qualification("1", "BSc")]))
            .creating(Err(GatewayError::Rejected {
                status: 400,
                message: "Degree is required".to_string(),
            })),
    );
    let prompt: Arc<dyn ConfirmPrompt> = Arc::new(StubConfirmPrompt::accepting());
    let qualifications = ResourceOrchestrator::new(Arc::clone(&gateway), prompt);

    qualifications.refresh().await;
    let version = qualifications.version().await;

    let result = qualifications.add(draft("")).await;

    assert_eq!(result.unwrap_err().to_string(), "Degree is required");
    assert_eq!(qualifications.snapshot().await, vec![qualification("1", "BSc")]);
    assert_eq!(qualifications.version().await, version);
}
