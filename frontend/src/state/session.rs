use crate::{
    api::{ApiError, Identity},
    config,
};
use leptos::*;

pub const CURRENT_USER_KEY: &str = "current_user";

pub type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl SessionState {
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
        }
    }
}

/// Decodes the auth provider's persisted user record. Blank ids are treated
/// as signed out.
pub fn parse_identity(raw: &str) -> Option<Identity> {
    serde_json::from_str::<Identity>(raw)
        .ok()
        .filter(|identity| !identity.id.trim().is_empty())
}

fn read_persisted_user() -> Result<Option<String>, String> {
    let storage = web_sys::window()
        .ok_or_else(|| "No window object".to_string())?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())?;
    storage
        .get_item(CURRENT_USER_KEY)
        .map_err(|_| format!("Failed to read {}", CURRENT_USER_KEY))
}

fn stored_identity() -> Option<Identity> {
    let raw = match read_persisted_user() {
        Ok(raw) => raw?,
        Err(err) => {
            log::warn!("Session storage unavailable: {}", err);
            return None;
        }
    };
    let identity = parse_identity(&raw);
    if identity.is_none() {
        log::warn!("Ignoring malformed persisted session");
    }
    identity
}

fn create_session_context() -> SessionContext {
    let (session, set_session) = create_signal(SessionState::default());
    if let Some(identity) = stored_identity() {
        set_session.set(SessionState::signed_in(identity));
        return (session, set_session);
    }

    set_session.update(|state| state.loading = true);
    spawn_local(async move {
        let identity = config::await_runtime_config().await.current_user;
        if identity.is_none() {
            log::info!("No signed-in identity; mutations are disabled");
        }
        set_session.set(SessionState {
            identity,
            loading: false,
        });
    });
    (session, set_session)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

pub const SESSION_LOADING_MESSAGE: &str = "Your session is still loading. Try again in a moment.";
pub const SIGNED_OUT_MESSAGE: &str = "Sign in to perform this action.";

/// The identity placed in mutation bodies. Fails without touching the network
/// when nobody is signed in, or while the session is still being resolved.
pub fn require_identity(state: &SessionState) -> Result<Identity, ApiError> {
    match (&state.identity, state.loading) {
        (Some(identity), _) => Ok(identity.clone()),
        (None, true) => Err(ApiError::validation(SESSION_LOADING_MESSAGE)),
        (None, false) => Err(ApiError::validation(SIGNED_OUT_MESSAGE)),
    }
}
