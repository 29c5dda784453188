#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::Identity;
    use crate::state::session::{SessionContext, SessionState};
    use leptos::*;

    pub fn ops_user() -> Identity {
        Identity {
            id: "u-ops".into(),
            display_name: "Asha Rao".into(),
        }
    }

    pub fn provide_session(identity: Option<Identity>) -> SessionContext {
        let ctx = create_signal(SessionState {
            identity,
            loading: false,
        });
        provide_context::<SessionContext>(ctx);
        ctx
    }
}
