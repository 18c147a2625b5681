use contracts::system::auth::{decode_claims, CredentialClaims, CredentialError, UserProfile};
use contracts::system::roles::{Capability, Role};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thiserror::Error;

use super::{api, identity, storage};
use crate::shared::api_utils::{set_unauthorized_hook, ApiError};

const EXPIRY_CHECK_MS: u32 = 30_000;
pub const SESSION_EXPIRED_NOTICE: &str = "Sesión expirada. Vuelve a iniciar sesión.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub credential: Option<String>,
    pub claims: Option<CredentialClaims>,
    pub profile: Option<UserProfile>,
    /// Message for the login page (e.g. why the session ended).
    pub notice: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Role of the signed-in employee; no profile means no role yet.
    pub fn role(&self) -> Role {
        self.profile.as_ref().map(|p| p.rol).unwrap_or_default()
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.is_authenticated() && self.role().can(capability)
    }

    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.claims
            .as_ref()
            .map(|c| c.is_expired_at(now_secs))
            .unwrap_or(false)
    }

    fn signed_out(notice: Option<String>) -> Self {
        Self {
            notice,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignInError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error("La credencial recibida ya ha expirado.")]
    Expired,
}

pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Rebuild a session from what was left in storage. An undecodable or
/// expired credential yields `None`.
pub fn restore_from(
    credential: Option<String>,
    profile: Option<UserProfile>,
    now_secs: i64,
) -> Option<AuthState> {
    let credential = credential?;
    let claims = match decode_claims(&credential) {
        Ok(claims) => claims,
        Err(e) => {
            log::warn!("Discarding stored credential: {}", e);
            return None;
        }
    };
    if claims.is_expired_at(now_secs) {
        log::info!("Stored credential for {} expired at {}", claims.sub, claims.exp);
        return None;
    }
    Some(AuthState {
        credential: Some(credential),
        claims: Some(claims),
        profile,
        notice: None,
    })
}

fn restore_session() -> AuthState {
    match restore_from(storage::get_credential(), storage::get_profile(), now_secs()) {
        Some(state) => state,
        None => {
            storage::clear();
            AuthState::default()
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(restore_session());

    // The cached profile is shown at once; refresh the role from the backend.
    if auth_state.with_untracked(|s| s.is_authenticated()) {
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(profile) => {
                    storage::save_profile(&profile);
                    set_auth_state.update(|s| s.profile = Some(profile));
                }
                Err(e) => log::warn!("Profile refresh failed: {}", e),
            }
        });
    }

    set_unauthorized_hook(move || {
        if auth_state.try_with_untracked(|s| s.is_authenticated()) == Some(true) {
            do_logout(set_auth_state, Some(SESSION_EXPIRED_NOTICE.to_string()));
        }
    });

    spawn_local(async move {
        loop {
            TimeoutFuture::new(EXPIRY_CHECK_MS).await;
            let Some(expired) = auth_state.try_with_untracked(|s| s.is_expired_at(now_secs()))
            else {
                break;
            };
            if expired {
                log::info!("Credential expired, signing out");
                do_logout(set_auth_state, Some(SESSION_EXPIRED_NOTICE.to_string()));
            }
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Reactive role of the signed-in employee.
pub fn current_role() -> Role {
    let (auth_state, _) = use_auth();
    auth_state.with(|s| s.role())
}

/// Reactive capability check.
pub fn can(capability: Capability) -> bool {
    let (auth_state, _) = use_auth();
    auth_state.with(|s| s.can(capability))
}

/// Exchange → decode and check expiry → store → fetch profile → publish.
pub async fn do_sign_in(
    provider_token: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), SignInError> {
    let credential = api::exchange_credential(&provider_token).await?;
    let claims = decode_claims(&credential)?;
    if claims.is_expired_at(now_secs()) {
        return Err(SignInError::Expired);
    }
    log::info!("Signed in as {} (expires at {})", claims.sub, claims.exp);

    storage::save_credential(&credential);
    let profile = match api::fetch_profile().await {
        Ok(profile) => profile,
        Err(e) => {
            storage::clear();
            return Err(e.into());
        }
    };
    storage::save_profile(&profile);

    set_auth_state.set(AuthState {
        credential: Some(credential),
        claims: Some(claims),
        profile: Some(profile),
        notice: None,
    });
    Ok(())
}

/// Drop the session. Open tabs are reset by the shell once the state flips.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>, notice: Option<String>) {
    storage::clear();
    identity::disable_auto_select();
    set_auth_state.try_set(AuthState::signed_out(notice));
}

#[cfg(test)]
mod tests {
    use super::*;

    // Payloads are base64url of {"sub":"42","exp":<exp>}.
    fn token(exp: i64) -> String {
        let payload = match exp {
            1_000 => "eyJzdWIiOiI0MiIsImV4cCI6MTAwMH0",
            2_000 => "eyJzdWIiOiI0MiIsImV4cCI6MjAwMH0",
            _ => unreachable!(),
        };
        format!("header.{}.signature", payload)
    }

    fn profile(rol: Role) -> UserProfile {
        UserProfile {
            employe_id: "7".into(),
            name: "Ana".into(),
            family_name: "Ruiz".into(),
            email: "ana@example.com".into(),
            rol,
        }
    }

    #[test]
    fn restores_live_credentials() {
        let state = restore_from(Some(token(2_000)), Some(profile(Role::Commercial)), 1_000).unwrap();
        assert!(state.is_authenticated());
        assert_eq!(state.role(), Role::Commercial);
        assert!(state.can(Capability::DownloadInvoicePdf));
        assert!(!state.can(Capability::AdministerUsers));
    }

    #[test]
    fn discards_expired_or_garbage() {
        assert!(restore_from(Some(token(1_000)), None, 1_000).is_none());
        assert!(restore_from(Some("not-a-jwt".into()), None, 0).is_none());
        assert!(restore_from(None, Some(profile(Role::Administrator)), 0).is_none());
    }

    #[test]
    fn missing_profile_means_no_role() {
        let state = restore_from(Some(token(2_000)), None, 1_000).unwrap();
        assert_eq!(state.role(), Role::Unassigned);
        assert!(state.can(Capability::ViewHome));
        assert!(!state.can(Capability::ViewProducts));
        assert!(!AuthState::default().can(Capability::ViewHome));
    }

    #[test]
    fn expiry_follows_claims() {
        let state = restore_from(Some(token(2_000)), None, 1_000).unwrap();
        assert!(!state.is_expired_at(1_999));
        assert!(state.is_expired_at(2_000));
        assert!(!AuthState::default().is_expired_at(i64::MAX));
    }
}
