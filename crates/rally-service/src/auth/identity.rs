use rally_core::config::{AuthConfig, AuthMethod, Settings};

/// Identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepotIdentity {
    /// An organizer or player known to the identity provider.
    Owner(String),
    Anonymous,
}

impl DepotIdentity {
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        match self {
            Self::Owner(owner_id) => Some(owner_id),
            Self::Anonymous => None,
        }
    }
}

/// ## Summary
/// Resolves the caller identity for a request using the configured method.
///
/// In single user mode every request acts as the configured owner. In proxy
/// mode the owner id is read from the trusted identity header.
#[must_use]
#[tracing::instrument(skip_all, fields(auth_method = ?settings.auth.method))]
pub fn resolve_identity(req: &salvo::Request, settings: &Settings) -> DepotIdentity {
    let header_value = req
        .headers()
        .get(settings.auth.proxy_header())
        .and_then(|value| value.to_str().ok());

    identity_from(&settings.auth, header_value)
}

/// Identity for the given auth config and proxy header value.
pub(crate) fn identity_from(auth: &AuthConfig, header_value: Option<&str>) -> DepotIdentity {
    let owner_id = match auth.method {
        AuthMethod::SingleUser => {
            let owner_id = auth.single_user.as_ref().map(|user| user.owner_id.as_str());
            if owner_id.is_none() {
                tracing::warn!("Single user auth selected without single_user.owner_id");
            }
            owner_id
        }
        AuthMethod::Proxy => header_value,
    };

    match owner_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(owner_id) => {
            tracing::trace!(%owner_id, "Resolved caller identity");
            DepotIdentity::Owner(owner_id.to_string())
        }
        None => {
            tracing::trace!("No caller identity on request");
            DepotIdentity::Anonymous
        }
    }
}
