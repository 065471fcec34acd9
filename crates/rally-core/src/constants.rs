/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";
pub const APP_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", APP_ROUTE_COMPONENT);

pub const PRACTICES_ROUTE_COMPONENT: &str = "practices";
pub const PRACTICES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", PRACTICES_ROUTE_COMPONENT);

pub const COMMENTS_ROUTE_COMPONENT: &str = "comments";
pub const COMMENTS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", COMMENTS_ROUTE_COMPONENT);

/// Header the identity proxy sets when no header is configured.
pub const DEFAULT_PROXY_IDENTITY_HEADER: &str = "X-Forwarded-User";
