//! API route modules.
//!
//! Each module exposes a `router()` returning a `Router<AppState>`; the
//! routers are merged in [`crate::app`].

pub mod rpc_proxy;
pub mod tiers;
pub mod verify;
