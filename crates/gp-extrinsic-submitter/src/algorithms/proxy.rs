//! # Proxy Wrapping
//!
//! Decides which account signs and which call is dispatched.

use crate::domain::{AccountAddress, Call};

/// Signer and call actually handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedDispatch {
    /// Account whose key signs the extrinsic.
    pub signer: AccountAddress,
    /// Call to dispatch.
    pub call: Call,
}

/// Wrap `call` in a proxy envelope when `proxy` is set.
///
/// With a proxy the extrinsic becomes `proxy.proxy(signer, None, call)` and
/// is signed by the proxy account.
pub fn prepare_dispatch(
    signer: AccountAddress,
    proxy: Option<AccountAddress>,
    call: Call,
) -> PreparedDispatch {
    match proxy {
        Some(proxy) => PreparedDispatch {
            signer: proxy,
            call: Call::Proxy {
                real: signer,
                force_proxy_type: None,
                call: Box::new(call),
            },
        },
        None => PreparedDispatch { signer, call },
    }
}
