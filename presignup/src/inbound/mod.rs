//! Inbound adapters that translate external invocations into domain calls
//! while keeping runtime details at the edge.
//!
//! The Lambda runtime adapter lives under [`lambda`].

pub mod lambda;
