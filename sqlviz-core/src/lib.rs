//! sqlviz core
//!
//! UI-agnostic pieces of the sqlviz client: the analysis API client, the
//! append-only chat log, the markdown renderer, the artifact viewer state
//! and the session that wires them together. Front ends drive an
//! [`session::AnalysisSession`] and draw from [`session::Visibility`].

pub mod artifact;
pub mod client;
pub mod config;
pub mod constants;
pub mod domain;
pub mod export;
pub mod markdown;
pub mod session;
