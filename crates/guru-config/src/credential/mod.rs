//! Discovery of the model-service API key.
//!
//! The key may be published under several names depending on how the app is
//! hosted (bundler-prefixed variables, framework conventions, plain names).
//! [`CredentialResolver`] walks one ordered candidate list through a single
//! [`ValueSource`] and returns the first usable value.

mod resolver;
mod source;

pub use resolver::{Credential, CredentialResolver};
pub use source::{MapSource, ProcessEnv, ValueSource};
