//! Credential stores
//!
//! Implementations of the
//! [`CredentialStore`](searchmind_application::CredentialStore) port:
//!
//! | Store | Writable | Backing |
//! |-------|:---:|---------|
//! | [`MemoryCredentialStore`] | yes | process memory |
//! | [`EnvCredentialStore`] | no | environment variables named in config |
//! | [`FileCredentialStore`] | yes | `credentials.toml` in the user config dir |
//! | [`LayeredCredentialStore`] | first writable layer | other stores, in order |

mod env;
mod file;
mod layered;
mod memory;

pub use env::EnvCredentialStore;
pub use file::FileCredentialStore;
pub use layered::LayeredCredentialStore;
pub use memory::MemoryCredentialStore;
