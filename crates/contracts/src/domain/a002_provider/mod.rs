pub mod aggregate;

pub use aggregate::{Provider, ProviderForm};
