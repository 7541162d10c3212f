pub mod http;
mod scripts;

pub use scripts::{ScriptPayload, fetch_generated_scripts};

#[cfg(feature = "ssr")]
pub use scripts::request_generated_scripts;
