//! Configuration loading: default files, explicit files, environment, then
//! CLI overrides, validated into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
