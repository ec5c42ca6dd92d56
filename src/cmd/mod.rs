/// Flat config-group export command.
pub mod export;
/// Key breadcrumb search command.
pub mod find;
/// Key listing command.
pub mod keys;
/// Config merge command.
pub mod merge;
/// Tree dump command.
pub mod show;
