//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod contact;
pub(crate) mod markdown;
pub(crate) mod post;

pub(crate) use build::BuildArgs;
pub(crate) use contact::ContactArgs;
pub(crate) use markdown::MarkdownArgs;
pub(crate) use post::PostArgs;
