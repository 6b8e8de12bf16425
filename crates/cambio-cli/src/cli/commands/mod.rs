//! CLI command handlers. Each command is in its own file.

mod completions;
mod convert;
mod demo;
mod inspect;
mod param;

pub use completions::run_completions;
pub use convert::run_convert;
pub use demo::run_demo;
pub use inspect::run_inspect;
pub use param::run_param;

#[cfg(test)]
pub(crate) use convert::render_convert;
#[cfg(test)]
pub(crate) use demo::render_demo;
#[cfg(test)]
pub(crate) use inspect::render_inspect;
#[cfg(test)]
pub(crate) use param::render_param;
