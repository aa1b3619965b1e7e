//! Output sinks for csview: paging rendered tables through an external command.

pub mod pager;
pub mod shell;

pub use pager::{Pager, PagerProcess, PipeError, DEFAULT_PAGER, PAGER_ENV};
pub use shell::shell_command;
