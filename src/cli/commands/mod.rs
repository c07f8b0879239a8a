//! Command implementations — one module per subcommand, each exposing
//! an `execute` function called from `main`.

pub mod add;
pub mod change_master;
pub mod completions;
pub mod delete;
pub mod get;
pub mod init;
pub mod list;
