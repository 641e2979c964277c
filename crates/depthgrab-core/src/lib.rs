pub mod config;
pub mod consts;
pub mod convert;
pub mod correct;
pub mod error;
pub mod frame;
pub mod io;
pub mod mailbox;
pub mod snapshot;
pub mod status;
