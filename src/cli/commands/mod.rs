pub mod apply;
pub mod config;
pub mod init;
pub mod recommend;
pub mod scan;
pub mod themes;
pub mod validate;
