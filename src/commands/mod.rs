pub mod deploy;
pub mod info;
pub mod init;
pub mod install;
pub mod update;
pub mod version;
