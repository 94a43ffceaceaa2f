mod init_config;
mod seed;

pub use init_config::cmd_init_config;
pub use seed::cmd_seed;
