pub mod config;
pub mod files;
pub mod state;

pub use config::{load_config, Config, CONFIG_TEMPLATE};
pub use files::{
    atomic_write, config_file, ensure_data_dir, init_local_data_dir, log_file,
    read_file, state_file,
};
pub use state::{load_state, save_state, LocalState};
