mod load;
mod save;
mod types;

pub use load::{load_config, parse_config};
pub use save::save_config;
pub use types::{CONFIG_VERSION, CompressConfig, PackConfig};
