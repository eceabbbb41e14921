mod render_host;
pub use render_host::{HostStatus, RenderHost};

mod server_config;
pub use server_config::{ServerConfig, DEFAULT_MAX_PAYLOAD_SIZE, DEFAULT_READ_CHUNK_SIZE};
