//! Outbound ports - dependencies the application layer calls out through

mod game_server_port;

pub use game_server_port::GameServerPort;

#[cfg(any(test, feature = "testing"))]
pub use game_server_port::MockGameServerPort;
