//! MCP protocol handling — JSON-RPC dispatch.

pub mod handler;
pub mod method;
pub mod validator;

pub use handler::ProtocolHandler;
pub use method::Method;
