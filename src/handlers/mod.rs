pub mod graphql_handler;
pub mod session_handler;
