pub mod connection;
pub mod products;
pub mod schema;
pub mod users;

pub use connection::Database;
