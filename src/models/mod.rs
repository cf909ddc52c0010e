pub mod product;
pub mod user;

pub use product::Product;
pub use user::UserAccount;
