pub mod cart;
pub mod flower;
pub mod user;

pub use cart::InMemoryCartRepository;
pub use flower::InMemoryFlowerRepository;
pub use user::InMemoryUserRepository;
