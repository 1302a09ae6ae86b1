pub use super::directors::Entity as Directors;
pub use super::movies::Entity as Movies;
