pub mod prelude;

pub mod directors;
pub mod movies;
