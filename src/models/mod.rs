pub mod director;
pub mod movie;

pub use director::{Director, DirectorInput};
pub use movie::{Movie, MovieInput};
