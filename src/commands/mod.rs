pub mod read;
pub mod setup;
pub mod write;

pub use read::read;
pub use setup::setup;
pub use write::write;
