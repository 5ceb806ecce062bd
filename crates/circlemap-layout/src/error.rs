#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("region name is declared twice: {name}")]
    DuplicateRegion { name: String },

    #[error("region {name} has an invalid radius: {radius}")]
    InvalidRadius { name: String, radius: f64 },

    #[error("region {name} has a non-finite position ({x}, {y})")]
    InvalidPosition { name: String, x: f64, y: f64 },

    #[error("region index {index} is out of range for a graph of {len} regions")]
    UnknownRegion { index: usize, len: usize },

    #[error("region {name} cannot be its own neighbor")]
    SelfAdjacency { name: String },

    #[error("adjacency between {first} and {second} is only declared in one direction")]
    AsymmetricAdjacency { first: String, second: String },

    #[error("invalid layout configuration: {message}")]
    InvalidConfig { message: String },

    #[error("regions {first} and {second} occupy the same position at iteration {iteration}")]
    DegenerateGeometry {
        first: String,
        second: String,
        iteration: usize,
    },

    #[error("layout diverged at iteration {iteration}: displacement is no longer finite")]
    Diverged { iteration: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
