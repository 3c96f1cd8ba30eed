pub mod assemble;
pub mod distance_method;
pub mod error;
pub mod meters;
pub mod segment;
pub mod track_point;
pub mod track_reader;
pub mod walk;
pub mod walk_params;

pub use walk::Walk;
