//! Reading-order line assembly from positioned text fragments.

mod assemble;
mod fragment;
mod line;
mod params;

pub use assemble::assemble_lines;
pub use fragment::Fragment;
pub use line::Line;
pub use params::ExtractParams;
