pub mod preview;
pub mod samples;
