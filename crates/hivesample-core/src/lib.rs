pub mod blob;
pub mod color;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod io;
pub mod pairing;
pub mod photo;
pub mod sampler;
pub mod session;
pub mod source;
pub mod viewport;
