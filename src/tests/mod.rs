pub mod common;
mod wire;
