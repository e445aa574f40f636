pub mod context;
pub mod domain;
pub mod repository;
pub mod seed;
#[cfg(test)]
pub mod memory;
