pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod service;
pub mod util;

pub static DEFAULT_PAGE: i64 = 1;
pub static DEFAULT_PER_PAGE: i64 = 10;

#[cfg(test)]
pub mod fixtures;
