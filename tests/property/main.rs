#[path = "../common/mod.rs"]
mod common;

mod detector;
mod generator;
mod sorter;
