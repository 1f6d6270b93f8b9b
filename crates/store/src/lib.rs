pub mod condition;
pub mod config;
pub mod error;
pub mod iterator;
pub mod table;

#[cfg(test)]
mod tests;
