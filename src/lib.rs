pub mod analyzers;
pub mod city;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod prompt;
pub mod report;
pub mod trips;
pub mod validate;
