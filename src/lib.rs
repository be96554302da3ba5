pub mod fetch;
pub mod output;
pub mod parser;
pub mod ranking;
pub mod schema;
pub mod summary;
