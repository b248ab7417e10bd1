pub mod client;
pub mod duration;
pub mod models;
pub mod url;
