pub mod engine;
pub mod id_generator;
pub mod logger;
