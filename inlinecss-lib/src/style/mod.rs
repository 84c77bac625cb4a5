pub mod emitter;
pub mod relevance;
pub mod rule_parser;
pub mod stylesheet;
