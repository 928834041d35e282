pub mod arg_builder;
pub mod catalogue;
pub mod commons;
pub mod invocation;
pub mod parameters;
pub mod paths;
pub mod settings;
pub mod substitution;
pub mod validation;
pub mod variable_store;
