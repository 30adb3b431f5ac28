pub mod args;
pub mod bootstrap;
pub mod commands;
pub mod demo;
