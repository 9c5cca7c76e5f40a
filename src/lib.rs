pub mod cli;
pub mod color;
pub mod config;
pub mod logging;
pub mod matching;
pub mod service;
pub mod storage;

// Command modules
pub mod commands;

// Domain modules
pub mod domain;
