pub mod cmd;
pub mod config;
pub mod engine;
pub mod fs;
pub mod keymap;
pub mod session;
pub mod shell;
pub mod theme;

#[cfg(test)]
mod test_util;
