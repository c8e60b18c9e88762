//! Interactive terminal chat with the ICS Security assistant.
//!
//! This module implements the chat loop: welcome panel, suggested
//! questions, typing indicator, markdown rendering of answers, and slash
//! commands. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
