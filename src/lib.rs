// Referral Banner Library
// Settings validation on the save path, render-state resolution on the page path

pub mod admin;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod notices;
pub mod pipeline;
pub mod resolver;
pub mod sanitize;
pub mod settings;
pub mod template;
pub mod validator;
