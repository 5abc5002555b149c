pub mod mini_host;
pub mod source_server;
