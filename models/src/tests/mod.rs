mod paste;
mod server_config;
