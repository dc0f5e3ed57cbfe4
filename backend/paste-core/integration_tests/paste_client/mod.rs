mod client;
mod get;
mod put;
