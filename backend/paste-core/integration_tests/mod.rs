mod helpers;
mod paste_client;
