mod server_urls;
