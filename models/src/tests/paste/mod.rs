mod document;
mod wire;
