mod codec;
mod common;
mod tracker;
