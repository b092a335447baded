mod client;
mod payload;

pub use client::RemoteSink;
pub use payload::SinkPayload;
