pub mod loader;

pub use loader::RemoteFeedLoader;
