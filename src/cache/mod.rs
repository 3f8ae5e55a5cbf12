pub mod fs_store;
pub mod local;
pub mod memory;
pub mod policy;

pub use fs_store::FileSystemFeedStore;
pub use local::LocalFeedLoader;
pub use memory::InMemoryFeedStore;
pub use policy::CachePolicy;
