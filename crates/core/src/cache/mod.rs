mod hash_map;
mod traits;

pub use hash_map::HashMapCache;
pub use traits::CacheContainer;
