mod tree_backed;
pub use self::tree_backed::*;
