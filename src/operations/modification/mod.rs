mod split;

pub use split::SplitSpace;
