//! AVL multiset over ordered keys, with native-compiled membership probes
//! for `i32` keys via dynasm.

pub mod avl;
pub mod jit;
