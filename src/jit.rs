use crate::avl::Node;

use dynasmrt::{DynasmApi, DynasmLabelApi, ExecutableBuffer, dynasm};
use std::collections::HashMap;

// The function signature we are compiling to: takes a key, returns 1 if the
// key is present in the tree snapshot and 0 otherwise.
//
// The pointer is only valid while the returned ExecutableBuffer is alive,
// and it reproduces the tree as it was at compile time; recompile after
// mutating the tree.
pub type JittedContains = unsafe extern "sysv64" fn(key: i32) -> i32;

pub fn compile(root: &Option<Box<Node<i32>>>) -> (ExecutableBuffer, JittedContains) {
    let mut ops = dynasmrt::x64::Assembler::new().unwrap();

    let start = ops.offset();

    // A map from node to the dynasm label for that node's code block. Keyed
    // by address, not by key: the tree is a multiset and duplicate keys may
    // occupy distinct nodes.
    let mut labels = HashMap::new();

    // Shared exit blocks; every equal comparison lands on "found".
    let found_label = ops.new_dynamic_label();
    let not_found_label = ops.new_dynamic_label();

    // Recursively build the assembly from the tree structure
    if let Some(node) = root {
        build_asm(&mut ops, node, &mut labels, found_label, not_found_label);
    }

    // The "not found" block comes first: an empty tree emits no node blocks,
    // so execution must fall through to the miss case.
    dynasm!(ops
        ; =>not_found_label
        ; mov rax, 0
        ; ret
        ; =>found_label
        ; mov rax, 1
        ; ret
    );

    // Finalize the buffer and cast it to a function pointer
    let buf = ops.finalize().unwrap();
    let func_ptr: JittedContains = unsafe { std::mem::transmute(buf.ptr(start)) };

    (buf, func_ptr)
}

// Recursive helper to generate assembly for a subtree
fn build_asm(
    ops: &mut dynasmrt::x64::Assembler,
    node: &Node<i32>,
    labels: &mut HashMap<*const Node<i32>, dynasmrt::DynamicLabel>,
    found_label: dynasmrt::DynamicLabel,
    not_found_label: dynasmrt::DynamicLabel,
) {
    // Get or create a label for the current node
    let self_label = *labels
        .entry(node as *const Node<i32>)
        .or_insert_with(|| ops.new_dynamic_label());

    // Define the entry point for this node's logic
    dynasm!(ops; =>self_label);

    // Compare the input key (in rdi) with the node's key
    dynasm!(ops
        ; cmp edi, node.key as i32 // Use edi for 32-bit comparison
        ; je =>found_label
    );

    // Decide which child to go to, or jump to "not_found"
    if let Some(left) = &node.left {
        let left_label = *labels
            .entry(&**left as *const Node<i32>)
            .or_insert_with(|| ops.new_dynamic_label());
        dynasm!(ops; jl =>left_label);
    } else {
        dynasm!(ops; jl =>not_found_label);
    }

    if let Some(right) = &node.right {
        let right_label = *labels
            .entry(&**right as *const Node<i32>)
            .or_insert_with(|| ops.new_dynamic_label());
        dynasm!(ops; jg =>right_label);
    } else {
        dynasm!(ops; jg =>not_found_label);
    }

    // Recursively build assembly for children. Pre-order traversal is natural here.
    if let Some(left) = &node.left {
        build_asm(ops, left, labels, found_label, not_found_label);
    }
    if let Some(right) = &node.right {
        build_asm(ops, right, labels, found_label, not_found_label);
    }
}
