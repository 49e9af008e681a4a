//! IR → register map + dependency edges.
//!
//! The allocation policy is deliberately non-optimizing: one virtual
//! register per IR node, numerically equal to the node's own index. The
//! dependency set this pass also produces is unused by the emitter; it
//! exists for a future liveness-based allocator.

use super::types::{IrId, IrNode, RegId};

/// `reglut[i]` is the register assigned to IR node `i`.
pub type RegisterMap = Vec<RegId>;

/// One `(user, used)` edge per `Op` node argument, in IR-index order.
pub type DepSet = Vec<(IrId, IrId)>;

/// Builds the register map and dependency edge list for `ir`.
pub fn scan(ir: &[IrNode]) -> (RegisterMap, DepSet) {
    let reglut: RegisterMap = (0..ir.len()).map(RegId::from).collect();

    let mut deps = DepSet::new();
    for (i, node) in ir.iter().enumerate() {
        if let IrNode::Op { args, .. } = node {
            let user = IrId::from(i);
            for &arg in args {
                deps.push((user, arg));
            }
        }
    }

    (reglut, deps)
}

/// Groups a [`DepSet`] by its source node, for callers that want a real
/// multimap view rather than a flat edge list.
pub fn deps_of(deps: &DepSet, node: IrId) -> Vec<IrId> {
    deps.iter()
        .filter(|(user, _)| *user == node)
        .map(|(_, used)| *used)
        .collect()
}
