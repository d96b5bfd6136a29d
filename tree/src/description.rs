//! Complete structural descriptions and one-shot building

use crate::builder::{BuilderLimits, TreeBuilder};
use crate::error::BuildError;
use abprune_engine::GameTree;
use serde::{Deserialize, Serialize};

fn default_root_is_max() -> bool {
    true
}

/// Everything needed to build a tree without interaction.
///
/// ```json
/// {
///   "root_is_max": true,
///   "internal_count": 3,
///   "leaf_values": [3, 5, 2, 9],
///   "internal_children": [[1, 2], [3, 4], [5, 6]]
/// }
/// ```
///
/// `internal_children[i]` lists the children of internal node `i`. Leaves
/// take indices `internal_count..internal_count + leaf_values.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDescription {
    /// Polarity of the root (MAX when true)
    #[serde(default = "default_root_is_max")]
    pub root_is_max: bool,
    pub internal_count: i64,
    pub leaf_values: Vec<i32>,
    #[serde(default)]
    pub internal_children: Vec<Vec<i64>>,
}

impl TreeDescription {
    /// Build with default limits.
    pub fn build(&self) -> Result<GameTree, BuildError> {
        build_tree(self, &BuilderLimits::default())
    }
}

/// Build a tree from a complete description.
///
/// Internal nodes are built from the highest index down, exactly as the
/// incremental builder requires. The first invalid child slot is returned as
/// `BuildError::InvalidChild`.
pub fn build_tree(
    description: &TreeDescription,
    limits: &BuilderLimits,
) -> Result<GameTree, BuildError> {
    let leaf_count = i64::try_from(description.leaf_values.len()).unwrap_or(i64::MAX);
    let mut builder = TreeBuilder::with_limits(description.internal_count, leaf_count, limits)?;

    if description.internal_children.len() != builder.internal_count() {
        return Err(BuildError::ChildListMismatch {
            expected: builder.internal_count(),
            actual: description.internal_children.len(),
        });
    }

    for &value in &description.leaf_values {
        builder.push_leaf(value)?;
    }
    for children in description.internal_children.iter().rev() {
        builder.push_internal(children)?;
    }
    builder.finish()
}
