//! Skeletal hierarchy assets

use crate::assets::SkeletonCpu;
use crate::foundation::math::Mat4;

/// One joint in a skeletal hierarchy.
#[derive(Debug, Clone)]
pub struct Joint {
    /// Joint name from the authoring tool.
    pub name: String,
    /// Index of the parent joint; `None` for a root joint.
    pub parent: Option<usize>,
    /// Local bind-pose transform relative to the parent.
    pub local_bind: Mat4,
}

/// A skeletal hierarchy loaded from a `.skela` asset.
#[derive(Debug)]
pub struct Skeleton {
    name: String,
    joints: Vec<Joint>,
}

impl Skeleton {
    /// Build a skeleton from a loader-produced CPU intermediate.
    ///
    /// The three CPU-side streams are parallel; ragged input is a loader
    /// bug and trips the debug assertion.
    pub fn from_cpu(cpu: &SkeletonCpu) -> Self {
        debug_assert_eq!(cpu.joint_names.len(), cpu.joint_parents.len());
        debug_assert_eq!(cpu.joint_names.len(), cpu.local_binds.len());
        let joints = cpu
            .joint_names
            .iter()
            .zip(&cpu.joint_parents)
            .zip(&cpu.local_binds)
            .map(|((name, parent), local_bind)| Joint {
                name: name.clone(),
                parent: *parent,
                local_bind: *local_bind,
            })
            .collect();
        Self {
            name: cpu.name.clone(),
            joints,
        }
    }

    /// Asset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of joints.
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Joint by index.
    pub fn joint(&self, index: usize) -> Option<&Joint> {
        self.joints.get(index)
    }

    /// Iterate over the joints in hierarchy order.
    pub fn joints(&self) -> impl Iterator<Item = &Joint> {
        self.joints.iter()
    }
}
