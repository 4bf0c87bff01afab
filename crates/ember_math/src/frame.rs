use crate::constants::SQRT_OF_ONE_THIRD;
use crate::Vec3;

/// Orthonormal shading frame `{t1, t2, n}` around a unit normal.
///
/// In local coordinates the normal is +z, which is the frame the BSDF
/// predicates in [`crate::predicates`] expect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub t1: Vec3,
    pub t2: Vec3,
    pub n: Vec3,
}

impl Frame {
    /// Build a frame from a unit normal.
    ///
    /// The helper axis is the first world axis whose component in the normal
    /// is below sqrt(1/3). At least one component of a unit vector always is,
    /// unless all three sit exactly at sqrt(1/3), in which case z is used.
    pub fn from_normal(n: Vec3) -> Self {
        let helper = if n.x.abs() < SQRT_OF_ONE_THIRD {
            Vec3::X
        } else if n.y.abs() < SQRT_OF_ONE_THIRD {
            Vec3::Y
        } else {
            Vec3::Z
        };

        let t1 = n.cross(helper).normalize();
        let t2 = n.cross(t1).normalize();
        Self { t1, t2, n }
    }

    /// Express a world-space vector in this frame.
    #[inline]
    pub fn to_local(&self, v: Vec3) -> Vec3 {
        Vec3::new(v.dot(self.t1), v.dot(self.t2), v.dot(self.n))
    }

    /// Express a local-frame vector in world space.
    #[inline]
    pub fn to_world(&self, v: Vec3) -> Vec3 {
        v.x * self.t1 + v.y * self.t2 + v.z * self.n
    }
}
