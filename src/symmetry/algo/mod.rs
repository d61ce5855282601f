pub(crate) mod reduction;
pub(crate) mod delaunay;
pub(crate) mod primitive;
pub(crate) mod rotations;
pub(crate) mod spacegroup;
