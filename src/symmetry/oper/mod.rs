pub(crate) mod symmops;
pub(crate) mod point_group;
pub(crate) mod hall;
pub(crate) mod matching;
