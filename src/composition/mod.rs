pub(crate) mod dsl;
pub(crate) mod fingerprint;
pub(crate) mod model;
pub(crate) mod pipeline;
pub(crate) mod render;
pub mod reference;
