//! Facade crate: one import path over the layered workspace.

pub use application;
pub use domain;
pub use itrm_model as model;
