pub mod body;
pub mod insertable_method;
mod validation;

pub use body::{merge_body, BODY_TAG};
pub use insertable_method::{
    BodySet, Complete, InsertableMethodBuilder, InsertionPointSet, InsertionStage,
    OverrideSkeletonSet, TargetMethodSet, TargetModuleSet,
};
