pub mod model;
pub mod traits;

pub use model::{ClassDecl, ClassModel, ClassPool, MethodModel};
pub use traits::{MethodSignature, ModuleProvider, MutationEngine, SignatureWriter, TargetModule};
