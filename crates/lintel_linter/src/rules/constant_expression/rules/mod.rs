pub(crate) use constant_condition::constant_condition;
pub use constant_condition::ConstantCondition;

mod constant_condition;
