// Export foundational arithmetic operations directly
pub mod add;
pub mod mul;
pub mod sub;

pub use add::add_op;
pub use mul::{mul_elementwise_op, mul_op, scalar_mul_op};
pub use sub::sub_op;
