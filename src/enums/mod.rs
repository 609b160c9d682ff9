pub mod viz_type;
pub mod x_axis_mode;
