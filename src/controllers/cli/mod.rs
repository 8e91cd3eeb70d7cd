pub mod convert_args;
pub mod render_args;
