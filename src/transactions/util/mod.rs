pub mod date_window;
pub mod lenient;
pub mod numeric;
