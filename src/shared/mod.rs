pub mod constants;
pub mod hostname;
pub mod test_helpers;
