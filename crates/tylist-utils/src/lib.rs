pub mod std_error_pp;
