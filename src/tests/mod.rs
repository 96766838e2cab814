//! # Integration tests that require a look inside the crate.
//!
//! Each module describes a single linear program. Convention for function names:
//!
//! * `fn tableau_data()`, the rows of the initial tableau
//! * `fn tableau_form()`, the initial tableau with its starting basis

/// Show the solver's log output when a test fails.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
