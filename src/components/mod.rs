pub mod app;
pub mod column_averages;
pub mod config_form;
pub mod matrix_provider;
pub mod matrix_row;
pub mod matrix_table;
pub mod number_input;
