pub mod cell;
pub mod run_for_cell;
