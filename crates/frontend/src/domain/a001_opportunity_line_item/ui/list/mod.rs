pub mod columns;
pub mod mutation;
pub mod pending_edits;
pub mod state;
pub mod view;
pub mod view_model;

pub use view::OpportunityProductTable;
