pub mod order;

pub use order::{OrderDraft, OrderRecord, OrderSubmission};
