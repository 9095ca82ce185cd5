// Module exports for models

pub mod recurrence;
