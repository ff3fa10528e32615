/// Collection holding one document per worker, keyed by email in `_id`
pub const WORKERS_COLLECTION: &str = "workers";

/// Server code reported by MongoDB when a unique index (here `_id`) is violated
pub const DUPLICATE_KEY_ERROR_CODE: i32 = 11000;
