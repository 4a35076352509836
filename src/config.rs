/// Simulated delay before `fetch_result` yields its value.
pub const FETCH_RESULT_DELAY_MILLIS: u64 = 1000;

/// Simulated delay before `update_state` commits the new value.
pub const STATE_UPDATE_DELAY_MILLIS: u64 = 500;
