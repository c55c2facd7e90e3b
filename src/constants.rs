// Frame pacing for the interactive loop (~60 FPS event poll timeout)
pub const FRAME_INTERVAL_MS: u64 = 16;

// Records file name under ~/.jungle-run/
pub const RECORDS_FILE: &str = "records.json";
