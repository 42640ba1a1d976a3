#[cfg(test)]
pub mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::SystemTime;

    static TEMP_DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

    pub fn temp_dir() -> PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_micros();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let buf = std::env::temp_dir().join(format!("member-card-{timestamp}-{counter}"));
        fs::create_dir(&buf).unwrap();

        buf
    }
}
