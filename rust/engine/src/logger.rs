use serde::{Deserialize, Serialize};

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Which direction a cipher session ran in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    /// Plaintext in, ciphertext out
    Encrypt,
    /// Ciphertext in, plaintext out
    Decrypt,
}

/// Complete record of one cipher session: the initial deck ordering, the
/// direction, and how much keystream the message consumed.
/// Serialized to JSONL for audit and replay; the initial ordering plus the
/// direction is enough to reproduce the session exactly.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique identifier for this session (format: YYYYMMDD-NNNNNN)
    pub session_id: String,
    /// RNG seed the deck was shuffled from, if it was seeded
    pub seed: Option<u64>,
    /// Initial deck ordering, top card first (the shared secret)
    pub initial_deck: Vec<u8>,
    /// Whether the session encrypted or decrypted
    pub direction: Direction,
    /// Number of letters transformed
    pub letters: usize,
    /// Number of key values drawn from the keystream
    pub keys_drawn: u64,
    /// Timestamp when the session ran (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_session_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`SessionRecord`]s to a JSONL file, one record per line.
pub struct SessionLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl SessionLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: "19700101".to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_session_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &SessionRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
