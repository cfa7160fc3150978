/// Transfer progress, reported by both the sending and receiving side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Progress {
    /// A length byte was sent or received; `len` payload bytes follow, to be
    /// placed at `offset` in the image.
    Chunk { len: u8, offset: usize },
    /// The final chunk is through; `total` payload bytes moved.
    Done { total: usize },
}

/// Callback type for progress reports.
pub type ProgressFn = fn(Progress);

/// Noop progress callback.
pub fn noop(_: Progress) {}
