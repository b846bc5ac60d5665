//! Bump allocator for derived signature strings.
//!
//! Every string a signature refers to (raw or normalized) lives in one
//! `StringArena`, so matching resolves views without touching the heap.
//! Views are index ranges rather than pointers: growing the backing buffer
//! may reallocate it, but an offset-based view stays valid for the arena's
//! whole lifetime. `clear()` is the only operation that invalidates views,
//! and the borrow checker prevents resolving a stale one.

/// Non-owning view into `StringArena` bytes.
///
/// Valid until the owning arena is cleared or dropped. Resolution is an
/// O(1) slice of the arena buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStr {
    start: u32,
    len: u32,
}

impl ArenaStr {
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Writable region reserved by [`StringArena::allocate`].
///
/// Deliberately not `Copy`: `finalize` consumes it, so a region can only
/// be finalized once.
#[derive(Debug)]
pub struct Scratch {
    start: u32,
    capacity: u32,
}

impl Scratch {
    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }
}

/// Append-only byte store backing all signature strings.
///
/// Interned strings are NUL-padded so the buffer layout stays compatible
/// with C-string consumers. Nothing is reclaimed before `clear()`; the
/// unused tail of an over-sized `allocate` reservation is simply wasted.
pub struct StringArena {
    buf: Vec<u8>,
}

const DEFAULT_CAPACITY: usize = 4096;

impl StringArena {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Copies `text` into the arena and returns a stable view over the copy.
    pub fn intern(&mut self, text: &str) -> ArenaStr {
        let start = self.buf.len();
        self.buf.extend_from_slice(text.as_bytes());
        self.buf.push(0);
        ArenaStr {
            start: start as u32,
            len: text.len() as u32,
        }
    }

    /// Reserves a fixed writable region of `capacity` bytes (plus one NUL
    /// byte), for callers that know the upper bound of the transformation
    /// they are about to perform.
    pub fn allocate(&mut self, capacity: usize) -> Scratch {
        let start = self.buf.len();
        self.buf.resize(start + capacity + 1, 0);
        Scratch {
            start: start as u32,
            capacity: capacity as u32,
        }
    }

    /// Writable access to a reserved region.
    pub fn scratch_mut(&mut self, scratch: &Scratch) -> &mut [u8] {
        let start = scratch.start as usize;
        &mut self.buf[start..start + scratch.capacity as usize]
    }

    /// Shrinks a reserved region to the prefix actually written and
    /// returns a view over it. Excess reserved capacity is not reclaimed.
    pub fn finalize(&mut self, scratch: Scratch, used: usize) -> ArenaStr {
        debug_assert!(used <= scratch.capacity as usize);
        self.buf[scratch.start as usize + used] = 0;
        ArenaStr {
            start: scratch.start,
            len: used as u32,
        }
    }

    /// Resolves a view into the text it addresses.
    pub fn resolve(&self, view: ArenaStr) -> &str {
        let start = view.start as usize;
        // Arena contents only ever come from &str input or byte-preserving
        // transformations of it, so the slice is valid UTF-8.
        std::str::from_utf8(&self.buf[start..start + view.len as usize])
            .expect("arena contents are valid UTF-8")
    }

    /// Drops every allocation. All previously issued views are invalid
    /// after this; callers must not retain them across a clear.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Logical size in bytes. Strictly increases with every allocation.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Default for StringArena {
    fn default() -> Self {
        Self::new()
    }
}
