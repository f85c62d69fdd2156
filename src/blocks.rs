//! Fixed-size block segmentation

/// Forward-only iterator over the chunks of a byte buffer.
///
/// Yields `(chunk, is_last)` pairs. Every chunk is at most `size` bytes,
/// their concatenation reproduces the input exactly, and `is_last` is true
/// exactly for the final chunk. An empty buffer yields nothing.
pub struct Blocks<'a> {
    buf: &'a [u8],
    size: usize,
}

/// Segment `buf` into chunks of at most `size` bytes.
///
/// Panics if `size` is zero.
pub fn blocks(buf: &[u8], size: usize) -> Blocks<'_> {
    assert!(size > 0, "block size must be non-zero");
    Blocks { buf, size }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = (&'a [u8], bool);

    fn next(&mut self) -> Option<Self::Item> {
        if self.buf.is_empty() {
            return None;
        }
        let take = self.buf.len().min(self.size);
        let (chunk, rest) = self.buf.split_at(take);
        self.buf = rest;
        Some((chunk, rest.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        assert_eq!(blocks(b"", 16).count(), 0);
    }

    #[test]
    fn test_single_short_chunk() {
        let out: Vec<_> = blocks(b"abc", 16).collect();
        assert_eq!(out, vec![(&b"abc"[..], true)]);
    }

    #[test]
    fn test_exact_single_block() {
        let out: Vec<_> = blocks(b"0123456789abcdef", 16).collect();
        assert_eq!(out, vec![(&b"0123456789abcdef"[..], true)]);
    }

    #[test]
    fn test_multiple_with_remainder() {
        let out: Vec<_> = blocks(b"0123456789", 4).collect();
        assert_eq!(
            out,
            vec![
                (&b"0123"[..], false),
                (&b"4567"[..], false),
                (&b"89"[..], true),
            ]
        );
    }

    #[test]
    fn test_exact_multiple_marks_final_full_chunk_last() {
        let out: Vec<_> = blocks(b"01234567", 4).collect();
        assert_eq!(out, vec![(&b"0123"[..], false), (&b"4567"[..], true)]);
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let input: Vec<u8> = (0..=255).collect();
        let rejoined: Vec<u8> = blocks(&input, 7).flat_map(|(c, _)| c.to_vec()).collect();
        assert_eq!(rejoined, input);
    }

    #[test]
    #[should_panic(expected = "block size must be non-zero")]
    fn test_zero_size_panics() {
        let _ = blocks(b"abc", 0);
    }
}
