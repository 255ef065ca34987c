//! Components F-G: the chunked bit encoder and decoder. Both carry state
//! across calls so a multi-chunk stream can be packed/unpacked without
//! holding the whole file in memory.
//!
//! Ported from `original_source/src/compress.hpp::compress` and
//! `decompress.hpp::decompress` — same cursor arithmetic, same
//! byte-boundary fast path, same chunk handoff of a single trailing
//! partial byte.

use crate::huffman::{DecodeNode, HuffmanCode, NONE};

/// Component F. Appends the canonical codes for `chunk` to `buf`, which may
/// already end in a partial byte from a previous call (indicated by
/// `prev_offset`, the number of used bits in that trailing byte, `0` if
/// `buf` ends on a byte boundary or is empty). Updates `prev_offset` to the
/// bit offset left in `buf`'s new trailing byte.
pub fn encode_chunk(
    chunk: &[u8],
    codes: &[HuffmanCode; 256],
    buf: &mut Vec<u8>,
    prev_offset: &mut u8,
) {
    let mut cursor: u64 = match buf.len() {
        0 => 0,
        1 => *prev_offset as u64,
        n => (((n - 1) as u64) << 3) + *prev_offset as u64,
    };

    for &byte in chunk {
        let huff = codes[byte as usize];
        let length = huff.code_len as u64;
        let code = huff.code;
        if length == 0 {
            continue;
        }
        let new_cursor = cursor + length;
        let crosses_byte = cursor == 0 || ((new_cursor - 1) >> 3) > ((cursor - 1) >> 3);

        if !crosses_byte {
            let idx = (cursor >> 3) as usize;
            let shift = 8 - length - (cursor & 7);
            buf[idx] |= (code << shift) as u8;
            cursor = new_cursor;
            continue;
        }

        let mut bits_left: u64;
        if cursor & 7 == 0 {
            buf.push(0);
            let last = buf.len() - 1;
            if length > 8 {
                buf[last] |= (code >> (length - 8)) as u8;
                cursor += 8;
                bits_left = length - 8;
            } else {
                buf[last] |= (code << (8 - length)) as u8;
                cursor = new_cursor;
                continue;
            }
        } else {
            let bits_in_last_byte = 8 - (cursor & 7);
            let idx = (cursor >> 3) as usize;
            buf[idx] |= (code >> (length - bits_in_last_byte)) as u8;
            cursor += bits_in_last_byte;
            bits_left = length - bits_in_last_byte;
        }
        while bits_left >= 8 {
            buf.push((code >> (bits_left - 8)) as u8);
            cursor += 8;
            bits_left -= 8;
        }
        if bits_left > 0 {
            buf.push((code << (8 - bits_left)) as u8);
            cursor += bits_left;
        }
    }

    *prev_offset = (cursor & 7) as u8;
}

/// Component G. Walks `data` bit by bit (MSB first) against `tree`,
/// starting from `*current_node`, appending decoded bytes to `out` until
/// either `data` is exhausted or `*written` reaches `max_bytes`. An empty
/// `tree` (zero-symbol archive) decodes nothing.
pub fn decode_chunk(
    data: &[u8],
    tree: &[DecodeNode],
    out: &mut Vec<u8>,
    current_node: &mut u16,
    written: &mut u64,
    max_bytes: u64,
) {
    if tree.is_empty() {
        return;
    }
    let total_bits = data.len() as u64 * 8;
    let mut i = 0u64;
    while i < total_bits {
        let byte = data[(i >> 3) as usize];
        let bit = (byte >> (7 - (i & 7))) & 1;
        let node = tree[*current_node as usize];
        *current_node = if bit == 1 { node.right } else { node.left };
        debug_assert_ne!(*current_node, NONE, "decode walked off the tree");
        let node = tree[*current_node as usize];
        if node.is_leaf {
            out.push(node.byte);
            *written += 1;
            *current_node = 0;
            if *written == max_bytes {
                return;
            }
        }
        i += 1;
    }
}
