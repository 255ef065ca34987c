//! Component I: the driver. Wires the frequency counter, tree builder,
//! bitstream codec, and container header into `compress`/`expand`
//! functions generic over `Read + Seek` / `Write + Seek`, plus
//! `compress_slice`/`expand_slice` buffer convenience wrappers.
//!
//! Two-pass structure (frequency pass, rewind, encode pass) grounded on
//! `original_source/src/compress.hpp::compressFile`. Generic signatures
//! and chunked read loop grounded on
//! `retrocompressor::{lzw, td0}::{compress, expand}`.

use crate::{bitstream, container, huffman, Error, Options, DYNERR, STD_OPTIONS};
use std::io::{Read, Seek, SeekFrom, Write};

fn read_chunk<R: Read>(input: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match input.read(&mut buf[total..])? {
            0 => break,
            n => total += n,
        }
    }
    Ok(total)
}

/// Compresses all of `input` into `output`. Returns `(original_size,
/// archive_size)`. `input` is read twice: once to build the frequency
/// table, once (after rewinding) to encode.
pub fn compress<R: Read + Seek, W: Write + Seek>(
    input: &mut R,
    output: &mut W,
    opt: &Options,
) -> Result<(u64, u64), DYNERR> {
    if opt.max_code_len > 64 {
        return Err(Box::new(Error::BadMaxLen(opt.max_code_len)));
    }

    let original_size = input.seek(SeekFrom::End(0))?;
    input.seek(SeekFrom::Start(0))?;

    let mut freq = [0u64; 256];
    let mut buf = vec![0u8; opt.chunk_size];
    log::debug!("frequency pass over {original_size} bytes");
    loop {
        let n = read_chunk(input, &mut buf)?;
        if n == 0 {
            break;
        }
        huffman::update_frequency(&buf[..n], &mut freq);
    }

    let (codes, presented_byte_count) = huffman::build_code_table(&freq, opt.max_code_len)?;
    let lengths = huffman::serialize_lengths(&codes);
    let header = container::Header {
        original_size,
        lengths,
    };
    output.write_all(&header.to_bytes())?;
    log::debug!("wrote header, {presented_byte_count} distinct byte values present");

    if presented_byte_count > 0 {
        input.seek(SeekFrom::Start(0))?;
        let mut pending: Vec<u8> = Vec::new();
        let mut prev_offset: u8 = 0;
        let mut chunk_index = 0u64;
        loop {
            let n = read_chunk(input, &mut buf)?;
            if n == 0 {
                break;
            }
            bitstream::encode_chunk(&buf[..n], &codes, &mut pending, &mut prev_offset);
            log::trace!("encoded chunk {chunk_index} ({n} bytes)");
            if prev_offset != 0 {
                let last = pending.pop().expect("non-zero offset implies a pending byte");
                output.write_all(&pending)?;
                pending.clear();
                pending.push(last);
            } else {
                output.write_all(&pending)?;
                pending.clear();
            }
            chunk_index += 1;
        }
        if !pending.is_empty() {
            output.write_all(&pending)?;
        }
    }

    let archive_size = output.stream_position()?;
    Ok((original_size, archive_size))
}

/// Expands an lzip archive from `input` into `output`. Returns
/// `(archive_size, original_size)`.
pub fn expand<R: Read + Seek, W: Write + Seek>(
    input: &mut R,
    output: &mut W,
    opt: &Options,
) -> Result<(u64, u64), DYNERR> {
    let archive_size = input.seek(SeekFrom::End(0))?;
    input.seek(SeekFrom::Start(0))?;
    if archive_size < container::HEADER_LEN as u64 {
        return Err(Box::new(Error::NotAnArchive));
    }

    let mut header_buf = vec![0u8; container::HEADER_LEN];
    input.read_exact(&mut header_buf)?;
    let header = container::Header::from_bytes(&header_buf)?;
    let tree = huffman::build_decode_tree(&header.lengths);
    log::debug!(
        "header parsed, target {} bytes, {} tree nodes",
        header.original_size,
        tree.len()
    );

    let mut current_node: u16 = 0;
    let mut written: u64 = 0;
    let mut buf = vec![0u8; opt.chunk_size];
    let mut chunk_index = 0u64;
    while written < header.original_size {
        let n = read_chunk(input, &mut buf)?;
        if n == 0 {
            break;
        }
        let mut decoded = Vec::new();
        bitstream::decode_chunk(
            &buf[..n],
            &tree,
            &mut decoded,
            &mut current_node,
            &mut written,
            header.original_size,
        );
        output.write_all(&decoded)?;
        log::trace!("decoded chunk {chunk_index}, {written} bytes so far");
        chunk_index += 1;
    }

    let original_size = output.stream_position()?;
    Ok((archive_size, original_size))
}

/// Buffer convenience wrapper around [`compress`].
pub fn compress_slice(data: &[u8], opt: &Options) -> Result<Vec<u8>, DYNERR> {
    let mut src = std::io::Cursor::new(data);
    let mut dst: std::io::Cursor<Vec<u8>> = std::io::Cursor::new(Vec::new());
    compress(&mut src, &mut dst, opt)?;
    Ok(dst.into_inner())
}

/// Buffer convenience wrapper around [`expand`], using [`STD_OPTIONS`] for
/// its (decode-irrelevant, but streaming-relevant) chunk size.
pub fn expand_slice(data: &[u8]) -> Result<Vec<u8>, DYNERR> {
    let mut src = std::io::Cursor::new(data);
    let mut dst: std::io::Cursor<Vec<u8>> = std::io::Cursor::new(Vec::new());
    expand(&mut src, &mut dst, &STD_OPTIONS)?;
    Ok(dst.into_inner())
}
