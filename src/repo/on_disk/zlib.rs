use std::io::{self, Error, ErrorKind, Write};

use flate2::{write::ZlibEncoder, Compression, Decompress, FlushDecompress, Status};

const INFLATE_CHUNK: usize = 8192;

/// Compress `data` as a zlib stream into `w`, returning `w` once the stream
/// is finished.
pub(super) fn deflate_into<W: Write>(w: W, data: &[u8]) -> io::Result<W> {
    let mut encoder = ZlibEncoder::new(w, Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Decompress a complete zlib stream.
///
/// Unlike `flate2::read::ZlibDecoder`, this fails if the input ends before
/// the stream does.
pub(super) fn inflate(compressed: &[u8]) -> io::Result<Vec<u8>> {
    let mut decompress = Decompress::new(true);
    let mut out = Vec::with_capacity(compressed.len().saturating_mul(2).max(64));

    loop {
        if out.len() == out.capacity() {
            out.reserve(INFLATE_CHUNK);
        }

        let in_before = decompress.total_in();
        let out_before = decompress.total_out();

        let status = decompress
            .decompress_vec(
                &compressed[in_before as usize..],
                &mut out,
                FlushDecompress::Finish,
            )
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

        if status == Status::StreamEnd {
            return Ok(out);
        }

        if decompress.total_in() == in_before && decompress.total_out() == out_before {
            return Err(Error::new(
                ErrorKind::UnexpectedEof,
                "zlib stream ends before it is complete",
            ));
        }
    }
}
