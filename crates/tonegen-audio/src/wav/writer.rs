//! Header serialization.

use std::io::{self, Write};

use super::format::WavFormat;

/// Total header size: RIFF chunk header through the end of the data chunk
/// header.
const HEADER_LEN: u32 = 44;

/// Bytes excluded from the RIFF chunk size: the ChunkID and ChunkSize fields
/// themselves.
const RIFF_OVERHEAD: u32 = 8;

/// Writes a complete WAV file to a writer.
///
/// The header layout is fixed: tag fields (`RIFF`, `WAVE`, `fmt `, `data`)
/// are emitted as ASCII in reading order, and all numeric fields are emitted
/// little-endian via [`u16::to_le_bytes`]/[`u32::to_le_bytes`], so the bytes
/// come out the same on any host.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - Format parameters
/// * `pcm_data` - Raw PCM payload, copied verbatim after the header
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let riff_size = HEADER_LEN - RIFF_OVERHEAD + data_size;

    // RIFF chunk
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt subchunk: 16-byte body describing integer PCM
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // format code 1 = PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data subchunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a complete WAV file to a byte vector.
///
/// Infallible convenience over [`write_wav`]; writing into a `Vec` cannot
/// fail.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN as usize + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}
