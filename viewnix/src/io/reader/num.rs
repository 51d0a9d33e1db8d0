use std::{
    io::{self, Read},
    mem,
};

pub(crate) fn read_u16_be<R>(reader: &mut R) -> io::Result<u16>
where
    R: Read,
{
    let mut buf = [0; mem::size_of::<u16>()];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

pub(crate) fn read_i16_be<R>(reader: &mut R) -> io::Result<i16>
where
    R: Read,
{
    let mut buf = [0; mem::size_of::<i16>()];
    reader.read_exact(&mut buf)?;
    Ok(i16::from_be_bytes(buf))
}

pub(crate) fn read_u32_be<R>(reader: &mut R) -> io::Result<u32>
where
    R: Read,
{
    let mut buf = [0; mem::size_of::<u32>()];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

pub(crate) fn read_i32_be<R>(reader: &mut R) -> io::Result<i32>
where
    R: Read,
{
    let mut buf = [0; mem::size_of::<i32>()];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_be_bytes(buf))
}

// `sscanf("%f")` semantics: skip leading whitespace and convert the longest
// numeric prefix. Anything unconvertible is 0.
pub(crate) fn parse_float_prefix(src: &[u8]) -> f32 {
    let src = src.trim_ascii_start();

    match lexical_core::parse_partial::<f32>(src) {
        Ok((n, len)) if len > 0 => n,
        _ => 0.0,
    }
}
