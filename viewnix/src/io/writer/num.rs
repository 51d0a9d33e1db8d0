use std::io::{self, Write};

pub(crate) fn write_u16_be<W>(writer: &mut W, n: u16) -> io::Result<()>
where
    W: Write,
{
    writer.write_all(&n.to_be_bytes())
}

pub(crate) fn write_i16_be<W>(writer: &mut W, n: i16) -> io::Result<()>
where
    W: Write,
{
    writer.write_all(&n.to_be_bytes())
}

pub(crate) fn write_u32_be<W>(writer: &mut W, n: u32) -> io::Result<()>
where
    W: Write,
{
    writer.write_all(&n.to_be_bytes())
}

pub(crate) fn write_i32_be<W>(writer: &mut W, n: i32) -> io::Result<()>
where
    W: Write,
{
    writer.write_all(&n.to_be_bytes())
}

// C `printf("%e")` rendering: six fractional digits and a signed exponent of
// at least two digits, e.g. `1.500000e+00`.
pub(crate) fn format_exponential(n: f32) -> String {
    let s = format!("{:.6e}", f64::from(n));

    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or_default();
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_u16_be() -> io::Result<()> {
        let mut buf = Vec::new();
        write_u16_be(&mut buf, 0x0029)?;
        assert_eq!(buf, [0x00, 0x29]);
        Ok(())
    }

    #[test]
    fn test_write_i16_be() -> io::Result<()> {
        let mut buf = Vec::new();
        write_i16_be(&mut buf, -1)?;
        assert_eq!(buf, [0xff, 0xff]);
        Ok(())
    }

    #[test]
    fn test_write_u32_be() -> io::Result<()> {
        let mut buf = Vec::new();
        write_u32_be(&mut buf, 12)?;
        assert_eq!(buf, [0x00, 0x00, 0x00, 0x0c]);
        Ok(())
    }

    #[test]
    fn test_write_i32_be() -> io::Result<()> {
        let mut buf = Vec::new();
        write_i32_be(&mut buf, -2)?;
        assert_eq!(buf, [0xff, 0xff, 0xff, 0xfe]);
        Ok(())
    }

    #[test]
    fn test_format_exponential() {
        assert_eq!(format_exponential(1.5), "1.500000e+00");
        assert_eq!(format_exponential(0.25), "2.500000e-01");
        assert_eq!(format_exponential(-32767.0), "-3.276700e+04");
        assert_eq!(format_exponential(0.0), "0.000000e+00");
        assert_eq!(format_exponential(1.0e10), "1.000000e+10");
    }
}
